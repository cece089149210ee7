//! Substitution option and balance result types

use serde::{Deserialize, Serialize};

/// Signed change to each balance axis, applied to a baseline of 100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEffect {
    #[serde(default)]
    pub flavor: i32,
    #[serde(default)]
    pub texture: i32,
    #[serde(default)]
    pub moisture: i32,
}

/// Largest accepted change on any axis, in either direction
pub const MAX_AXIS_EFFECT: i32 = 100;

impl BalanceEffect {
    pub const fn new(flavor: i32, texture: i32, moisture: i32) -> Self {
        Self { flavor, texture, moisture }
    }

    /// First axis whose change exceeds [`MAX_AXIS_EFFECT`], with its value
    pub fn first_out_of_range(&self) -> Option<(&'static str, i32)> {
        [
            ("flavor", self.flavor),
            ("texture", self.texture),
            ("moisture", self.moisture),
        ]
        .into_iter()
        .find(|(_, v)| !(-MAX_AXIS_EFFECT..=MAX_AXIS_EFFECT).contains(v))
    }
}

/// A candidate replacement for an ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionOption {
    pub substitute_name: String,
    /// Advisory ratio, e.g. "1:1" or "1/4 cup per egg"
    pub ratio_text: String,
    pub impact_description: String,
    #[serde(default)]
    pub balance_effect: BalanceEffect,
}

impl SubstitutionOption {
    pub fn new(
        substitute_name: impl Into<String>,
        ratio_text: impl Into<String>,
        impact_description: impl Into<String>,
        balance_effect: BalanceEffect,
    ) -> Self {
        Self {
            substitute_name: substitute_name.into(),
            ratio_text: ratio_text.into(),
            impact_description: impact_description.into(),
            balance_effect,
        }
    }
}

/// Where an axis value sits relative to the 100 baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceBand {
    /// Below 80
    PoorLow,
    /// 80 through 89
    CautionLow,
    /// 90 through 110
    Good,
    /// 111 through 120
    CautionHigh,
    /// Above 120
    PoorHigh,
}

impl BalanceBand {
    pub fn from_value(value: i32) -> Self {
        match value {
            v if v < 80 => BalanceBand::PoorLow,
            v if v < 90 => BalanceBand::CautionLow,
            v if v <= 110 => BalanceBand::Good,
            v if v <= 120 => BalanceBand::CautionHigh,
            _ => BalanceBand::PoorHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceBand::PoorLow => "poor_low",
            BalanceBand::CautionLow => "caution_low",
            BalanceBand::Good => "good",
            BalanceBand::CautionHigh => "caution_high",
            BalanceBand::PoorHigh => "poor_high",
        }
    }
}

/// Band per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBands {
    pub flavor: BalanceBand,
    pub texture: BalanceBand,
    pub moisture: BalanceBand,
}

/// Overall suitability of a substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionVerdict {
    /// Every axis within 90..=110
    Excellent,
    /// Every axis within 80..=120
    Good,
    Challenging,
}

/// Post-substitution balance with derived advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResult {
    pub flavor: i32,
    pub texture: i32,
    pub moisture: i32,
    pub bands: AxisBands,
    pub adjustments: Vec<String>,
    pub verdict: SubstitutionVerdict,
    pub summary: String,
}
