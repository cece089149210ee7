//! Quantity parsing
//!
//! Turns a free-text amount such as "2", "3/4 cup", "2 1/4 cups flour" or
//! "to taste" into a number, a unit and a trailing name. Parsing never fails:
//! text without a leading number degrades to a quantity of 1 with
//! `parse_ok = false`, and the caller decides whether that needs a warning.

use serde::Serialize;

/// Structured view of a quantity string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    pub value: f64,
    pub unit: String,
    pub name: String,
    pub parse_ok: bool,
}

impl ParsedQuantity {
    fn fallback(original: &str) -> Self {
        Self {
            value: 1.0,
            unit: String::new(),
            name: original.to_string(),
            parse_ok: false,
        }
    }
}

/// Parse a quantity string, using `unit_hint` when the text carries no unit
pub fn parse_quantity(quantity_text: &str, unit_hint: Option<&str>) -> ParsedQuantity {
    let Some((value, remainder)) = split_numeric_prefix(quantity_text) else {
        return ParsedQuantity::fallback(quantity_text);
    };

    let mut rest = remainder.split_whitespace();
    let unit = match rest.next() {
        Some(token) => token.to_string(),
        None => unit_hint.map(|u| u.trim().to_string()).unwrap_or_default(),
    };
    let name = rest.collect::<Vec<_>>().join(" ");

    ParsedQuantity {
        value,
        unit,
        name,
        parse_ok: true,
    }
}

/// Split the leading numeric amount from a quantity string.
///
/// Accepts an integer, a decimal, a fraction ("3/4") or a mixed number
/// ("2 1/4"). Returns the value and the untouched remainder of the string.
/// Negative, zero-denominator and non-finite amounts are not numeric.
pub fn split_numeric_prefix(text: &str) -> Option<(f64, &str)> {
    let trimmed = text.trim_start();
    let (first, after_first) = next_token(trimmed)?;
    let whole = parse_number(first)?;

    // Mixed number: an integer followed by a proper fraction
    if !first.contains(['.', '/']) {
        if let Some((second, after_second)) = next_token(after_first.trim_start()) {
            if second.contains('/') {
                if let Some(frac) = parse_number(second) {
                    return Some((whole + frac, after_second));
                }
            }
        }
    }

    Some((whole, after_first))
}

fn next_token(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

fn parse_number(token: &str) -> Option<f64> {
    let value = match token.split_once('/') {
        Some(_) => parse_fraction(token)?,
        None => token.parse::<f64>().ok()?,
    };
    (value.is_finite() && value >= 0.0).then_some(value)
}

fn parse_fraction(s: &str) -> Option<f64> {
    let (num, denom) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let denom: f64 = denom.trim().parse().ok()?;
    if denom == 0.0 {
        return None;
    }
    Some(num / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_with_unit_and_name() {
        let parsed = parse_quantity("2 cups flour", None);
        assert_eq!(parsed.value, 2.0);
        assert_eq!(parsed.unit, "cups");
        assert_eq!(parsed.name, "flour");
        assert!(parsed.parse_ok);
    }

    #[test]
    fn test_decimal_and_fraction() {
        assert_eq!(parse_quantity("1.5", None).value, 1.5);
        assert_eq!(parse_quantity("3/4 cup", None).value, 0.75);
        assert_eq!(parse_quantity("3/4 cup", None).unit, "cup");
    }

    #[test]
    fn test_mixed_number() {
        let parsed = parse_quantity("2 1/4 cups", None);
        assert_eq!(parsed.value, 2.25);
        assert_eq!(parsed.unit, "cups");
    }

    #[test]
    fn test_decimal_is_not_combined_with_fraction() {
        let parsed = parse_quantity("1.5 1/2", None);
        assert_eq!(parsed.value, 1.5);
        assert_eq!(parsed.unit, "1/2");
    }

    #[test]
    fn test_unit_hint_used_only_without_unit_token() {
        assert_eq!(parse_quantity("2", Some("cups")).unit, "cups");
        assert_eq!(parse_quantity("2 tbsp", Some("cups")).unit, "tbsp");
        assert_eq!(parse_quantity("2", None).unit, "");
    }

    #[test]
    fn test_unparseable_degrades_to_one() {
        let parsed = parse_quantity("to taste", Some("pinch"));
        assert_eq!(parsed.value, 1.0);
        assert!(!parsed.parse_ok);
        assert_eq!(parsed.name, "to taste");
        assert_eq!(parsed.unit, "");
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(!parse_quantity("", None).parse_ok);
        assert!(!parse_quantity("   ", None).parse_ok);
        assert!(!parse_quantity("1/0 cup", None).parse_ok);
        assert!(!parse_quantity("-2 cups", None).parse_ok);
        assert!(!parse_quantity("NaN", None).parse_ok);
        assert!(!parse_quantity("inf", None).parse_ok);
    }

    #[test]
    fn test_split_numeric_prefix_keeps_remainder() {
        let (value, rest) = split_numeric_prefix("2 1/4 cups flour").unwrap();
        assert_eq!(value, 2.25);
        assert_eq!(rest, " cups flour");
        assert!(split_numeric_prefix("a pinch").is_none());
    }
}
