//! Build script for CookPilot
//!
//! Embeds a build number and UTC timestamp. CI can pin the number through
//! COOKPILOT_BUILD_NUMBER; local builds bump a counter in build_number.txt.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

fn next_local_build(counter: &Path) -> u64 {
    let previous = fs::read_to_string(counter)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let next = previous + 1;
    if let Err(e) = fs::write(counter, next.to_string()) {
        println!("cargo:warning=Could not update {}: {}", counter.display(), e);
    }
    next
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=COOKPILOT_BUILD_NUMBER");

    let build = std::env::var("COOKPILOT_BUILD_NUMBER")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or_else(|| next_local_build(Path::new(COUNTER_FILE)));

    let stamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    println!("cargo:rustc-env=COOKPILOT_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=COOKPILOT_BUILD_TIMESTAMP={}", stamp);
    println!("cargo:warning=CookPilot Build #{} at {}", build, stamp);
}
