//! Build script for ctrng
//!
//! This script captures the wall-clock time of the build and injects it
//! into the crate environment as a fixed-width `HH:MM:SS` string, which
//! the seed derivation consumes at compile time.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let epoch = build_epoch();
    let (hours, minutes, seconds) = split_time_of_day(epoch);

    // Fixed-width HH:MM:SS, the shape the seed derivation expects
    println!(
        "cargo:rustc-env=CTRNG_BUILD_TIME={:02}:{:02}:{:02}",
        hours, minutes, seconds
    );
}

/// Seconds since the Unix epoch for this build.
///
/// Honors `SOURCE_DATE_EPOCH` (the reproducible-builds convention) when it
/// is set and parseable, otherwise falls back to the current wall clock.
fn build_epoch() -> u64 {
    if let Ok(value) = env::var("SOURCE_DATE_EPOCH") {
        if let Ok(epoch) = value.parse::<u64>() {
            return epoch;
        }
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

/// Split an epoch timestamp into (hours, minutes, seconds) of the UTC day.
fn split_time_of_day(epoch: u64) -> (u64, u64, u64) {
    let seconds_of_day = epoch % 86400;

    let hours = seconds_of_day / 3600;
    let minutes = (seconds_of_day % 3600) / 60;
    let seconds = seconds_of_day % 60;

    (hours, minutes, seconds)
}
