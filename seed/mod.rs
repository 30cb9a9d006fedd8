//! Build-timestamp seed derivation
//!
//! This module derives the generator seed from the wall-clock time of the
//! build, injected by the build script as a fixed-width `HH:MM:SS` string.

use static_assertions::const_assert;

use crate::params::{check_seed, M};

/// Time of the build as `HH:MM:SS`, injected by the build script.
///
/// Set `SOURCE_DATE_EPOCH` for a reproducible seed; see `build.rs`.
pub const BUILD_TIME: &str = env!("CTRNG_BUILD_TIME");

/// Digit value of byte `idx` of a timestamp string.
const fn digit(time: &[u8], idx: usize) -> u32 {
    (time[idx] - b'0') as u32
}

/// Combine the six digits of an `HH:MM:SS` byte string into a seed.
///
/// The per-character weight table is load-bearing: every derived constant
/// changes if it is rewritten, so keep it exactly as is. (The sum works
/// out to the seconds elapsed in the day, at most 86399.)
pub const fn seed_from_time(time: &[u8]) -> u32 {
    digit(time, 7) * 1 + digit(time, 6) * 10
        + digit(time, 4) * 60 + digit(time, 3) * 600
        + digit(time, 1) * 3600 + digit(time, 0) * 36000
}

/// Generator seed for this build, fixed once per compilation of the crate.
///
/// A build at exactly `00:00:00` yields a zero seed, and with a zero
/// increment the whole output stream degenerates to zero.
pub const SEED: u32 = seed_from_time(BUILD_TIME.as_bytes());

// The build script must hand us exactly "HH:MM:SS".
const_assert!(BUILD_TIME.len() == 8);
const_assert!(BUILD_TIME.as_bytes()[2] == b':');
const_assert!(BUILD_TIME.as_bytes()[5] == b':');

const _: () = check_seed(SEED, M);
