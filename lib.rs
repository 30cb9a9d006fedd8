//! ctrng - compile-time pseudo-random constants
//!
//! This crate is a linear congruential generator that runs entirely inside
//! the compiler, seeded from the time of the build. Every value it hands
//! out is a genuine literal, usable for array lengths, const generic
//! arguments, match guards, and obfuscation constants. There is no runtime
//! component at all: no state, no I/O, nothing to initialize.
//!
//! The generator is NOT statistically rigorous and NOT cryptographically
//! secure; it is for build-time variation, never for tokens or keys.
//!
//! # Usage
//!
//! ```
//! let id: u32 = ctrng::random!();
//! let delay: u32 = ctrng::random_in_range!(100, 250);
//! let coin: u32 = ctrng::random_bool!();
//!
//! const LEN: usize = ctrng::random_in_range!(16, 32) as usize;
//! let buffer = [0u8; LEN];
//! # assert!(id <= ctrng::M);
//! # assert!(delay >= 100 && delay <= 250);
//! # assert!(coin == 0 || coin == 1);
//! # assert_eq!(buffer.len(), LEN);
//! ```

#![no_std]

// Core modules
pub mod force;
pub mod lcg;
pub mod params;
pub mod seed;

// Re-export key items for convenience
pub use force::ForceConst;
pub use lcg::{nth_from, recursive_rng};
pub use params::{A, C, M};
pub use seed::{BUILD_TIME, SEED};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
