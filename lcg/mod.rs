//! Recursive compile-time generator
//!
//! This module implements the LCG recurrence as a recursive `const fn`,
//! together with the draw macros built on top of it.

use crate::params::{A, C, M};
use crate::seed::SEED;

/// Number of distinct call-site ordinals `random!()` can derive.
///
/// Compile-time evaluation spends one stack frame per recursion step, and
/// the evaluating crate's `recursion_limit` (128 unless raised) caps those
/// frames, so derived ordinals are folded into `[1, MAX_SITE_STEPS]`. A
/// prime modulus keeps same-column call sites collision-free unless they
/// are exactly this many lines apart.
pub const MAX_SITE_STEPS: u32 = 89;

/// The `num`-th value of the recurrence past `seed`.
///
/// `num == 0` is one application of the recurrence, not the seed itself.
/// The intermediate `C + A * x` wraps modulo 2^32, and the reduction is a
/// bitwise AND with [`M`], not a modulo; draws therefore land in `[0, M]`
/// inclusive. Both details are contractual: every downstream constant
/// changes if either is "corrected".
pub const fn nth_from(seed: u32, num: u32) -> u32 {
    let prev = if num > 0 { nth_from(seed, num - 1) } else { seed };
    C.wrapping_add(A.wrapping_mul(prev)) & M
}

/// The `num`-th value past this build's [`SEED`](crate::seed::SEED).
///
/// Recursion depth is `num + 1`, so in `const` contexts `num` is bounded
/// by the evaluating crate's `recursion_limit`; raise it with
/// `#![recursion_limit = "..."]` when larger explicit indices are needed.
/// Runtime callers (tests) are bounded only by the native stack.
pub const fn recursive_rng(num: u32) -> u32 {
    nth_from(SEED, num)
}

/// Fold a call site's line and column into a step count in `[1, MAX_SITE_STEPS]`.
///
/// Stands in for a monotonic expansion counter, which Rust does not have.
/// Distinct call sites normally get distinct ordinals, but sites whose
/// `line * 8 + column` differ by a multiple of [`MAX_SITE_STEPS`] collide
/// and repeat the same value. Use `random!(num)` with caller-chosen
/// indices when distinctness must be guaranteed.
pub const fn site_ordinal(line: u32, column: u32) -> u32 {
    1 + line.wrapping_mul(8).wrapping_add(column) % MAX_SITE_STEPS
}

/// Bounded draw arithmetic: `min + (value & M) % (max - min + 1)`.
///
/// Inclusive on both ends. Requires `min <= max`; with `min > max` the
/// span underflows, which fails the build in `const` contexts and is
/// otherwise unspecified. Ranges that do not evenly divide [`M`] keep the
/// usual modulo bias; there is deliberately no rejection sampling.
pub const fn in_range(value: u32, min: u32, max: u32) -> u32 {
    min + (value & M) % (max - min + 1)
}

/// One raw draw, forced to a compile-time literal in `[0, M]`.
///
/// With no argument the generator advances by an ordinal derived from the
/// call site's line and column (see [`site_ordinal`](crate::lcg::site_ordinal)).
/// With an explicit `num` the caller controls the step count; reusing an
/// index reproduces the same value.
#[macro_export]
macro_rules! random {
    () => {
        $crate::random!($crate::lcg::site_ordinal(line!(), column!()))
    };
    ($num:expr) => {
        $crate::force::ForceConst::<{ $crate::lcg::recursive_rng($num) }>::VALUE
    };
}

/// One bounded draw in `[min, max]`, inclusive on both ends.
///
/// Requires `min <= max`; see [`in_range`](crate::lcg::in_range) for the
/// arithmetic and its caveats.
#[macro_export]
macro_rules! random_in_range {
    ($min:expr, $max:expr) => {
        $crate::lcg::in_range($crate::random!(), $min, $max)
    };
}

/// Boolean-like draw: `0` or `1`.
///
/// Drawn over `[0, 100]` and reduced modulo 2 rather than bounded straight
/// to `[0, 1]`; the wider intermediate range keeps the modulo bias smaller.
#[macro_export]
macro_rules! random_bool {
    () => {
        $crate::random_in_range!(0, 100) % 2
    };
}
