//! Integration tests for the exported draw macros
//!
//! These exercise the macro surface the way a consuming crate would:
//! in `const` items, array lengths, and const generic arguments.

use ctrng::{ForceConst, M, SEED};

const RAW: u32 = ctrng::random!();
const AT_FIVE: u32 = ctrng::random!(5);
const AT_FIVE_AGAIN: u32 = ctrng::random!(5);
const AT_SIX: u32 = ctrng::random!(6);
const BOUNDED: u32 = ctrng::random_in_range!(100, 250);
const COIN: u32 = ctrng::random_bool!();

// A drawn constant is a genuine literal, so it can size an array.
const LEN: usize = ctrng::random_in_range!(16, 32) as usize;

fn parameterized<const N: u32>() -> u32 {
    N
}

#[test]
fn raw_draw_is_masked() {
    assert!(RAW <= M);
}

#[test]
fn same_index_is_interchangeable() {
    assert_eq!(AT_FIVE, AT_FIVE_AGAIN);
    assert_eq!(AT_FIVE, ctrng::recursive_rng(5));

    // Equal values name the same ForceConst type, so this unifies.
    let _: ForceConst<{ ctrng::recursive_rng(5) }> = ForceConst::<{ ctrng::recursive_rng(5) }>;
}

#[test]
fn consecutive_indices_differ() {
    // Holds for every nonzero seed; a build at exactly 00:00:00 seeds the
    // generator with zero and degenerates the stream to all zeros.
    if SEED != 0 {
        assert_ne!(AT_FIVE, AT_SIX);
    }
}

#[test]
fn bounded_draw_is_inclusive() {
    assert!(BOUNDED >= 100 && BOUNDED <= 250);
}

#[test]
fn coin_is_binary() {
    assert!(COIN == 0 || COIN == 1);
}

#[test]
fn draw_sizes_an_array() {
    let buffer = [0u8; LEN];
    assert!(buffer.len() >= 16 && buffer.len() <= 32);
}

#[test]
fn draw_feeds_a_const_generic_argument() {
    assert_eq!(parameterized::<{ ctrng::random!(7) }>(), ctrng::recursive_rng(7));
}

#[test]
fn seed_is_exposed_for_inspection() {
    assert_eq!(SEED, ctrng::seed::seed_from_time(ctrng::BUILD_TIME.as_bytes()));
    assert!(SEED <= 86399);
}
