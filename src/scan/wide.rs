//! Wide-register scans.
//!
//! All three split the buffer into [`LANE_SIZE`] chunks and require `N` to be
//! a non-zero multiple of it, checked when the function is instantiated:
//!
//! ```compile_fail
//! // 48 bytes is one and a half lanes.
//! let buffer = [0u8; 48];
//! zerocheck::scan::is_empty_or(&buffer);
//! ```
//!
//! ```compile_fail
//! // Smaller than one lane.
//! let buffer = [0u8; 16];
//! zerocheck::scan::is_empty_loop_unrolled(&buffer);
//! ```
//!
//! ```compile_fail
//! let buffer = [0u8; 520];
//! zerocheck::scan::is_empty_loop(&buffer);
//! ```
//!
//! The public `is_empty_*` functions use the build's [`WideLane`]; the
//! `scan_*` forms take any [`Lane`] plus a [`Probe`].
//!
//! Rust has no loop-unroll attribute. The unrolled loop keeps a constant trip
//! count and is force-inlined so LLVM unrolls it fully; the rolled loop hides
//! its trip count behind [`black_box`], which leaves LLVM nothing to unroll by.

use core::hint::black_box;

use super::assert_granularity;
use super::probe::Probe;
use crate::lane::{LANE_SIZE, Lane, WideLane};

#[inline(always)]
fn lanes<const N: usize>(buffer: &[u8; N]) -> &[[u8; LANE_SIZE]] {
    let (chunks, rest) = buffer.as_chunks::<LANE_SIZE>();
    debug_assert!(rest.is_empty());
    debug_assert_eq!(chunks.len(), N / LANE_SIZE);
    chunks
}

/// ORs all chunks into one lane, then tests it once. No early exit.
#[inline]
pub fn is_empty_or<const N: usize>(buffer: &[u8; N]) -> bool {
    scan_or::<WideLane, N>(buffer, &mut ())
}

/// [`is_empty_or`] over lane `L`, reporting each chunk to `probe`.
#[inline(always)]
pub fn scan_or<L: Lane, const N: usize>(buffer: &[u8; N], probe: &mut impl Probe) -> bool {
    const { assert_granularity(N, LANE_SIZE) };

    lanes(buffer)
        .iter()
        .enumerate()
        .fold(L::zero(), |acc, (index, chunk)| {
            probe.visit(index * LANE_SIZE, LANE_SIZE);
            acc.or(L::load(chunk))
        })
        .is_zero()
}

/// Fully unrolled chunk loop; returns at the first non-zero chunk.
#[inline]
pub fn is_empty_loop_unrolled<const N: usize>(buffer: &[u8; N]) -> bool {
    scan_loop_unrolled::<WideLane, N>(buffer, &mut ())
}

/// [`is_empty_loop_unrolled`] over lane `L`, reporting each chunk to `probe`.
#[inline(always)]
pub fn scan_loop_unrolled<L: Lane, const N: usize>(
    buffer: &[u8; N],
    probe: &mut impl Probe,
) -> bool {
    const { assert_granularity(N, LANE_SIZE) };

    for (index, chunk) in lanes(buffer).iter().enumerate() {
        probe.visit(index * LANE_SIZE, LANE_SIZE);
        if !L::load(chunk).is_zero() {
            return false;
        }
    }
    true
}

/// Rolled chunk loop; returns at the first non-zero chunk.
#[inline]
pub fn is_empty_loop<const N: usize>(buffer: &[u8; N]) -> bool {
    scan_loop::<WideLane, N>(buffer, &mut ())
}

/// [`is_empty_loop`] over lane `L`, reporting each chunk to `probe`.
#[inline]
pub fn scan_loop<L: Lane, const N: usize>(buffer: &[u8; N], probe: &mut impl Probe) -> bool {
    const { assert_granularity(N, LANE_SIZE) };

    let count = black_box(N / LANE_SIZE);
    for (index, chunk) in lanes(buffer).iter().take(count).enumerate() {
        probe.visit(index * LANE_SIZE, LANE_SIZE);
        if !L::load(chunk).is_zero() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BUFFER_SIZE;
    use crate::lane::PortableLane;
    use crate::scan::probe::Tally;
    use crate::test_utils::{buffer_with, proptest_cases};
    use crate::util::is_all_zeros;
    use proptest::prelude::*;

    const CHUNKS: usize = BUFFER_SIZE / LANE_SIZE;

    type Scan = fn(&[u8; BUFFER_SIZE], &mut Tally) -> bool;

    fn early_exit_scans() -> [(&'static str, Scan); 4] {
        [
            ("unrolled/wide", |b, p| scan_loop_unrolled::<WideLane, BUFFER_SIZE>(b, p)),
            ("unrolled/portable", |b, p| {
                scan_loop_unrolled::<PortableLane, BUFFER_SIZE>(b, p)
            }),
            ("loop/wide", |b, p| scan_loop::<WideLane, BUFFER_SIZE>(b, p)),
            ("loop/portable", |b, p| scan_loop::<PortableLane, BUFFER_SIZE>(b, p)),
        ]
    }

    #[test]
    fn early_exit_on_first_chunk() {
        let buffer = buffer_with::<BUFFER_SIZE>(0, 0xFF);
        for (name, scan) in early_exit_scans() {
            let mut tally = Tally::default();
            assert!(!scan(&buffer, &mut tally), "{}", name);
            assert_eq!(tally, Tally { visits: 1, bytes: LANE_SIZE }, "{}", name);
        }
    }

    #[test]
    fn early_exit_scans_whole_buffer_for_last_byte() {
        let buffer = buffer_with::<BUFFER_SIZE>(BUFFER_SIZE - 1, 0x01);
        for (name, scan) in early_exit_scans() {
            let mut tally = Tally::default();
            assert!(!scan(&buffer, &mut tally), "{}", name);
            assert_eq!(tally.visits, CHUNKS, "{}", name);
            assert_eq!(tally.bytes, BUFFER_SIZE, "{}", name);
        }
    }

    #[test]
    fn or_reduce_always_visits_every_chunk() {
        for index in [0, LANE_SIZE, BUFFER_SIZE - 1] {
            let buffer = buffer_with::<BUFFER_SIZE>(index, 0x10);
            let mut tally = Tally::default();
            assert!(!scan_or::<WideLane, BUFFER_SIZE>(&buffer, &mut tally));
            assert_eq!(tally.visits, CHUNKS);
        }

        let mut tally = Tally::default();
        assert!(scan_or::<PortableLane, BUFFER_SIZE>(&[0; BUFFER_SIZE], &mut tally));
        assert_eq!(tally.bytes, BUFFER_SIZE);
    }

    #[test]
    fn single_lane_buffer() {
        let zero = [0u8; LANE_SIZE];
        assert!(is_empty_or(&zero));
        assert!(is_empty_loop_unrolled(&zero));
        assert!(is_empty_loop(&zero));

        for index in 0..LANE_SIZE {
            let buffer = buffer_with::<LANE_SIZE>(index, 0x04);
            assert!(!is_empty_or(&buffer));
            assert!(!is_empty_loop_unrolled(&buffer));
            assert!(!is_empty_loop(&buffer));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(proptest_cases(256)))]

        #[test]
        fn wide_scans_match_oracle(index in 0usize..BUFFER_SIZE, value in any::<u8>()) {
            let buffer = buffer_with::<BUFFER_SIZE>(index, value);
            let expected = is_all_zeros(&buffer);
            prop_assert_eq!(is_empty_or(&buffer), expected);
            prop_assert_eq!(is_empty_loop_unrolled(&buffer), expected);
            prop_assert_eq!(is_empty_loop(&buffer), expected);
            prop_assert_eq!(scan_or::<PortableLane, BUFFER_SIZE>(&buffer, &mut ()), expected);
        }

        #[test]
        fn wide_scans_match_oracle_sparse(
            bytes in proptest::collection::vec(prop_oneof![31 => Just(0u8), 1 => any::<u8>()], 96)
        ) {
            let buffer: [u8; 96] = bytes.try_into().unwrap();
            let expected = is_all_zeros(&buffer);
            prop_assert_eq!(is_empty_or(&buffer), expected);
            prop_assert_eq!(is_empty_loop_unrolled(&buffer), expected);
            prop_assert_eq!(is_empty_loop(&buffer), expected);
        }
    }
}
