//! Scalar scans: byte OR-accumulate and 64-bit word loop.

use super::assert_granularity;
use super::probe::Probe;
use crate::constants::WORD_SIZE;

/// ORs every byte into one accumulator; true if the result is zero.
///
/// Visits every byte in index order with no early exit. This is the reference
/// every other strategy must agree with.
#[inline]
pub fn is_empty_simple_or<const N: usize>(buffer: &[u8; N]) -> bool {
    scan_simple_or(buffer, &mut ())
}

/// [`is_empty_simple_or`] reporting each byte to `probe`.
#[inline(always)]
pub fn scan_simple_or<const N: usize>(buffer: &[u8; N], probe: &mut impl Probe) -> bool {
    let mut acc = 0u8;
    for (offset, &byte) in buffer.iter().enumerate() {
        probe.visit(offset, 1);
        acc |= byte;
    }
    acc == 0
}

/// Tests one native-endian `u64` at a time, returning at the first non-zero
/// word.
///
/// `N` must be a non-zero multiple of [`WORD_SIZE`]; anything else fails to
/// build:
///
/// ```compile_fail
/// let buffer = [0u8; 12];
/// zerocheck::scan::is_empty_word_loop(&buffer);
/// ```
///
/// ```compile_fail
/// let buffer = [0u8; 0];
/// zerocheck::scan::is_empty_word_loop(&buffer);
/// ```
#[inline]
pub fn is_empty_word_loop<const N: usize>(buffer: &[u8; N]) -> bool {
    scan_word_loop(buffer, &mut ())
}

/// [`is_empty_word_loop`] reporting each word to `probe`.
#[inline(always)]
pub fn scan_word_loop<const N: usize>(buffer: &[u8; N], probe: &mut impl Probe) -> bool {
    const { assert_granularity(N, WORD_SIZE) };

    let (words, rest) = buffer.as_chunks::<WORD_SIZE>();
    debug_assert!(rest.is_empty());

    for (index, word) in words.iter().enumerate() {
        probe.visit(index * WORD_SIZE, WORD_SIZE);
        if u64::from_ne_bytes(*word) != 0 {
            return false;
        }
    }
    true
}
