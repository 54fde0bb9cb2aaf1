//! Zero-test strategies.
//!
//! Every strategy answers the same question for a `&[u8; N]`: is every byte
//! zero? They differ only in traversal order, word width and whether they
//! stop at the first non-zero unit. Strategies with a granularity (word or
//! lane) reject a non-conforming `N` at build time.

pub mod baseline;
pub mod probe;
pub mod scalar;
pub mod wide;

pub use baseline::{is_empty_compare_with_zero, is_empty_memcmp};
pub use probe::{Probe, Tally};
pub use scalar::{is_empty_simple_or, is_empty_word_loop, scan_simple_or, scan_word_loop};
pub use wide::{
    is_empty_loop, is_empty_loop_unrolled, is_empty_or, scan_loop, scan_loop_unrolled, scan_or,
};

/// Build-time precondition of the granular scans: `len` is a non-zero multiple
/// of `width`. Call from an inline `const` block so a violation fails the build
/// when the scan is instantiated.
pub(crate) const fn assert_granularity(len: usize, width: usize) {
    assert!(width > 0);
    assert!(len >= width, "buffer is smaller than one scan unit");
    assert!(
        len.is_multiple_of(width),
        "buffer length is not a multiple of the scan unit"
    );
}

/// One of the interchangeable zero-test algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Wide-register OR-reduce, single test at the end.
    WideOr,
    /// Byte-wise OR accumulate.
    SimpleOr,
    /// Wide-register loop, rolled, early exit.
    Loop,
    /// Wide-register loop, fully unrolled, early exit.
    LoopUnrolled,
    /// 64-bit word loop, early exit.
    WordLoop,
    /// Array equality against a static zero buffer.
    CompareWithZero,
    /// `memcmp` against a static zero buffer.
    Memcmp,
}

impl Strategy {
    /// Every strategy, in benchmark registration order.
    pub const ALL: [Strategy; 7] = [
        Strategy::WideOr,
        Strategy::SimpleOr,
        Strategy::Loop,
        Strategy::LoopUnrolled,
        Strategy::WordLoop,
        Strategy::CompareWithZero,
        Strategy::Memcmp,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::WideOr => "or",
            Strategy::SimpleOr => "simple_or",
            Strategy::Loop => "loop",
            Strategy::LoopUnrolled => "loop_unrolled",
            Strategy::WordLoop => "int64_loop",
            Strategy::CompareWithZero => "compare_with_zero",
            Strategy::Memcmp => "memcmp",
        }
    }

    /// Returns true if the strategy stops at the first non-zero unit.
    pub const fn early_exit(self) -> bool {
        matches!(
            self,
            Strategy::Loop | Strategy::LoopUnrolled | Strategy::WordLoop
        )
    }

    /// Runs the strategy on `buffer`.
    ///
    /// Instantiates every strategy for `N`, so `N` must satisfy the lane
    /// granularity.
    #[inline]
    pub fn is_empty<const N: usize>(self, buffer: &[u8; N]) -> bool {
        match self {
            Strategy::WideOr => is_empty_or(buffer),
            Strategy::SimpleOr => is_empty_simple_or(buffer),
            Strategy::Loop => is_empty_loop(buffer),
            Strategy::LoopUnrolled => is_empty_loop_unrolled(buffer),
            Strategy::WordLoop => is_empty_word_loop(buffer),
            Strategy::CompareWithZero => is_empty_compare_with_zero(buffer),
            Strategy::Memcmp => is_empty_memcmp(buffer),
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
