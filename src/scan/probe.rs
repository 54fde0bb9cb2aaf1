//! Scan instrumentation.
//!
//! Every instrumented scan reports each unit it examines (a byte, a word or a
//! chunk) to a [`Probe`] before testing it. Units are reported in index order
//! and never overlap. The `()` probe compiles away.

/// Observer of examined buffer units.
pub trait Probe {
    /// Called before the unit `offset..offset + len` is examined.
    fn visit(&mut self, offset: usize, len: usize);
}

impl Probe for () {
    #[inline(always)]
    fn visit(&mut self, _offset: usize, _len: usize) {}
}

/// Counts examined units and bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Number of units examined.
    pub visits: usize,
    /// Number of bytes covered by the examined units.
    pub bytes: usize,
}

impl Probe for Tally {
    fn visit(&mut self, offset: usize, len: usize) {
        assert!(len > 0);
        assert_eq!(offset, self.bytes, "units must be contiguous and in order");

        self.visits += 1;
        self.bytes += len;
    }
}
