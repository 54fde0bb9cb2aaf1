//! Strategies for testing whether a fixed-size byte buffer is all zero.
//!
//! Each strategy lives in [`scan`] as an independent `is_empty_*` function over
//! `&[u8; N]`; [`scan::Strategy`] enumerates them for drivers and tests. The
//! wide-register strategies run on the [`lane::WideLane`] selected for this
//! build.

pub mod constants;
pub mod lane;
pub mod scan;
pub mod util;

#[cfg(test)]
pub(crate) mod test_utils;

pub use constants::{BUFFER_SIZE, LANE_SIZE, WORD_SIZE};
pub use scan::Strategy;
