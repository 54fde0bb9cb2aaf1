//! Wide-register abstraction.
//!
//! A [`Lane`] holds one [`LANE_SIZE`]-byte chunk of a buffer. The zero-test
//! scans only need three operations on it: load a chunk, OR two lanes
//! together, and test whether every bit is zero. The accelerated
//! implementations are compiled only when the target enables the matching
//! instruction set; [`PortableLane`] is always available.
//!
//! [`WideLane`] is the implementation selected for this build. On x86_64 it is
//! [`Avx2Lane`] when compiled with `-C target-feature=+avx2` (or a
//! `target-cpu` that implies it), on aarch64 it is [`NeonLane`], and
//! [`PortableLane`] everywhere else.

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
mod portable;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use avx2::Avx2Lane;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub use neon::NeonLane;
pub use portable::PortableLane;

pub use crate::constants::LANE_SIZE;

/// One wide register worth of buffer bytes.
pub trait Lane: Copy {
    /// Short identifier used in logs and benchmark ids.
    const NAME: &'static str;

    /// The all-zero lane. Identity element of [`Lane::or`].
    fn zero() -> Self;

    /// Loads a chunk. No alignment requirement.
    fn load(chunk: &[u8; LANE_SIZE]) -> Self;

    /// Bitwise OR of two lanes.
    fn or(self, other: Self) -> Self;

    /// Returns true if every bit of the lane is zero.
    fn is_zero(self) -> bool;
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub type WideLane = Avx2Lane;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub type WideLane = NeonLane;

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "avx2"),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub type WideLane = PortableLane;
