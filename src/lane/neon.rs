use core::arch::aarch64::{uint8x16_t, vdupq_n_u8, vld1q_u8, vmaxvq_u8, vorrq_u8};

use super::{LANE_SIZE, Lane};

const HALF: usize = LANE_SIZE / 2;

const _: () = assert!(size_of::<uint8x16_t>() == HALF);

/// Pair of 128-bit NEON registers covering one 256-bit chunk.
#[derive(Clone, Copy, Debug)]
pub struct NeonLane {
    lo: uint8x16_t,
    hi: uint8x16_t,
}

impl Lane for NeonLane {
    const NAME: &'static str = "neon";

    #[inline(always)]
    fn zero() -> Self {
        // SAFETY: register-only intrinsic; neon is enabled for this module.
        let zero = unsafe { vdupq_n_u8(0) };
        Self { lo: zero, hi: zero }
    }

    #[inline(always)]
    fn load(chunk: &[u8; LANE_SIZE]) -> Self {
        let ptr = chunk.as_ptr();
        // SAFETY: `chunk` is valid for LANE_SIZE bytes; both loads stay in it.
        unsafe {
            Self {
                lo: vld1q_u8(ptr),
                hi: vld1q_u8(ptr.add(HALF)),
            }
        }
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        // SAFETY: register-only intrinsics; neon is enabled for this module.
        unsafe {
            Self {
                lo: vorrq_u8(self.lo, other.lo),
                hi: vorrq_u8(self.hi, other.hi),
            }
        }
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        // Horizontal max over the folded halves is zero iff every byte is.
        // SAFETY: register-only intrinsics; neon is enabled for this module.
        unsafe { vmaxvq_u8(vorrq_u8(self.lo, self.hi)) == 0 }
    }
}
