use core::arch::x86_64::{
    __m256i, _mm256_loadu_si256, _mm256_or_si256, _mm256_setzero_si256, _mm256_testz_si256,
};

use super::{LANE_SIZE, Lane};

const _: () = assert!(size_of::<__m256i>() == LANE_SIZE);

/// 256-bit AVX2 register.
#[derive(Clone, Copy, Debug)]
pub struct Avx2Lane(__m256i);

// The module is only compiled with `target_feature = "avx2"` enabled, so the
// intrinsics below are always supported by the running CPU.
impl Lane for Avx2Lane {
    const NAME: &'static str = "avx2";

    #[inline(always)]
    fn zero() -> Self {
        // SAFETY: register-only intrinsic; avx2 is enabled for this module.
        Self(unsafe { _mm256_setzero_si256() })
    }

    #[inline(always)]
    fn load(chunk: &[u8; LANE_SIZE]) -> Self {
        // SAFETY: `chunk` is valid for LANE_SIZE == 32 bytes of reads and
        // `loadu` has no alignment requirement.
        Self(unsafe { _mm256_loadu_si256(chunk.as_ptr().cast::<__m256i>()) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        // SAFETY: register-only intrinsic; avx2 is enabled for this module.
        Self(unsafe { _mm256_or_si256(self.0, other.0) })
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        // testz(a, a) sets ZF iff (a & a) == 0.
        // SAFETY: register-only intrinsic; avx2 is enabled for this module.
        unsafe { _mm256_testz_si256(self.0, self.0) != 0 }
    }
}
