//! Library-provided baselines.

use crate::util::Zeroed;

/// Compares the whole buffer against a static all-zero buffer with the array
/// `PartialEq` implementation.
#[inline]
pub fn is_empty_compare_with_zero<const N: usize>(buffer: &[u8; N]) -> bool {
    buffer == Zeroed::<N>::buffer()
}

/// Compares the buffer's raw bytes against a static all-zero region with
/// `memcmp`.
#[inline]
pub fn is_empty_memcmp<const N: usize>(buffer: &[u8; N]) -> bool {
    // Zero-length arrays hand out dangling pointers, which memcmp must not see.
    if N == 0 {
        return true;
    }

    let zero = Zeroed::<N>::buffer();
    // SAFETY: N > 0 and both pointers come from live `[u8; N]` references, so
    // each is valid for `N` bytes of reads.
    let order = unsafe {
        libc::memcmp(
            buffer.as_ptr().cast::<libc::c_void>(),
            zero.as_ptr().cast::<libc::c_void>(),
            N,
        )
    };
    order == 0
}
