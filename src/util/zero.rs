//! All-zero reference buffers.

/// Holder for the process-lifetime all-zero buffer of length `N`.
pub struct Zeroed<const N: usize>;

impl<const N: usize> Zeroed<N> {
    /// All-zero buffer of length `N`.
    pub const BUFFER: [u8; N] = [0; N];

    /// Returns a `'static` reference to [`Self::BUFFER`].
    #[inline(always)]
    pub fn buffer() -> &'static [u8; N] {
        &Self::BUFFER
    }
}

/// Returns true if every byte is zero.
///
/// Length-agnostic oracle for the fixed-size scans.
pub fn is_all_zeros(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::{Zeroed, is_all_zeros};
    use crate::test_utils::proptest_cases;
    use proptest::prelude::*;

    #[test]
    fn zeroed_buffer_is_static_and_zero() {
        let a: &'static [u8; 512] = Zeroed::<512>::buffer();
        let b = Zeroed::<512>::buffer();
        assert!(is_all_zeros(a));
        assert_eq!(a, b);
        assert_eq!(Zeroed::<0>::BUFFER.len(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(proptest_cases(64)))]

        #[test]
        fn zero_filled_vectors_pass(len in 0usize..65) {
            let bytes = vec![0u8; len];
            prop_assert!(is_all_zeros(&bytes));
        }

        #[test]
        fn vectors_with_any_non_zero_fail(bytes in proptest::collection::vec(any::<u8>(), 1..65)) {
            prop_assume!(bytes.iter().any(|&b| b != 0));
            prop_assert!(!is_all_zeros(&bytes));
        }
    }
}
