use super::{LANE_SIZE, Lane};
use crate::constants::WORD_SIZE;

const WORDS: usize = LANE_SIZE / WORD_SIZE;

/// Lane emulated with general-purpose words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortableLane([u64; WORDS]);

impl Lane for PortableLane {
    const NAME: &'static str = "portable";

    #[inline(always)]
    fn zero() -> Self {
        Self([0; WORDS])
    }

    #[inline(always)]
    fn load(chunk: &[u8; LANE_SIZE]) -> Self {
        let (words, rest) = chunk.as_chunks::<WORD_SIZE>();
        debug_assert!(rest.is_empty());
        debug_assert_eq!(words.len(), WORDS);

        let mut lane = [0u64; WORDS];
        for (slot, word) in lane.iter_mut().zip(words) {
            *slot = u64::from_ne_bytes(*word);
        }
        Self(lane)
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        let mut lane = self.0;
        for (slot, word) in lane.iter_mut().zip(other.0) {
            *slot |= word;
        }
        Self(lane)
    }

    #[inline(always)]
    fn is_zero(self) -> bool {
        self.0.iter().fold(0, |acc, &word| acc | word) == 0
    }
}
