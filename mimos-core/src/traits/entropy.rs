//! Entropy source trait
//!
//! Sequence growth draws indices through this seam so the firmware can
//! plug in a hardware RNG while tests script the draws.

use rand_core::RngCore;

/// Source of random indicator indices
pub trait IndexSource {
    /// Draw the next index, uniform in `[0, bound)`
    ///
    /// `bound` must be non-zero.
    fn next_index(&mut self, bound: u8) -> u8;
}

/// Any `rand_core` RNG is an index source
///
/// Rejection sampling: draws at or past the largest multiple of `bound`
/// are discarded, so every index in `[0, bound)` is equally likely.
impl<R: RngCore> IndexSource for R {
    fn next_index(&mut self, bound: u8) -> u8 {
        debug_assert!(bound > 0);
        let zone = (1u64 << 32) / bound as u64 * bound as u64;
        loop {
            let raw = self.next_u32();
            if (raw as u64) < zone {
                return (raw % bound as u32) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// RNG replaying a fixed list of words, cycling
    struct FakeRng {
        words: heapless::Vec<u32, 64>,
        cursor: usize,
    }

    impl FakeRng {
        fn new(words: &[u32]) -> Self {
            let mut v = heapless::Vec::new();
            for &w in words {
                let _ = v.push(w);
            }
            Self { words: v, cursor: 0 }
        }
    }

    impl RngCore for FakeRng {
        fn next_u32(&mut self) -> u32 {
            let w = self.words[self.cursor % self.words.len()];
            self.cursor += 1;
            w
        }

        fn next_u64(&mut self) -> u64 {
            let lo = self.next_u32() as u64;
            let hi = self.next_u32() as u64;
            (hi << 32) | lo
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn test_small_words_map_directly() {
        let mut rng = FakeRng::new(&[2, 0, 3, 1]);
        assert_eq!(rng.next_index(4), 2);
        assert_eq!(rng.next_index(4), 0);
        assert_eq!(rng.next_index(4), 3);
        assert_eq!(rng.next_index(4), 1);
    }

    #[test]
    fn test_rejection_discards_top_zone() {
        // For bound 3 the zone is (2^32 / 3) * 3 == u32::MAX, so a raw
        // draw of u32::MAX is rejected and the next word is used.
        let mut rng = FakeRng::new(&[u32::MAX, 7]);
        assert_eq!(rng.next_index(3), 7 % 3);
    }

    #[test]
    fn test_bound_one_always_zero() {
        let mut rng = FakeRng::new(&[u32::MAX, 0, 12345]);
        for _ in 0..3 {
            assert_eq!(rng.next_index(1), 0);
        }
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_range(
            words in prop::collection::vec(any::<u32>(), 1..64),
            bound in 1u8..=16,
        ) {
            let mut rng = FakeRng::new(&words);
            for _ in 0..words.len() {
                prop_assert!(rng.next_index(bound) < bound);
            }
        }
    }
}
