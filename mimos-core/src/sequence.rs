//! The growing round sequence
//!
//! A fixed-capacity buffer of indicator indices plus the current round
//! length. Grows by one entry per round and is cleared when a round
//! fails.

use heapless::Vec;

use crate::traits::IndexSource;

/// Errors from sequence accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Requested position is at or past the current length
    IndexOutOfRange,
}

/// Ordered, fixed-capacity sequence of indicator indices
///
/// `N` is the hard capacity. Growth past it saturates: the newest draw
/// overwrites the last slot and the length holds at `N`, so the game
/// keeps running at maximum length instead of wrapping or failing.
#[derive(Debug, Clone, Default)]
pub struct Sequence<const N: usize> {
    entries: Vec<u8, N>,
}

impl<const N: usize> Sequence<N> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the sequence is at capacity
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        N
    }

    /// Entry at `position`
    pub fn get(&self, position: usize) -> Result<u8, SequenceError> {
        self.entries
            .get(position)
            .copied()
            .ok_or(SequenceError::IndexOutOfRange)
    }

    /// All current entries, oldest first
    pub fn as_slice(&self) -> &[u8] {
        &self.entries
    }

    /// Append one index drawn from `entropy`, uniform in
    /// `[0, indicators)`, and return it
    ///
    /// At capacity the draw replaces the last slot instead of growing
    /// the sequence (saturation, not an error).
    pub fn grow<R: IndexSource>(&mut self, entropy: &mut R, indicators: u8) -> u8 {
        let index = entropy.next_index(indicators);
        if self.entries.is_full() {
            self.entries.pop();
        }
        // Cannot fail: a slot was freed above if the buffer was full
        let _ = self.entries.push(index);
        index
    }

    /// Forget all entries
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
