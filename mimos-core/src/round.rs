//! Round controller
//!
//! Runs one full round: extend the sequence by one entry, play it back
//! on the indicators, collect and validate the player's reproduction,
//! and settle the outcome. Owns the sequence; the signal driver, delay
//! provider, and entropy source are passed in as explicit handles.

use embedded_hal::delay::DelayNs;

use crate::config::{GameConfig, MAX_GAME_LENGTH};
use crate::sequence::Sequence;
use crate::state::{RoundEvent, RoundPhase};
use crate::traits::{IndexSource, SignalDriver};

/// Outcome of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    /// Every position reproduced correctly; the score is the sequence
    /// length reached
    Success {
        /// Sequence length at the end of the round
        length: u8,
    },
    /// A selection mismatched; the sequence has been reset
    Failure {
        /// Rounds survived before this one
        score: u8,
    },
}

/// Controller for the round state machine
///
/// `N` is the sequence capacity; [`GameController`] fixes it to the
/// reference [`MAX_GAME_LENGTH`].
#[derive(Debug)]
pub struct RoundController<const N: usize> {
    sequence: Sequence<N>,
    config: GameConfig,
    phase: RoundPhase,
}

/// Round controller at the reference sequence capacity
pub type GameController = RoundController<MAX_GAME_LENGTH>;

impl<const N: usize> RoundController<N> {
    /// Create a controller with an empty sequence
    pub fn new(config: GameConfig) -> Self {
        Self {
            sequence: Sequence::new(),
            config,
            phase: RoundPhase::Extending,
        }
    }

    /// Game configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase of the round machine
    ///
    /// Between rounds this is the settled outcome of the previous round
    /// (`Success` or `Failure`), or `Extending` before the first round.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The sequence as it stands
    pub fn sequence(&self) -> &Sequence<N> {
        &self.sequence
    }

    /// Run one full round
    ///
    /// Blocks for the whole round: playback delays and the wait for
    /// every player selection happen inside this call. Returns once the
    /// round settles; the caller applies any inter-round pacing.
    pub fn play_round<S, D, R>(
        &mut self,
        signals: &mut S,
        delay: &mut D,
        entropy: &mut R,
    ) -> RoundOutcome
    where
        S: SignalDriver,
        D: DelayNs,
        R: IndexSource,
    {
        if self.phase.is_settled() {
            self.phase = self.phase.transition(RoundEvent::RoundStarted);
        }

        self.sequence.grow(entropy, self.config.indicators);
        self.phase = self.phase.transition(RoundEvent::SequenceGrown);

        self.play_sequence(signals, delay);
        self.phase = self.phase.transition(RoundEvent::PlaybackComplete);

        for position in 0..self.sequence.len() {
            debug_assert!(self.phase.accepts_input());
            let expected = self.sequence.as_slice()[position];
            let selection = signals.read_selection();
            // Echo every keystroke straight back, match or not
            signals.activate(selection, self.config.timing.lit_ms);

            if selection != expected {
                return self.fail(delay);
            }
            self.phase = self.phase.transition(RoundEvent::SelectionMatched);
        }

        self.phase = self.phase.transition(RoundEvent::SequenceComplete);
        RoundOutcome::Success {
            length: self.sequence.len() as u8,
        }
    }

    /// Play the current sequence back on the indicators
    fn play_sequence<S, D>(&self, signals: &mut S, delay: &mut D)
    where
        S: SignalDriver,
        D: DelayNs,
    {
        debug_assert!(self.phase.indicators_active());
        let timing = &self.config.timing;
        for &step in self.sequence.as_slice() {
            signals.activate(step, timing.lit_ms);
            delay.delay_ms(timing.gap_ms);
        }
    }

    /// Settle a mismatched round: score it, reset the sequence, and
    /// give the player a moment before the loop resumes
    fn fail<D: DelayNs>(&mut self, delay: &mut D) -> RoundOutcome {
        self.phase = self.phase.transition(RoundEvent::SelectionMismatched);
        // The newly added entry was never reproduced; it does not count
        let score = (self.sequence.len() - 1) as u8;
        self.sequence.reset();
        delay.delay_ms(self.config.timing.game_over_pause_ms);
        RoundOutcome::Failure { score }
    }
}

impl<const N: usize> Default for RoundController<N> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
