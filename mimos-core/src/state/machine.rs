//! State machine definition
//!
//! A round is a straight line through these phases; the only branch is
//! the validation outcome. There is no terminal phase - both outcomes
//! lead back to `Extending` when the next round starts.

use super::events::RoundEvent;

/// Phases of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundPhase {
    /// Appending one fresh entry to the sequence
    Extending,
    /// Playing the full sequence back on the indicators
    Playing,
    /// Collecting and checking the player's reproduction
    Validating,
    /// Round reproduced correctly; sequence kept for the next round
    Success,
    /// Mismatch detected; sequence is reset before the next round
    Failure,
}

impl RoundPhase {
    /// Check if this phase accepts player input
    pub fn accepts_input(&self) -> bool {
        matches!(self, RoundPhase::Validating)
    }

    /// Check if indicators may be driven in this phase
    pub fn indicators_active(&self) -> bool {
        // Playback lights them directly; validation echoes keystrokes
        matches!(self, RoundPhase::Playing | RoundPhase::Validating)
    }

    /// Check if the round has settled into an outcome
    pub fn is_settled(&self) -> bool {
        matches!(self, RoundPhase::Success | RoundPhase::Failure)
    }

    /// Process an event and return the next phase
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: RoundEvent) -> Self {
        use RoundEvent::*;
        use RoundPhase::*;

        match (self, event) {
            // Round setup
            (Extending, SequenceGrown) => Playing,

            // Playback
            (Playing, PlaybackComplete) => Validating,

            // Validation; a matched selection keeps the phase
            (Validating, SelectionMatched) => Validating,
            (Validating, SelectionMismatched) => Failure,
            (Validating, SequenceComplete) => Success,

            // Both outcomes feed the next round
            (Success, RoundStarted) => Extending,
            (Failure, RoundStarted) => Extending,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_round_flow() {
        let phase = RoundPhase::Extending;

        let playing = phase.transition(RoundEvent::SequenceGrown);
        assert_eq!(playing, RoundPhase::Playing);

        let validating = playing.transition(RoundEvent::PlaybackComplete);
        assert_eq!(validating, RoundPhase::Validating);

        // Matched selections keep validating
        let still = validating.transition(RoundEvent::SelectionMatched);
        assert_eq!(still, RoundPhase::Validating);

        let success = still.transition(RoundEvent::SequenceComplete);
        assert_eq!(success, RoundPhase::Success);
    }

    #[test]
    fn test_mismatch_fails_the_round() {
        let validating = RoundPhase::Validating;
        let failure = validating.transition(RoundEvent::SelectionMismatched);
        assert_eq!(failure, RoundPhase::Failure);
    }

    #[test]
    fn test_both_outcomes_restart() {
        for settled in [RoundPhase::Success, RoundPhase::Failure] {
            let next = settled.transition(RoundEvent::RoundStarted);
            assert_eq!(next, RoundPhase::Extending);
        }
    }

    #[test]
    fn test_unrelated_events_keep_phase() {
        assert_eq!(
            RoundPhase::Extending.transition(RoundEvent::SelectionMatched),
            RoundPhase::Extending
        );
        assert_eq!(
            RoundPhase::Playing.transition(RoundEvent::SequenceComplete),
            RoundPhase::Playing
        );
        assert_eq!(
            RoundPhase::Success.transition(RoundEvent::PlaybackComplete),
            RoundPhase::Success
        );
    }

    #[test]
    fn test_accepts_input() {
        assert!(RoundPhase::Validating.accepts_input());
        assert!(!RoundPhase::Playing.accepts_input());
        assert!(!RoundPhase::Extending.accepts_input());
        assert!(!RoundPhase::Failure.accepts_input());
    }

    #[test]
    fn test_indicators_active() {
        assert!(RoundPhase::Playing.indicators_active());
        assert!(RoundPhase::Validating.indicators_active()); // Keystroke echo
        assert!(!RoundPhase::Extending.indicators_active());
        assert!(!RoundPhase::Success.indicators_active());
    }

    #[test]
    fn test_is_settled() {
        assert!(RoundPhase::Success.is_settled());
        assert!(RoundPhase::Failure.is_settled());
        assert!(!RoundPhase::Extending.is_settled());
        assert!(!RoundPhase::Validating.is_settled());
    }
}
