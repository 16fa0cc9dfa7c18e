//! Game configuration types
//!
//! There is no runtime configuration surface: the game is configured
//! entirely through these constants and the `Default` impls, plus the
//! hardware wiring in the firmware crate.

/// Number of indicators (lamp/key pairs) on the reference panel
pub const INDICATOR_COUNT: usize = 4;

/// Maximum sequence length before growth saturates
pub const MAX_GAME_LENGTH: usize = 100;

/// Timing constants for one round
///
/// All values are tunable but must stay internally consistent: the echo
/// on a keystroke uses the same `lit_ms` as playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// How long an indicator stays lit per playback or echo step
    pub lit_ms: u32,
    /// Pause after each playback step, indicator off
    pub gap_ms: u32,
    /// Pause after a failed round, before control returns to the loop
    pub game_over_pause_ms: u32,
    /// Pause between rounds, applied by the game loop driver
    pub round_pause_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            lit_ms: 300,
            gap_ms: 50,
            game_over_pause_ms: 200,
            round_pause_ms: 300,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Number of indicators in play; sequence entries are drawn from
    /// `[0, indicators)`
    pub indicators: u8,
    /// Round timing
    pub timing: Timing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            indicators: INDICATOR_COUNT as u8,
            timing: Timing::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.indicators, 4);
        assert_eq!(config.timing.lit_ms, 300);
        assert_eq!(config.timing.gap_ms, 50);
        assert_eq!(config.timing.game_over_pause_ms, 200);
        assert_eq!(config.timing.round_pause_ms, 300);
    }
}
