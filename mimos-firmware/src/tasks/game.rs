//! Game loop task
//!
//! Owns the panel and the round controller, and runs rounds forever.
//! A failed round resets the sequence and reports the score; there is
//! no terminal state.

use defmt::*;
use embassy_rp::clocks::RoscRng;
use embassy_time::{Delay, Timer};

use mimos_core::config::{GameConfig, INDICATOR_COUNT};
use mimos_core::round::{GameController, RoundOutcome};
use mimos_drivers::panel::LampPanel;
use mimos_hal_rp2040::{PanelKey, PanelLamp};

/// Concrete panel type for the reference board
pub type GamePanel = LampPanel<PanelLamp, PanelKey, Delay, INDICATOR_COUNT>;

/// Game task - one round per iteration, forever
#[embassy_executor::task]
pub async fn game_task(mut panel: GamePanel, mut entropy: RoscRng) {
    info!("Game task started");

    let mut controller = GameController::new(GameConfig::default());
    let mut delay = Delay;

    loop {
        match controller.play_round(&mut panel, &mut delay, &mut entropy) {
            RoundOutcome::Success { length } => {
                debug!("Round complete, sequence length {}", length);
            }
            RoundOutcome::Failure { score } => {
                info!("Game over! Your score: {}", score);
            }
        }

        // Inter-round pacing, applied after every round regardless of
        // outcome
        let pause = controller.config().timing.round_pause_ms;
        Timer::after_millis(pause as u64).await;
    }
}
