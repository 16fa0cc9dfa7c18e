//! Mimos - Sequence Memory Game Firmware
//!
//! Main firmware binary for RP2040-based game boards. The machine
//! shows a growing pattern on its lamps and the player has to imitate
//! it back on the keys, one more step every round.
//!
//! Named after the Greek "mimos" (μῖμος) meaning "imitator".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use mimos_drivers::panel::LampPanel;
use mimos_hal_rp2040::{PanelKey, PanelLamp};

mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Mimos firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Panel wiring is board-specific (reference board: lamps on
    // GPIO2-5, keys on GPIO6-9, pair i belongs to indicator i)
    let lamps = [
        PanelLamp::new(p.PIN_2.into()),
        PanelLamp::new(p.PIN_3.into()),
        PanelLamp::new(p.PIN_4.into()),
        PanelLamp::new(p.PIN_5.into()),
    ];
    let keys = [
        PanelKey::new(p.PIN_6.into()),
        PanelKey::new(p.PIN_7.into()),
        PanelKey::new(p.PIN_8.into()),
        PanelKey::new(p.PIN_9.into()),
    ];
    let panel = LampPanel::new(lamps, keys, Delay);
    info!("Panel initialized");

    // Ring oscillator noise primes the sequence draws
    let entropy = RoscRng;

    spawner.spawn(tasks::game_task(panel, entropy)).unwrap();
    info!("Game task spawned, firmware running");

    // Main task has nothing else to do - the game runs in its own task
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
