//! Lamp and key panel driver
//!
//! Implements the core signal contract over a bank of lamps and keys:
//! activating an indicator lights its lamp for the requested duration,
//! reading a selection polls the keys until the player presses one.
//!
//! When several keys are held at the same time the lowest index wins;
//! the scan runs in index order every poll.

use embedded_hal::delay::DelayNs;

use mimos_core::traits::SignalDriver;
use mimos_hal::{Key, Lamp};

/// Key poll interval in milliseconds
pub const POLL_INTERVAL_MS: u32 = 1;

/// Panel of `N` lamp/key pairs, one per indicator
pub struct LampPanel<L, K, D, const N: usize> {
    lamps: [L; N],
    keys: [K; N],
    delay: D,
}

impl<L, K, D, const N: usize> LampPanel<L, K, D, N>
where
    L: Lamp,
    K: Key,
    D: DelayNs,
{
    /// Create a panel from its lamps, keys, and delay provider
    ///
    /// Lamp and key at the same array position belong to the same
    /// indicator.
    pub fn new(lamps: [L; N], keys: [K; N], delay: D) -> Self {
        Self { lamps, keys, delay }
    }

    /// Index of the first pressed key, scanning in index order
    fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|key| key.is_pressed()).map(|i| i as u8)
    }
}

impl<L, K, D, const N: usize> SignalDriver for LampPanel<L, K, D, N>
where
    L: Lamp,
    K: Key,
    D: DelayNs,
{
    fn activate(&mut self, indicator: u8, duration_ms: u32) {
        // Indices past the panel are ignored rather than wrapped
        if let Some(lamp) = self.lamps.get_mut(indicator as usize) {
            lamp.on();
            self.delay.delay_ms(duration_ms);
            lamp.off();
        }
    }

    fn read_selection(&mut self) -> u8 {
        loop {
            if let Some(index) = self.first_pressed() {
                return index;
            }
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
    }
}
