//! GPIO-backed panel lamps and keys
//!
//! Lamps drive push-pull outputs. Keys are inputs with the internal
//! pull-up enabled and are wired to short the pin to ground, so a
//! pressed key reads low.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

use mimos_hal::{Key, Lamp};

/// Panel lamp on a push-pull GPIO output
pub struct PanelLamp {
    pin: Output<'static>,
}

impl PanelLamp {
    /// Create a lamp on the given pin, initially off
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl Lamp for PanelLamp {
    fn on(&mut self) {
        self.pin.set_high();
    }

    fn off(&mut self) {
        self.pin.set_low();
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Panel key on a pulled-up GPIO input
pub struct PanelKey {
    pin: Input<'static>,
}

impl PanelKey {
    /// Create a key on the given pin with the internal pull-up enabled
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl Key for PanelKey {
    fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }
}
