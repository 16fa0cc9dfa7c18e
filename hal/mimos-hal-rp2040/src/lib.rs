//! RP2040-specific HAL for the Mimos game panel
//!
//! Provides RP2040 implementations of the shared `mimos-hal` panel
//! traits over embassy-rp GPIO:
//!
//! - [`gpio::PanelLamp`] - push-pull output lamp
//! - [`gpio::PanelKey`] - pulled-up input key, pressed = low

#![no_std]

pub mod gpio;

// Re-export the panel types at crate root for convenience
pub use gpio::{PanelKey, PanelLamp};
