//! Indicator lamp abstraction
//!
//! Implementations handle the actual hardware drive for the specific
//! chip; logical "on" always means visibly lit, whatever the wiring
//! polarity.

/// A single indicator lamp
pub trait Lamp {
    /// Light the lamp
    fn on(&mut self);

    /// Extinguish the lamp
    fn off(&mut self);

    /// Set the lamp to a specific state
    fn set(&mut self, lit: bool) {
        if lit {
            self.on();
        } else {
            self.off();
        }
    }

    /// Check if the lamp is currently lit
    fn is_on(&self) -> bool;
}
