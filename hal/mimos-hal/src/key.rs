//! Player key abstraction
//!
//! Implementations handle the wiring polarity (active-high or
//! active-low); `is_pressed` always means the player is holding the
//! key down.

/// A single player key
pub trait Key {
    /// Check if the key is currently held down
    fn is_pressed(&self) -> bool;

    /// Check if the key is currently released
    fn is_released(&self) -> bool {
        !self.is_pressed()
    }
}
