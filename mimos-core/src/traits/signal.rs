//! Signal driver trait
//!
//! The game core is written against this contract only; how an
//! indicator is lit or an input read is the implementation's business
//! (the panel driver in `mimos-drivers` polls GPIO keys, a test double
//! replays a script).

/// Panel output and input, as the game core sees it
///
/// Both operations are synchronous: they return only once the
/// activation window or the player's selection has completed. The core
/// never needs to know whether the implementation busy-polls, uses
/// interrupts, or blocks on a channel.
pub trait SignalDriver {
    /// Drive indicator `indicator` active for `duration_ms`, then
    /// inactive
    ///
    /// The indicator must be off again when this returns. Indices are
    /// in `[0, INDICATOR_COUNT)`; the caller upholds that invariant.
    fn activate(&mut self, indicator: u8, duration_ms: u32);

    /// Block until the player selects an indicator, and return its
    /// index
    ///
    /// There is no timeout: an interactive game waits as long as it
    /// takes. The returned index is in `[0, INDICATOR_COUNT)`.
    fn read_selection(&mut self) -> u8;
}
