//! Round state machine

pub mod events;
pub mod machine;

pub use events::RoundEvent;
pub use machine::RoundPhase;
