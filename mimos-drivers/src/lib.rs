//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator
//! traits defined in mimos-core, generic over the `mimos-hal` pin
//! traits:
//!
//! - Lamp/key panel (the signal driver the game core runs against)

#![no_std]
#![deny(unsafe_code)]

pub mod panel;

pub use panel::LampPanel;
