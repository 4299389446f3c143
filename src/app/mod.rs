//! Application shell: owns the state, channels, and dialog manager, and
//! drives the frame loop.

mod core;
mod dialogs;
mod events;
mod update;

pub use core::WarblerApp;
