//! Warbler Client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod api;
pub mod app;
pub mod config;
pub mod dialog_manager;
pub mod events;
pub mod logging;
pub mod protocol;
pub mod state;
pub mod timeline;
pub mod ui;
pub mod validation;
