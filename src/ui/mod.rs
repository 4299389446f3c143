//! UI rendering modules for the Warbler client.
//!
//! Each submodule draws one region of the window and reports user intent
//! back to the app shell as small action enums; none of them mutate
//! client state directly.

pub mod dialogs;
pub mod theme;
pub mod timeline;
pub mod toolbar;
