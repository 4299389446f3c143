//! Core application state, separated from UI logic.
//!
//! `ClientState` holds all data that represents the Warbler session:
//! the timeline, the viewer, toasts, the system log. This separation
//! allows UI components to receive state as a parameter rather than
//! owning it.

use std::time::Instant;

use crate::logging::ActivityLogger;
use crate::timeline::Timeline;

/// Maximum lines kept in the system log
const MAX_LOG_LINES: usize = 500;

/// An authenticated session against one server.
#[derive(Clone, Debug)]
pub struct Session {
    pub server_url: String,
    pub username: String,
    /// Token embedded in the composer form, read at submission time
    pub composer_csrf_token: String,
}

/// Core application state for the Warbler client.
///
/// Owned by `WarblerApp` and passed to UI components as needed.
#[derive(Default)]
pub struct ClientState {
    /// Current session, if logged in.
    pub session: Option<Session>,

    /// The viewer's home timeline, newest first.
    pub timeline: Timeline,

    /// Whether a composer submission is currently in flight. Like
    /// toggles are deliberately not guarded the same way.
    pub composer_in_flight: bool,

    /// System log lines (request traces, ignored rejections).
    pub system_log: Vec<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,

    /// Activity logger persisting API interactions to disk.
    pub logger: Option<ActivityLogger>,
}

impl ClientState {
    /// Create a new ClientState with default values.
    pub fn new() -> Self {
        Self {
            session: None,
            timeline: Timeline::new(),
            composer_in_flight: false,
            system_log: vec!["Welcome to Warbler!".into()],
            status_messages: Vec::new(),
            logger: ActivityLogger::new().ok(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Append a line to the system log, trimming the oldest past the cap.
    pub fn push_log(&mut self, line: String) {
        self.system_log.push(line);
        if self.system_log.len() > MAX_LOG_LINES {
            self.system_log.remove(0);
        }
    }

    /// Show a transient toast banner.
    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_messages.push((message.into(), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}
