use crate::api::types::{AuthorPayload, WarblePayload};
use crate::timeline::TimelineEntry;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Open a session against a Warbler server
    Login {
        server_url: String,
        username: String,
        password: String,
    },
    /// Re-fetch the home timeline
    FetchTimeline,
    /// Toggle the viewer's like on a warble. The token is read from the
    /// entry at click time and is never reused for another entry.
    ToggleLike { message_id: u64, csrf_token: String },
    /// Submit a new warble through the composer
    PostWarble {
        text: String,
        location: String,
        csrf_token: String,
    },
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Logged in; carries the viewer handle and the composer form token
    SessionStarted {
        server_url: String,
        username: String,
        csrf_token: String,
    },
    /// Fresh timeline contents from the server
    TimelineLoaded(Vec<TimelineEntry>),
    /// The server acknowledged a like toggle with its literal success
    /// marker. This is the only event that may flip a liked flag.
    LikeToggled { message_id: u64 },
    /// The server created a warble. `modify_timeline` mirrors the
    /// response flag that tells the client whether to patch its own list.
    WarbleCreated {
        warble: WarblePayload,
        author: AuthorPayload,
        modify_timeline: bool,
    },
    /// The composer submission failed; the modal stays open and no
    /// banner is shown.
    WarbleRejected(String),
    /// Line for the system log (request traces, ignored rejections)
    Activity(String),
    /// Connection-level error worth surfacing to the user
    Error(String),
}
