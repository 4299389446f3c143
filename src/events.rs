//! Backend event processing (session start, timeline patches, likes).

use chrono::Local;

use crate::logging::LogEntry;
use crate::protocol::UiEvent;
use crate::state::ClientState;
use crate::timeline::TimelineEntry;

/// Apply a single backend event to the application state.
///
/// Returns `true` when a composer submission was acknowledged and the
/// modal should be hidden.
pub fn process_single_event(state: &mut ClientState, event: UiEvent) -> bool {
    match event {
        UiEvent::SessionStarted {
            server_url,
            username,
            csrf_token,
        } => {
            let ts = Local::now().format("%H:%M:%S").to_string();
            state.push_log(format!("[{}] ✓ Logged in as {}", ts, username));
            state.push_status(format!("Logged in as {}", username));
            state.session = Some(crate::state::Session {
                server_url,
                username,
                composer_csrf_token: csrf_token,
            });
            false
        }

        UiEvent::TimelineLoaded(entries) => {
            let ts = Local::now().format("%H:%M:%S").to_string();
            state.push_log(format!("[{}] Timeline loaded ({} warbles)", ts, entries.len()));
            state.timeline.replace(entries);
            false
        }

        UiEvent::LikeToggled { message_id } => {
            // The server acknowledged this specific id; flip exactly one
            // entry's heart. Never flipped optimistically before this.
            if let Some(liked) = state.timeline.toggle_liked(message_id) {
                if let Some(logger) = &state.logger {
                    logger.log(LogEntry {
                        timestamp: Local::now().format("%H:%M:%S").to_string(),
                        action: if liked { "like" } else { "unlike" }.into(),
                        detail: format!("warble {}", message_id),
                    });
                }
            }
            false
        }

        UiEvent::WarbleCreated {
            warble,
            author,
            modify_timeline,
        } => {
            let ts = Local::now().format("%H:%M:%S").to_string();
            state.push_log(format!("[{}] ✓ Warble {} created", ts, warble.id));

            if modify_timeline {
                // Server says this page lists messages: patch our own
                // list with the created warble, newest on top. The new
                // entry has no like form of its own yet, so no token.
                let entry =
                    TimelineEntry::from_payload(&warble, &author, false, true, String::new());
                state.timeline.prepend(entry);
            }

            if let Some(logger) = &state.logger {
                logger.log(LogEntry {
                    timestamp: ts,
                    action: "compose".into(),
                    detail: format!("warble {} ({} chars)", warble.id, warble.text.len()),
                });
            }

            // Banner and modal hide happen regardless of the patch flag
            state.push_status("Warble posted!");
            state.composer_in_flight = false;
            true
        }

        UiEvent::WarbleRejected(reason) => {
            // Modal stays open, no banner. Only the log observes this.
            let ts = Local::now().format("%H:%M:%S").to_string();
            state.push_log(format!("[{}] ⚠ Compose failed: {}", ts, reason));
            state.composer_in_flight = false;
            false
        }

        UiEvent::Activity(line) => {
            let ts = Local::now().format("%H:%M:%S").to_string();
            state.push_log(format!("[{}] {}", ts, line));
            false
        }

        UiEvent::Error(msg) => {
            let ts = Local::now().format("%H:%M:%S").to_string();
            state.push_log(format!("[{}] ⚠ Error: {}", ts, msg));
            state.push_status(format!("Error: {}", msg));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AuthorPayload, WarblePayload};
    use chrono::{TimeZone, Utc};

    fn seeded_state() -> ClientState {
        let mut state = ClientState::new();
        state.timeline.prepend(TimelineEntry {
            message_id: 42,
            username: "alice".into(),
            avatar_url: None,
            text: "hello".into(),
            location: None,
            timestamp: Utc.with_ymd_and_hms(2021, 3, 5, 0, 0, 0).unwrap(),
            liked: false,
            own: false,
            csrf_token: "abc".into(),
        });
        state
    }

    #[test]
    fn test_like_toggled_flips_exactly_one_entry() {
        let mut state = seeded_state();
        process_single_event(&mut state, UiEvent::LikeToggled { message_id: 42 });
        assert!(state.timeline.get(42).unwrap().liked);

        // Second acknowledgment restores the original state
        process_single_event(&mut state, UiEvent::LikeToggled { message_id: 42 });
        assert!(!state.timeline.get(42).unwrap().liked);
    }

    #[test]
    fn test_like_toggled_unknown_id_is_ignored() {
        let mut state = seeded_state();
        process_single_event(&mut state, UiEvent::LikeToggled { message_id: 7 });
        assert!(!state.timeline.get(42).unwrap().liked);
    }

    #[test]
    fn test_warble_created_with_patch_flag_prepends_once() {
        let mut state = seeded_state();
        state.composer_in_flight = true;

        let close = process_single_event(
            &mut state,
            UiEvent::WarbleCreated {
                warble: WarblePayload {
                    id: 99,
                    user_id: 1,
                    text: "hello".into(),
                    location: Some("NYC".into()),
                    timestamp: Utc.with_ymd_and_hms(2021, 3, 5, 0, 0, 0).unwrap(),
                },
                author: AuthorPayload {
                    id: 1,
                    username: "demo".into(),
                    image_url: None,
                },
                modify_timeline: true,
            },
        );

        assert!(close);
        assert!(!state.composer_in_flight);
        assert_eq!(state.timeline.len(), 2);
        let top = &state.timeline.entries[0];
        assert_eq!(top.message_id, 99);
        assert_eq!(top.text, "hello");
        assert_eq!(top.long_date(), "5 March 2021");
        assert_eq!(state.status_messages.len(), 1);
    }

    #[test]
    fn test_warble_created_without_patch_flag_still_banners() {
        let mut state = seeded_state();
        state.composer_in_flight = true;

        let close = process_single_event(
            &mut state,
            UiEvent::WarbleCreated {
                warble: WarblePayload {
                    id: 100,
                    user_id: 1,
                    text: "elsewhere".into(),
                    location: None,
                    timestamp: Utc.with_ymd_and_hms(2021, 3, 5, 0, 0, 0).unwrap(),
                },
                author: AuthorPayload {
                    id: 1,
                    username: "demo".into(),
                    image_url: None,
                },
                modify_timeline: false,
            },
        );

        // Modal hides and banner shows, but the list is untouched
        assert!(close);
        assert_eq!(state.timeline.len(), 1);
        assert_eq!(state.status_messages.len(), 1);
    }

    #[test]
    fn test_warble_rejected_keeps_modal_open() {
        let mut state = seeded_state();
        state.composer_in_flight = true;

        let close =
            process_single_event(&mut state, UiEvent::WarbleRejected("boom".into()));

        assert!(!close);
        assert!(!state.composer_in_flight);
        assert!(state.status_messages.is_empty());
        assert_eq!(state.timeline.len(), 1);
    }
}
