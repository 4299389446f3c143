//! Handlers for backend actions: one HTTP interaction per action.
//!
//! Failure policy mirrors the original client: a rejected like or
//! compose never mutates UI state and is never retried. Rejections are
//! reported as log lines, not as user-facing errors.

use crossbeam_channel::Sender;

use super::client::ApiClient;
use crate::protocol::{BackendAction, UiEvent};
use crate::timeline::TimelineEntry;

/// Handle a single action from the UI
pub async fn handle_backend_action(
    action: BackendAction,
    client: &mut Option<ApiClient>,
    event_tx: &Sender<UiEvent>,
) {
    match action {
        BackendAction::Login {
            server_url,
            username,
            password,
        } => {
            let _ = event_tx.send(UiEvent::Activity(format!(
                "Connecting to {}...",
                server_url
            )));

            let new_client = match ApiClient::new(&server_url) {
                Ok(c) => c,
                Err(e) => {
                    let _ = event_tx.send(UiEvent::Error(e));
                    return;
                }
            };

            if let Err(e) = new_client.login(&username, &password).await {
                let _ = event_tx.send(UiEvent::Error(e));
                return;
            }

            match new_client.fetch_timeline().await {
                Ok(response) => {
                    let viewer = response.viewer.username.clone();
                    let _ = event_tx.send(UiEvent::SessionStarted {
                        server_url: new_client.base_url().to_string(),
                        username: viewer.clone(),
                        csrf_token: response.csrf_token,
                    });
                    let entries = response
                        .items
                        .into_iter()
                        .map(|item| {
                            let own = item.user.username == viewer;
                            TimelineEntry::from_payload(
                                &item.msg,
                                &item.user,
                                item.liked_by_viewer,
                                own,
                                item.csrf_token,
                            )
                        })
                        .collect();
                    let _ = event_tx.send(UiEvent::TimelineLoaded(entries));
                }
                Err(e) => {
                    let _ = event_tx.send(UiEvent::Error(e));
                    return;
                }
            }

            *client = Some(new_client);
        }

        BackendAction::FetchTimeline => {
            let Some(ref api) = client else {
                let _ = event_tx.send(UiEvent::Error("Not connected".into()));
                return;
            };
            match api.fetch_timeline().await {
                Ok(response) => {
                    let viewer = response.viewer.username;
                    let entries = response
                        .items
                        .into_iter()
                        .map(|item| {
                            let own = item.user.username == viewer;
                            TimelineEntry::from_payload(
                                &item.msg,
                                &item.user,
                                item.liked_by_viewer,
                                own,
                                item.csrf_token,
                            )
                        })
                        .collect();
                    let _ = event_tx.send(UiEvent::TimelineLoaded(entries));
                }
                Err(e) => {
                    let _ = event_tx.send(UiEvent::Error(e));
                }
            }
        }

        BackendAction::ToggleLike {
            message_id,
            csrf_token,
        } => {
            let Some(ref api) = client else {
                let _ = event_tx.send(UiEvent::Error("Not connected".into()));
                return;
            };
            match api.toggle_like(message_id, &csrf_token).await {
                // Only the literal success marker flips the heart
                Ok(true) => {
                    let _ = event_tx.send(UiEvent::LikeToggled { message_id });
                }
                Ok(false) => {
                    let _ = event_tx.send(UiEvent::Activity(format!(
                        "Like toggle for warble {} not acknowledged, icon left unchanged",
                        message_id
                    )));
                }
                Err(e) => {
                    let _ = event_tx.send(UiEvent::Activity(format!(
                        "Like toggle for warble {} failed: {}",
                        message_id, e
                    )));
                }
            }
        }

        BackendAction::PostWarble {
            text,
            location,
            csrf_token,
        } => {
            let Some(ref api) = client else {
                let _ = event_tx.send(UiEvent::Error("Not connected".into()));
                return;
            };
            match api.post_warble(&text, &location, &csrf_token).await {
                Ok(response) => {
                    let _ = event_tx.send(UiEvent::WarbleCreated {
                        warble: response.msg,
                        author: response.user,
                        modify_timeline: response.modify_dom,
                    });
                }
                Err(e) => {
                    let _ = event_tx.send(UiEvent::WarbleRejected(e));
                }
            }
        }
    }
}
