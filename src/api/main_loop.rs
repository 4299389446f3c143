//! Backend event loop bridging the UI channels to the HTTP client.

use crate::protocol::{BackendAction, UiEvent};
use crossbeam_channel::{Receiver, Sender};
use std::time::Duration;
use tokio::runtime::Runtime;

use super::client::ApiClient;
use super::handlers;

/// Run the backend event loop on a tokio runtime.
///
/// The UI suspends nothing: it queues actions on `action_rx`'s sender
/// and keeps painting. Each action becomes one HTTP request here and
/// resumes as a `UiEvent` when the response arrives.
pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<UiEvent>) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(UiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut client: Option<ApiClient> = None;

        loop {
            // Drain pending actions from the UI (non-blocking)
            let mut handled = false;
            while let Ok(action) = action_rx.try_recv() {
                handled = true;
                handlers::handle_backend_action(action, &mut client, &event_tx).await;
            }

            if !handled {
                // Nothing queued, sleep a bit to avoid busy-looping
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    });
}
