//! Event processing from backend

use super::WarblerApp;
use crate::events;

impl WarblerApp {
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            // A true return means the server acknowledged a composer
            // submission; only then does the modal close.
            if events::process_single_event(&mut self.state, event) {
                self.dialogs.close_composer();
            }
        }
    }
}
