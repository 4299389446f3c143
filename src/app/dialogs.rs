//! Dialog rendering orchestration

use eframe::egui;

use super::WarblerApp;
use crate::config::{delete_password, save_password};
use crate::protocol::BackendAction;
use crate::ui;
use crate::ui::dialogs::DialogAction;

impl WarblerApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-right corner)
        ui::dialogs::render_status_toasts(ctx, &self.state.status_messages);

        // Delegate to DialogManager for all dialog rendering
        let actions = self.dialogs.render(ctx, self.state.composer_in_flight);

        // Process actions
        for action in actions {
            self.handle_dialog_action(action);
        }
    }

    /// Handle dialog actions by sending appropriate backend commands
    fn handle_dialog_action(&mut self, action: DialogAction) {
        match action {
            DialogAction::SubmitWarble {
                text,
                location,
                csrf_token,
            } => {
                // The modal stays open until the server acknowledges.
                self.state.composer_in_flight = true;
                let _ = self.action_tx.send(BackendAction::PostWarble {
                    text,
                    location,
                    csrf_token,
                });
            }
            DialogAction::Connect {
                server_url,
                username,
                password,
                remember_password,
            } => {
                self.last_server_url = server_url.clone();
                self.last_username = username.clone();
                self.remember_password = remember_password;
                self.save_current_settings();

                if remember_password {
                    if let Err(e) = save_password(&username, &password) {
                        self.state.push_log(format!("Keyring error: {}", e));
                    }
                } else {
                    delete_password(&username);
                }

                let _ = self.action_tx.send(BackendAction::Login {
                    server_url,
                    username,
                    password,
                });
            }
        }
    }
}
