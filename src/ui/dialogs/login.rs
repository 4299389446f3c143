//! Login dialog - server address and credentials.

use eframe::egui;

use super::DialogAction;
use crate::validation::validate_server_url;

/// Self-contained login dialog state.
pub struct LoginDialog {
    pub open: bool,
    pub server_input: String,
    pub username_input: String,
    pub password_input: String,
    pub remember_password: bool,
    /// Validation message shown under the form
    error: Option<String>,
}

impl LoginDialog {
    /// Create a login dialog prefilled from saved settings
    pub fn new(server_url: &str, username: &str, remember_password: bool) -> Self {
        Self {
            open: true,
            server_input: server_url.to_string(),
            username_input: username.to_string(),
            password_input: String::new(),
            remember_password,
            error: None,
        }
    }

    fn can_connect(&self) -> bool {
        !self.username_input.trim().is_empty() && !self.password_input.is_empty()
    }

    fn try_submit(&mut self) -> Option<DialogAction> {
        if let Err(e) = validate_server_url(self.server_input.trim()) {
            self.error = Some(e);
            return None;
        }
        self.error = None;
        self.open = false;
        Some(DialogAction::Connect {
            server_url: self.server_input.trim().to_string(),
            username: self.username_input.trim().to_string(),
            password: self.password_input.clone(),
            remember_password: self.remember_password,
        })
    }

    /// Render the login dialog.
    /// Returns `Some(DialogAction::Connect)` when the user submitted.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut still_open = true;

        egui::Window::new("Log in to Warbler")
            .open(&mut still_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Server:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.server_input)
                        .hint_text("http://localhost:5001")
                        .desired_width(240.0),
                );

                ui.label("Username:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.username_input).desired_width(240.0),
                );

                ui.label("Password:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.password_input)
                        .password(true)
                        .desired_width(240.0),
                );

                ui.checkbox(&mut self.remember_password, "Remember password");
                ui.label(
                    egui::RichText::new("(Stored securely in system keyring)")
                        .small()
                        .weak(),
                );

                if let Some(err) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                }

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.can_connect(), egui::Button::new("Log in"))
                        .clicked()
                    {
                        action = self.try_submit();
                    }

                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });

                // Also submit on Enter key
                if ui.input(|i| i.key_pressed(egui::Key::Enter)) && self.can_connect() {
                    action = self.try_submit();
                }
            });

        if !still_open {
            self.open = false;
        }

        action
    }

    /// Check if the dialog is open
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_dialog_prefill() {
        let dialog = LoginDialog::new("http://localhost:5001", "demo", true);
        assert!(dialog.open);
        assert_eq!(dialog.server_input, "http://localhost:5001");
        assert_eq!(dialog.username_input, "demo");
        assert!(dialog.remember_password);
    }

    #[test]
    fn test_can_connect_requires_credentials() {
        let mut dialog = LoginDialog::new("http://localhost:5001", "", false);
        assert!(!dialog.can_connect());

        dialog.username_input = "demo".into();
        assert!(!dialog.can_connect());

        dialog.password_input = "secret".into();
        assert!(dialog.can_connect());
    }

    #[test]
    fn test_try_submit_rejects_bad_server_url() {
        let mut dialog = LoginDialog::new("localhost:5001", "demo", false);
        dialog.password_input = "secret".into();

        assert!(dialog.try_submit().is_none());
        assert!(dialog.error.is_some());
        assert!(dialog.open);

        dialog.server_input = "http://localhost:5001".into();
        let action = dialog.try_submit();
        assert!(matches!(action, Some(DialogAction::Connect { .. })));
        assert!(!dialog.open);
    }
}
