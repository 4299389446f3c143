//! Dialog management for centralized dialog state and rendering.
//!
//! Consolidates dialog state into a single DialogManager, keeping the
//! main WarblerApp struct small and providing one API for opening,
//! rendering, and handling dialog actions.

use eframe::egui::Context;

use crate::ui::dialogs::{ComposerDialog, DialogAction, LoginDialog};

/// Manages all application dialogs in one place.
///
/// Uses the Option<Dialog> pattern where None = closed, Some = open.
#[derive(Default)]
pub struct DialogManager {
    pub composer_dialog: Option<ComposerDialog>,
    pub login_dialog: Option<LoginDialog>,
}

impl DialogManager {
    /// Create a new DialogManager with all dialogs closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the composer modal carrying the form's anti-forgery token.
    pub fn open_composer(&mut self, csrf_token: &str) {
        if self.composer_dialog.is_none() {
            self.composer_dialog = Some(ComposerDialog::new(csrf_token));
        }
    }

    /// Hide the composer after a server acknowledgment.
    pub fn close_composer(&mut self) {
        self.composer_dialog = None;
    }

    /// Open the login dialog prefilled from saved settings.
    pub fn open_login(&mut self, server_url: &str, username: &str, remember_password: bool) {
        self.login_dialog = Some(LoginDialog::new(server_url, username, remember_password));
    }

    pub fn composer_open(&self) -> bool {
        self.composer_dialog.is_some()
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context, composer_in_flight: bool) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        // Composer dialog
        let mut close_composer = false;
        if let Some(ref mut dialog) = self.composer_dialog {
            if let Some(action) = dialog.render(ctx, composer_in_flight) {
                actions.push(action);
            }
            if !dialog.is_open() {
                close_composer = true;
            }
        }
        if close_composer {
            self.composer_dialog = None;
        }

        // Login dialog
        let mut close_login = false;
        if let Some(ref mut dialog) = self.login_dialog {
            if let Some(action) = dialog.render(ctx) {
                actions.push(action);
            }
            if !dialog.is_open() {
                close_login = true;
            }
        }
        if close_login {
            self.login_dialog = None;
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_manager_new() {
        let dm = DialogManager::new();
        assert!(dm.composer_dialog.is_none());
        assert!(dm.login_dialog.is_none());
        assert!(!dm.composer_open());
    }

    #[test]
    fn test_open_composer() {
        let mut dm = DialogManager::new();
        dm.open_composer("tok-form");
        assert!(dm.composer_open());
    }

    #[test]
    fn test_open_composer_keeps_existing_draft() {
        let mut dm = DialogManager::new();
        dm.open_composer("tok-form");
        dm.composer_dialog.as_mut().unwrap().text_input = "draft".into();

        // Re-opening must not discard the draft
        dm.open_composer("tok-form");
        assert_eq!(dm.composer_dialog.as_ref().unwrap().text_input, "draft");
    }

    #[test]
    fn test_close_composer() {
        let mut dm = DialogManager::new();
        dm.open_composer("tok-form");
        dm.close_composer();
        assert!(!dm.composer_open());
    }

    #[test]
    fn test_open_login() {
        let mut dm = DialogManager::new();
        dm.open_login("http://localhost:5001", "demo", false);
        assert!(dm.login_dialog.is_some());
    }
}
