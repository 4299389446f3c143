//! Core WarblerApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;

use crate::api::run_backend;
use crate::config::{load_password, load_settings, save_settings, Settings};
use crate::dialog_manager::DialogManager;
use crate::protocol::{BackendAction, UiEvent};
use crate::state::ClientState;
use crate::ui;

pub struct WarblerApp {
    // Core state (session, timeline, toasts, system log)
    pub state: ClientState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<UiEvent>,

    // Dialogs - managed centrally by DialogManager
    pub dialogs: DialogManager,

    // Theme name ("dark" or "light")
    pub theme: String,

    // UI visibility toggles
    pub show_system_log: bool,

    // Login form defaults carried between dialog openings
    pub(super) last_server_url: String,
    pub(super) last_username: String,
    pub(super) remember_password: bool,
}

impl WarblerApp {
    /// Get the current theme based on the theme string ("dark" or "light")
    pub(super) fn get_theme(&self) -> ui::theme::WarblerTheme {
        match self.theme.as_str() {
            "light" => ui::theme::WarblerTheme::light(),
            _ => ui::theme::WarblerTheme::dark(),
        }
    }

    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<UiEvent>();

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx);
        });

        // Try to load persisted settings and apply theme in creation context
        let settings = load_settings();
        if let Some(s) = &settings {
            match s.theme.as_str() {
                "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
                _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
            }
        }

        // Apply modern theme styling
        ui::theme::apply_app_style(&cc.egui_ctx);

        let mut app = Self {
            state: ClientState::new(),

            action_tx,
            event_rx,

            dialogs: DialogManager::new(),

            theme: "dark".to_string(),
            show_system_log: false,

            last_server_url: crate::config::DEFAULT_SERVER_URL.to_string(),
            last_username: String::new(),
            remember_password: true,
        };

        // Restore settings if present
        if let Some(s) = settings {
            if !s.server_url.is_empty() {
                app.last_server_url = s.server_url;
            }
            if !s.username.is_empty() {
                app.last_username = s.username;
            }
            if !s.theme.is_empty() {
                app.theme = s.theme;
            }
            app.remember_password = s.remember_password;

            // Log in with stored credentials, or fall back to the dialog
            let stored = if s.auto_login && app.remember_password && !app.last_username.is_empty()
            {
                load_password(&app.last_username)
            } else {
                None
            };
            match stored {
                Some(password) => {
                    let _ = app.action_tx.send(BackendAction::Login {
                        server_url: app.last_server_url.clone(),
                        username: app.last_username.clone(),
                        password,
                    });
                }
                None => {
                    app.dialogs.open_login(
                        &app.last_server_url,
                        &app.last_username,
                        app.remember_password,
                    );
                }
            }
        } else {
            app.dialogs.open_login(
                &app.last_server_url,
                &app.last_username,
                app.remember_password,
            );
        }
        app
    }

    pub(super) fn save_current_settings(&self) {
        let settings = Settings {
            server_url: self.last_server_url.clone(),
            username: self.last_username.clone(),
            theme: self.theme.clone(),
            remember_password: self.remember_password,
            auto_login: self.remember_password,
        };
        if let Err(e) = save_settings(&settings) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl Drop for WarblerApp {
    fn drop(&mut self) {
        // Persist settings on exit
        self.save_current_settings();
    }
}
