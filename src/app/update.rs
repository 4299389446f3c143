//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::WarblerApp;
use crate::protocol::BackendAction;
use crate::ui;
use crate::ui::timeline::TimelineAction;
use crate::ui::toolbar::ToolbarAction;

impl eframe::App for WarblerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events
        self.process_events();

        // Global keyboard shortcuts (work even when input doesn't have focus)
        let mut shortcut_action: Option<ToolbarAction> = None;
        ctx.input(|i| {
            // Ctrl+N: New warble
            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                shortcut_action = Some(ToolbarAction::OpenComposer);
            }
            // Ctrl+R: Refresh timeline
            if i.modifiers.ctrl && i.key_pressed(egui::Key::R) {
                shortcut_action = Some(ToolbarAction::Refresh);
            }
            // Ctrl+L: Toggle system log panel
            if i.modifiers.ctrl && i.key_pressed(egui::Key::L) {
                self.show_system_log = !self.show_system_log;
            }
        });

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        let theme = self.get_theme();

        // Top toolbar
        let toolbar_action = ui::toolbar::render_toolbar(ctx, &theme, &self.state);
        if let Some(action) = toolbar_action.or(shortcut_action) {
            self.handle_toolbar_action(action, ctx);
        }

        // Bottom panel: system log (Ctrl+L)
        if self.show_system_log {
            egui::TopBottomPanel::bottom("system_log")
                .frame(
                    egui::Frame::new()
                        .fill(theme.surface[1])
                        .inner_margin(egui::Margin::same(8)),
                )
                .max_height(140.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for line in &self.state.system_log {
                                ui.label(
                                    egui::RichText::new(line)
                                        .color(theme.text_secondary)
                                        .monospace(),
                                );
                            }
                        });
                });
        }

        // Central panel: the timeline
        let mut like_action = None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[0])
                    .inner_margin(egui::Margin::same(10)),
            )
            .show(ctx, |ui| {
                if let Some(session) = &self.state.session {
                    like_action = ui::timeline::render_timeline(
                        ui,
                        &theme,
                        &self.state.timeline,
                        &session.server_url,
                    );
                } else {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.label(
                            egui::RichText::new("Log in to see your timeline")
                                .color(theme.text_muted)
                                .size(15.0),
                        );
                    });
                }
            });

        if let Some(TimelineAction::ToggleLike {
            message_id,
            csrf_token,
        }) = like_action
        {
            // The heart is not flipped here; the server's acknowledgement
            // drives the flip through the event loop.
            let _ = self.action_tx.send(BackendAction::ToggleLike {
                message_id,
                csrf_token,
            });
        }

        // Render dialogs using the self-contained dialog pattern
        self.render_dialogs(ctx);
    }
}

impl WarblerApp {
    fn handle_toolbar_action(&mut self, action: ToolbarAction, ctx: &egui::Context) {
        match action {
            ToolbarAction::OpenComposer => {
                if let Some(session) = &self.state.session {
                    let token = session.composer_csrf_token.clone();
                    self.dialogs.open_composer(&token);
                }
            }
            ToolbarAction::OpenLogin => {
                self.dialogs.open_login(
                    &self.last_server_url,
                    &self.last_username,
                    self.remember_password,
                );
            }
            ToolbarAction::Refresh => {
                if self.state.is_connected() {
                    let _ = self.action_tx.send(BackendAction::FetchTimeline);
                }
            }
            ToolbarAction::ToggleTheme => {
                self.theme = if self.theme == "light" {
                    "dark".to_string()
                } else {
                    "light".to_string()
                };
                match self.theme.as_str() {
                    "light" => ctx.set_visuals(egui::Visuals::light()),
                    _ => ctx.set_visuals(egui::Visuals::dark()),
                }
                ui::theme::apply_app_style(ctx);
                self.save_current_settings();
            }
        }
    }
}
