//! Top toolbar: connection status, viewer identity, and primary actions.

use eframe::egui::{self, RichText};

use crate::state::ClientState;
use crate::ui::theme::{user_color, WarblerTheme};

/// Action requested from the toolbar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    OpenComposer,
    OpenLogin,
    Refresh,
    ToggleTheme,
}

pub fn render_toolbar(
    ctx: &egui::Context,
    theme: &WarblerTheme,
    state: &ClientState,
) -> Option<ToolbarAction> {
    let mut action = None;

    egui::TopBottomPanel::top("toolbar")
        .frame(
            egui::Frame::new()
                .fill(theme.surface[1])
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Warbler")
                        .color(theme.accent)
                        .strong()
                        .size(16.0),
                );
                ui.add_space(8.0);

                match &state.session {
                    Some(session) => {
                        ui.label(
                            RichText::new(format!("@{}", session.username))
                                .color(user_color(&session.username)),
                        );
                        ui.label(
                            RichText::new(&session.server_url)
                                .color(theme.text_muted)
                                .small(),
                        );
                    }
                    None => {
                        ui.label(RichText::new("Not connected").color(theme.text_muted));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.is_connected() {
                        let compose = ui.add(
                            egui::Button::new(RichText::new("New Warble").strong())
                                .fill(theme.accent),
                        );
                        if compose.clicked() {
                            action = Some(ToolbarAction::OpenComposer);
                        }
                        if ui
                            .button("\u{21BB}")
                            .on_hover_text("Refresh timeline (Ctrl+R)")
                            .clicked()
                        {
                            action = Some(ToolbarAction::Refresh);
                        }
                    } else if ui.button("Log in").clicked() {
                        action = Some(ToolbarAction::OpenLogin);
                    }

                    let theme_glyph = if theme.name == "Dark" { "\u{2600}" } else { "\u{263D}" };
                    if ui.button(theme_glyph).on_hover_text("Toggle theme").clicked() {
                        action = Some(ToolbarAction::ToggleTheme);
                    }
                });
            });
        });

    action
}
