//! Composer dialog - the modal "new warble" form.
//!
//! Submitting does not close the window: the modal hides only when the
//! server acknowledges the warble, and stays open after a failure.

use eframe::egui;

use super::DialogAction;
use crate::validation::{
    sanitize_warble, validate_location, validate_warble_text, MAX_WARBLE_LENGTH,
};

/// Self-contained composer dialog state.
pub struct ComposerDialog {
    /// Whether the dialog is visible
    pub open: bool,
    /// Warble text being composed
    pub text_input: String,
    /// Optional location field
    pub location_input: String,
    /// Token embedded in this form, forwarded verbatim on submission
    csrf_token: String,
}

impl ComposerDialog {
    /// Create a new composer dialog carrying the form's token
    pub fn new(csrf_token: &str) -> Self {
        Self {
            open: true,
            text_input: String::new(),
            location_input: String::new(),
            csrf_token: csrf_token.to_string(),
        }
    }

    fn can_post(&self) -> bool {
        validate_warble_text(&self.text_input).is_ok()
            && validate_location(&self.location_input).is_ok()
    }

    fn submit_action(&self) -> DialogAction {
        DialogAction::SubmitWarble {
            text: sanitize_warble(self.text_input.trim()),
            location: self.location_input.trim().to_string(),
            csrf_token: self.csrf_token.clone(),
        }
    }

    /// Render the composer dialog.
    /// Returns `Some(DialogAction::SubmitWarble)` when the user posted.
    pub fn render(&mut self, ctx: &egui::Context, in_flight: bool) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut still_open = true;

        egui::Window::new("New Warble")
            .open(&mut still_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("What's happening?");

                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.text_input)
                        .desired_width(320.0)
                        .desired_rows(4),
                );
                if self.text_input.is_empty() {
                    response.request_focus();
                }

                // Character counter turns red past the limit
                let count = self.text_input.trim().chars().count();
                let counter_color = if count > MAX_WARBLE_LENGTH {
                    ui.visuals().error_fg_color
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.label(
                    egui::RichText::new(format!("{}/{}", count, MAX_WARBLE_LENGTH))
                        .small()
                        .color(counter_color),
                );

                ui.add_space(4.0);
                ui.label("Location:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.location_input)
                        .hint_text("NYC")
                        .desired_width(200.0),
                );

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let can_post = self.can_post() && !in_flight;
                    let post_label = if in_flight { "Posting..." } else { "Post" };

                    if ui.add_enabled(can_post, egui::Button::new(post_label)).clicked() {
                        action = Some(self.submit_action());
                    }

                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });

                // Also submit on Ctrl+Enter
                if ui.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Enter))
                    && self.can_post()
                    && !in_flight
                {
                    action = Some(self.submit_action());
                }

                // Close on Escape
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.open = false;
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
