//! Status toast banners - floating messages in the top-right corner.
//!
//! The composer's success banner and connection notices are shown here
//! and expire after a few seconds.

use eframe::egui;

/// Render floating status toasts (top-right corner).
pub fn render_status_toasts(ctx: &egui::Context, status_messages: &[(String, std::time::Instant)]) {
    if status_messages.is_empty() {
        return;
    }

    let msgs: Vec<String> = status_messages.iter().map(|(m, _t)| m.clone()).collect();

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 44.0]) // Below the toolbar
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 230))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for msg in msgs {
                        let color = if msg.starts_with("Error") {
                            egui::Color32::LIGHT_RED
                        } else {
                            egui::Color32::LIGHT_GREEN
                        };
                        ui.label(egui::RichText::new(msg).color(color));
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    // Status toasts are purely UI, covered by integration tests
}
