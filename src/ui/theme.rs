//! Color themes and styling utilities for the Warbler client.
//!
//! Semantic colors over arbitrary ones: surfaces for depth, accent for
//! interactive elements, a dedicated `like` red for the heart, and a
//! four-level text hierarchy. Dark is the primary design; light is the
//! inverted variant.

use eframe::egui::{Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

/// Theme with semantic color system
#[derive(Clone, Debug)]
pub struct WarblerTheme {
    pub name: String,
    /// Depth hierarchy: app background, panels, content, hover
    pub surface: [Color32; 4],
    pub accent: Color32,
    pub success: Color32,
    pub error: Color32,
    /// Fill color of a liked heart
    pub like: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_medium: Color32,
}

impl WarblerTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),  // app background
                Color32::from_rgb(19, 19, 26),  // toolbar/panels
                Color32::from_rgb(28, 28, 38),  // timeline background
                Color32::from_rgb(37, 37, 50),  // hover state
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            like: Color32::from_rgb(249, 24, 128),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
            border_medium: Color32::from_rgb(47, 49, 54),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(227, 229, 232),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            like: Color32::from_rgb(249, 24, 128),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(116, 127, 141),
            border_medium: Color32::from_rgb(210, 213, 219),
        }
    }
}

/// Configure text styles (14px base font, proper hierarchy)
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::Proportional;

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        ),
        (
            TextStyle::Name("warble_text".into()),
            FontId::new(14.0, Proportional),
        ),
        (
            TextStyle::Name("warble_date".into()),
            FontId::new(11.0, Proportional),
        ),
    ]
    .into()
}

/// Apply the theme style to the egui context
pub fn apply_app_style(ctx: &eframe::egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = eframe::egui::vec2(8.0, 6.0);
    style.spacing.window_margin = eframe::egui::Margin::same(12);
    style.spacing.button_padding = eframe::egui::vec2(10.0, 5.0);

    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(55, 60, 70);
    style.visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(55, 60, 70);
    style.visuals.widgets.inactive.bg_stroke = eframe::egui::Stroke::NONE;
    style.visuals.widgets.inactive.corner_radius = eframe::egui::CornerRadius::same(6);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(70, 76, 88);
    style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(70, 76, 88);
    style.visuals.widgets.hovered.bg_stroke = eframe::egui::Stroke::NONE;
    style.visuals.widgets.hovered.corner_radius = eframe::egui::CornerRadius::same(6);

    style.visuals.widgets.active.bg_fill = Color32::from_rgb(88, 101, 242);
    style.visuals.widgets.active.weak_bg_fill = Color32::from_rgb(88, 101, 242);
    style.visuals.widgets.active.corner_radius = eframe::egui::CornerRadius::same(6);

    style.visuals.extreme_bg_color = Color32::from_rgb(30, 32, 38);
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(88, 101, 242, 100);

    ctx.set_style(style);
}

/// User color palette - 16 distinct, accessible colors
const USER_COLORS: [Color32; 16] = [
    Color32::from_rgb(231, 76, 60),   // Vibrant red
    Color32::from_rgb(46, 204, 113),  // Emerald green
    Color32::from_rgb(52, 152, 219),  // Bright blue
    Color32::from_rgb(155, 89, 182),  // Amethyst purple
    Color32::from_rgb(241, 196, 15),  // Sunflower yellow
    Color32::from_rgb(230, 126, 34),  // Carrot orange
    Color32::from_rgb(26, 188, 156),  // Turquoise
    Color32::from_rgb(236, 100, 166), // Pink
    Color32::from_rgb(142, 68, 173),  // Wisteria
    Color32::from_rgb(41, 128, 185),  // Belize blue
    Color32::from_rgb(39, 174, 96),   // Nephritis
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(192, 57, 43),   // Pomegranate
    Color32::from_rgb(22, 160, 133),  // Green sea
    Color32::from_rgb(211, 84, 0),    // Pumpkin
    Color32::from_rgb(102, 178, 255), // Light blue
];

/// Generate a consistent color for a username using FNV-1a hash.
///
/// Same username always maps to the same color, making authors easy to
/// track visually in the timeline.
pub fn user_color(username: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in username.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    let idx = (hash as usize) % USER_COLORS.len();
    USER_COLORS[idx]
}

/// Render a circular avatar with the user's initial.
///
/// The web app served avatar images; here the username seeds a colored
/// initial disc instead of fetching the image.
pub fn render_avatar(ui: &mut eframe::egui::Ui, username: &str, size: f32) -> eframe::egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(eframe::egui::vec2(size, size), eframe::egui::Sense::hover());

    let bg_color = user_color(username);
    let painter = ui.painter();

    // Subtle shadow for depth
    let shadow_offset = eframe::egui::vec2(0.0, 1.5);
    painter.circle_filled(
        rect.center() + shadow_offset,
        size / 2.0,
        Color32::from_black_alpha(30),
    );

    painter.circle_filled(rect.center(), size / 2.0, bg_color);
    painter.circle_stroke(
        rect.center(),
        size / 2.0,
        eframe::egui::Stroke::new(1.5, Color32::from_white_alpha(15)),
    );

    let initial: String = username
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .collect();
    let font_id = eframe::egui::FontId::new(size * 0.45, eframe::egui::FontFamily::Proportional);

    painter.text(
        rect.center(),
        eframe::egui::Align2::CENTER_CENTER,
        initial,
        font_id,
        Color32::WHITE,
    );

    response
}
