//! Timeline view rendering.
//!
//! Draws the scrollable list of warbles with avatar, author, date, body
//! text, and the like button. URLs and @mentions in warble text are
//! rendered as distinct, clickable segments.

use eframe::egui::{self, Color32, RichText};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::timeline::{Timeline, TimelineEntry};
use crate::ui::theme::{render_avatar, user_color, WarblerTheme};

/// Interaction produced by the timeline view this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineAction {
    /// The viewer clicked the heart on a warble.
    ToggleLike { message_id: u64, csrf_token: String },
}

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("valid URL regex"));
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z0-9_]+").expect("valid mention regex"));

/// A piece of warble text with its rendering role.
#[derive(Debug, Clone, PartialEq)]
enum TextSegment {
    Plain(String),
    Url(String),
    Mention(String),
}

/// Split warble text into plain, URL, and mention segments.
fn segment_text(text: &str) -> Vec<TextSegment> {
    // Collect all special spans, then walk the text in order.
    let mut spans: Vec<(usize, usize, bool)> = Vec::new();
    for m in URL_RE.find_iter(text) {
        spans.push((m.start(), m.end(), true));
    }
    for m in MENTION_RE.find_iter(text) {
        // Mentions inside a URL stay part of the URL.
        if !spans.iter().any(|(s, e, _)| m.start() >= *s && m.start() < *e) {
            spans.push((m.start(), m.end(), false));
        }
    }
    spans.sort_by_key(|(s, _, _)| *s);

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end, is_url) in spans {
        if start > cursor {
            segments.push(TextSegment::Plain(text[cursor..start].to_string()));
        }
        let span = text[start..end].to_string();
        segments.push(if is_url {
            TextSegment::Url(span)
        } else {
            TextSegment::Mention(span)
        });
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(TextSegment::Plain(text[cursor..].to_string()));
    }
    segments
}

/// Render the full timeline into a scroll area.
///
/// Returns at most one action per frame; the caller forwards it to the
/// backend without touching the entry's liked state itself.
pub fn render_timeline(
    ui: &mut egui::Ui,
    theme: &WarblerTheme,
    timeline: &Timeline,
    base_url: &str,
) -> Option<TimelineAction> {
    let mut action = None;

    if timeline.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new("No warbles yet")
                    .color(theme.text_muted)
                    .size(15.0),
            );
            ui.label(
                RichText::new("Be the first to say something.")
                    .color(theme.text_muted)
                    .small(),
            );
        });
        return None;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(false)
        .show(ui, |ui| {
            for entry in &timeline.entries {
                if let Some(a) = render_entry(ui, theme, entry, base_url) {
                    action = Some(a);
                }
                ui.add_space(2.0);
            }
        });

    action
}

fn render_entry(
    ui: &mut egui::Ui,
    theme: &WarblerTheme,
    entry: &TimelineEntry,
    base_url: &str,
) -> Option<TimelineAction> {
    let mut action = None;

    let frame = egui::Frame::new()
        .fill(theme.surface[2])
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
        .stroke(egui::Stroke::new(1.0, theme.border_medium));

    frame.show(ui, |ui| {
        ui.horizontal_top(|ui| {
            render_avatar(ui, &entry.username, 36.0);
            ui.add_space(8.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&entry.username)
                            .color(user_color(&entry.username))
                            .strong(),
                    );
                    ui.label(
                        RichText::new(format!("@{}", entry.username))
                            .color(theme.text_muted)
                            .small(),
                    );
                    if entry.own {
                        ui.label(RichText::new("you").color(theme.accent).small());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // The date doubles as the warble's permalink.
                        ui.hyperlink_to(
                            RichText::new(entry.long_date())
                                .color(theme.text_muted)
                                .text_style(egui::TextStyle::Name("warble_date".into())),
                            format!("{}/messages/{}", base_url, entry.message_id),
                        );
                    });
                });

                render_warble_text(ui, theme, &entry.text);

                ui.horizontal(|ui| {
                    if let Some(location) = &entry.location {
                        if !location.is_empty() {
                            ui.label(
                                RichText::new(format!("\u{1F4CD} {location}"))
                                    .color(theme.text_secondary)
                                    .small(),
                            );
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // The viewer cannot like their own warbles.
                        if !entry.own {
                            let (glyph, color) = if entry.liked {
                                ("\u{2665}", theme.like)
                            } else {
                                ("\u{2661}", theme.text_muted)
                            };
                            let heart = ui
                                .add(
                                    egui::Button::new(RichText::new(glyph).color(color).size(16.0))
                                        .frame(false),
                                )
                                .on_hover_text(if entry.liked { "Unlike" } else { "Like" });
                            if heart.clicked() {
                                // Token is read at click time, once per press.
                                action = Some(TimelineAction::ToggleLike {
                                    message_id: entry.message_id,
                                    csrf_token: entry.csrf_token.clone(),
                                });
                            }
                        }
                    });
                });
            });
        });
    });

    action
}

fn render_warble_text(ui: &mut egui::Ui, theme: &WarblerTheme, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for segment in segment_text(text) {
            match segment {
                TextSegment::Plain(s) => {
                    ui.label(RichText::new(s).color(theme.text_primary));
                }
                TextSegment::Url(url) => {
                    ui.hyperlink_to(
                        RichText::new(url.clone()).color(Color32::from_rgb(102, 178, 255)),
                        url,
                    );
                }
                TextSegment::Mention(handle) => {
                    ui.label(
                        RichText::new(handle)
                            .color(theme.accent)
                            .strong(),
                    );
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_plain_text() {
        let segs = segment_text("just a warble");
        assert_eq!(segs, vec![TextSegment::Plain("just a warble".to_string())]);
    }

    #[test]
    fn test_segment_url() {
        let segs = segment_text("see https://example.com now");
        assert_eq!(
            segs,
            vec![
                TextSegment::Plain("see ".to_string()),
                TextSegment::Url("https://example.com".to_string()),
                TextSegment::Plain(" now".to_string()),
            ]
        );
    }

    #[test]
    fn test_segment_mention() {
        let segs = segment_text("hi @alice!");
        assert_eq!(
            segs,
            vec![
                TextSegment::Plain("hi ".to_string()),
                TextSegment::Mention("@alice".to_string()),
                TextSegment::Plain("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_mention_inside_url_stays_url() {
        let segs = segment_text("https://example.com/@alice");
        assert_eq!(
            segs,
            vec![TextSegment::Url("https://example.com/@alice".to_string())]
        );
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment_text("").is_empty());
    }
}
