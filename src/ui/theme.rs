// X3dPrefs - ui/theme.rs
//
// Colour scheme, tool path status colours, and layout constants.
// No dependencies on app state or business logic.

use crate::platform::fs::PathStatus;
use egui::Color32;

/// Colour for a tool path status badge.
pub fn path_status_colour(status: PathStatus) -> Color32 {
    match status {
        PathStatus::Found => Color32::from_rgb(34, 197, 94),     // Green 500
        PathStatus::Command => Color32::from_rgb(59, 130, 246),  // Blue 500
        PathStatus::Missing => Color32::from_rgb(217, 119, 6),   // Amber 600
        PathStatus::Empty => Color32::from_rgb(107, 114, 128),   // Gray 500
    }
}

/// Colour for the title of the error window.
pub const ERROR_TITLE: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Status bar colours.
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Layout constants.
pub const OPTIONS_WIDTH: f32 = 640.0;
pub const OPTIONS_MAX_HEIGHT: f32 = 520.0;
pub const NUMBER_FIELD_WIDTH: f32 = 60.0;
pub const PATH_FIELD_WIDTH: f32 = 320.0;

/// Install light or dark visuals and the body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
            if let Some(font) = style.text_styles.get_mut(&text_style) {
                font.size = font_size;
            }
        }
    });
}
