//! Shared color constants for the UI.

use egui::Color32;

/// Inline fetch errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Table header background and spinner accent.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(9, 132, 227);

/// Table border (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
