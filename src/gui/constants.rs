//! GUI-specific constants for layout and status colors

use egui;

/// Window dimensions
pub const WINDOW_WIDTH: f32 = 250.0;
pub const WINDOW_HEIGHT: f32 = 350.0;

/// Layout spacing
pub const PANEL_PADDING: f32 = 12.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Text size for plan list rows
pub const LIST_TEXT_SIZE: f32 = 14.0;

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
