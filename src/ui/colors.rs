//! Color utilities for UI rendering
//!
//! This module converts palette swatches to egui colors and holds the
//! Discord-like color theme of the editor window.

use crate::models::StyleCode;
use crate::palette::{self, PaletteEntry};
use eframe::egui;

/// Extension trait to convert palette colors to egui::Color32
pub trait ToEguiColor {
    /// Convert to egui::Color32, if the value has a color
    fn to_egui(&self) -> Option<egui::Color32>;
}

impl ToEguiColor for PaletteEntry {
    fn to_egui(&self) -> Option<egui::Color32> {
        self.rgb().map(|(r, g, b)| egui::Color32::from_rgb(r, g, b))
    }
}

impl ToEguiColor for StyleCode {
    fn to_egui(&self) -> Option<egui::Color32> {
        palette::lookup(*self).and_then(ToEguiColor::to_egui)
    }
}

/// Editor window colors
#[derive(Debug, Clone)]
pub struct UiColors {
    /// Window background
    pub background: egui::Color32,
    /// Text area background
    pub editor_background: egui::Color32,
    /// Text area border
    pub editor_border: egui::Color32,
    /// Default text color
    pub text: egui::Color32,
    /// Text color used for bold runs without a foreground color
    pub strong_text: egui::Color32,
    /// Title accent
    pub accent: egui::Color32,
    /// Copy button after a successful copy
    pub success: egui::Color32,
    /// Copy button at rest
    pub button: egui::Color32,
    /// Copy button under the pointer
    pub button_hover: egui::Color32,
    /// Error notices
    pub error: egui::Color32,
}

impl Default for UiColors {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(0x36, 0x39, 0x3f),
            editor_background: egui::Color32::from_rgb(0x2f, 0x31, 0x36),
            editor_border: egui::Color32::from_rgb(0x20, 0x22, 0x25),
            text: egui::Color32::from_rgb(0xb9, 0xbb, 0xbe),
            strong_text: egui::Color32::WHITE,
            accent: egui::Color32::from_rgb(0x58, 0x65, 0xf2),
            success: egui::Color32::from_rgb(0x43, 0xb5, 0x81),
            button: egui::Color32::from_rgb(0x4f, 0x54, 0x5c),
            button_hover: egui::Color32::from_rgb(0x5a, 0x5d, 0x63),
            error: egui::Color32::from_rgb(0xed, 0x42, 0x45),
        }
    }
}

impl UiColors {
    /// Apply the window colors to an egui context
    pub fn apply_to(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.editor_background;
        visuals.override_text_color = Some(self.text);
        ctx.set_visuals(visuals);
    }
}
