//! Styled document rendering
//!
//! Turns a [`Document`] into an egui `LayoutJob` so the editor can show a
//! colored preview of what Discord will display.

use super::colors::{ToEguiColor, UiColors};
use crate::models::{Document, StyleCode};
use eframe::egui;

/// The visible effect of a stack of nested style codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Innermost foreground code
    pub foreground: Option<StyleCode>,
    /// Innermost background code
    pub background: Option<StyleCode>,
    pub bold: bool,
    pub underline: bool,
}

impl ResolvedStyle {
    /// Resolve a style stack (outermost first); inner codes win
    pub fn from_stack(styles: &[StyleCode]) -> Self {
        let mut resolved = Self::default();
        for &code in styles {
            match code {
                StyleCode::BOLD => resolved.bold = true,
                StyleCode::UNDERLINE => resolved.underline = true,
                code if code.is_foreground() => resolved.foreground = Some(code),
                code if code.is_background() => resolved.background = Some(code),
                _ => {}
            }
        }
        resolved
    }
}

/// Renders documents as colored egui text
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    font_size: f32,
    colors: UiColors,
}

impl DocumentRenderer {
    /// Create a renderer
    pub fn new(font_size: f32, colors: UiColors) -> Self {
        Self { font_size, colors }
    }

    /// Build a layout job for the whole document
    pub fn layout_job(&self, document: &Document) -> egui::text::LayoutJob {
        let mut job = egui::text::LayoutJob::default();
        for segment in document.segments() {
            let style = ResolvedStyle::from_stack(&segment.styles);
            job.append(&segment.text, 0.0, self.text_format(style));
        }
        job
    }

    fn text_format(&self, style: ResolvedStyle) -> egui::TextFormat {
        // egui's default fonts have no bold face
        let default_color = if style.bold {
            self.colors.strong_text
        } else {
            self.colors.text
        };
        let color = style
            .foreground
            .and_then(|code| code.to_egui())
            .unwrap_or(default_color);
        let background = style
            .background
            .and_then(|code| code.to_egui())
            .unwrap_or(egui::Color32::TRANSPARENT);
        let underline = if style.underline {
            egui::Stroke::new(1.0, color)
        } else {
            egui::Stroke::NONE
        };

        egui::TextFormat {
            font_id: egui::FontId::monospace(self.font_size),
            color,
            background,
            underline,
            ..Default::default()
        }
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(16.0, UiColors::default())
    }
}
