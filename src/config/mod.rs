//! Configuration management for Discolor
//!
//! Configuration covers the editor window (font size, window size, tooltips)
//! and the editing session (starting document, notice duration). Files are
//! TOML or JSON; missing fields fall back to their defaults.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use loader::{ConfigFormat, ConfigLoader, LoadOptions};

/// Main configuration structure for Discolor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration
    pub ui: UiConfig,

    /// Editing session configuration
    pub editor: EditorConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Font size of the editor text in points
    pub font_size: u32,

    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,

    /// Show color names when hovering swatches
    pub show_tooltips: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 16,
            window_width: 720.0,
            window_height: 640.0,
            show_tooltips: true,
        }
    }
}

/// Editing session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Start with the pre-styled welcome text
    pub start_with_welcome: bool,

    /// Text to start with instead of the welcome text (ANSI or plain)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_text: Option<String>,

    /// How long the "Copied!" notice stays visible, in milliseconds
    pub notice_duration_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            start_with_welcome: true,
            initial_text: None,
            notice_duration_ms: 3000,
        }
    }
}

impl EditorConfig {
    /// Notice duration as a [`Duration`]
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}
