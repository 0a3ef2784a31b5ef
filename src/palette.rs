//! Style code table
//!
//! The fixed set of style codes offered by the editor: eight foreground
//! colors (30-37), eight background colors (40-47) and the bold and
//! underline modifiers. Swatch colors approximate how Discord renders each
//! code in its `ansi` code blocks.

use crate::models::StyleCode;
use serde::{Deserialize, Serialize};

/// Which group of buttons a style belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleCategory {
    /// Text attributes such as bold
    Modifier,
    /// Foreground (text) color
    Foreground,
    /// Background color
    Background,
}

/// One entry of the style table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// SGR parameter emitted for this style
    pub code: StyleCode,
    /// Display name
    pub name: &'static str,
    /// Swatch color as `0xRRGGBB`, `None` for modifiers
    pub swatch: Option<u32>,
    pub category: StyleCategory,
}

impl PaletteEntry {
    const fn modifier(code: u8, name: &'static str) -> Self {
        Self {
            code: StyleCode(code),
            name,
            swatch: None,
            category: StyleCategory::Modifier,
        }
    }

    const fn foreground(code: u8, name: &'static str, rgb: u32) -> Self {
        Self {
            code: StyleCode(code),
            name,
            swatch: Some(rgb),
            category: StyleCategory::Foreground,
        }
    }

    const fn background(code: u8, name: &'static str, rgb: u32) -> Self {
        Self {
            code: StyleCode(code),
            name,
            swatch: Some(rgb),
            category: StyleCategory::Background,
        }
    }

    /// Swatch color split into RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        self.swatch
            .map(|rgb| ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
    }

    /// Swatch color as a `#rrggbb` string
    pub fn hex(&self) -> Option<String> {
        self.swatch.map(|rgb| format!("#{:06x}", rgb))
    }
}

/// All styles offered by the editor, in button order
pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry::modifier(1, "Bold"),
    PaletteEntry::modifier(4, "Underline"),
    PaletteEntry::foreground(30, "Dark Gray", 0x4f545c),
    PaletteEntry::foreground(31, "Red", 0xdc322f),
    PaletteEntry::foreground(32, "Green", 0x859900),
    PaletteEntry::foreground(33, "Gold", 0xb58900),
    PaletteEntry::foreground(34, "Blue", 0x268bd2),
    PaletteEntry::foreground(35, "Pink", 0xd33682),
    PaletteEntry::foreground(36, "Teal", 0x2aa198),
    PaletteEntry::foreground(37, "White", 0xffffff),
    PaletteEntry::background(40, "Dark Blue", 0x002b36),
    PaletteEntry::background(41, "Brown", 0xcb4b16),
    PaletteEntry::background(42, "Gray", 0x586e75),
    PaletteEntry::background(43, "Slate", 0x657b83),
    PaletteEntry::background(44, "Light Gray", 0x839496),
    PaletteEntry::background(45, "Purple", 0x6c71c4),
    PaletteEntry::background(46, "Silver", 0x93a1a1),
    PaletteEntry::background(47, "Cream", 0xfdf6e3),
];

/// Look up a style by code
pub fn lookup(code: StyleCode) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.code == code)
}

/// All styles of one category, in button order
pub fn category(category: StyleCategory) -> impl Iterator<Item = &'static PaletteEntry> {
    PALETTE.iter().filter(move |entry| entry.category == category)
}
