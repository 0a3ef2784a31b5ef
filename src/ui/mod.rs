//! UI components and rendering
//!
//! egui helpers shared by the editor window: theme colors, palette swatch
//! conversion and the colored document preview.

pub mod colors;
pub mod text;

// Re-exports for convenience
pub use colors::{ToEguiColor, UiColors};
pub use text::{DocumentRenderer, ResolvedStyle};
