//! Core data models for Discolor
//!
//! This module contains the styled text tree: individual runs and the
//! document that owns them.

pub mod document;
pub mod run;

// Re-exports for convenience
pub use document::{Document, Segment};
pub use run::{Run, StyleCode};
