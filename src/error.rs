//! Error types and Result aliases for Discolor

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Discolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Discolor
#[derive(Debug, Error)]
pub enum Error {
    // === Clipboard errors ===
    /// The system clipboard could not be opened
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    /// Writing the export to the clipboard failed
    #[error("Failed to copy text to clipboard: {reason}")]
    ClipboardWriteFailed { reason: String },

    // === Document errors ===
    /// A run was constructed without any content
    #[error("Cannot construct an empty {kind} run")]
    EmptyRun { kind: &'static str },

    /// A text run held a line break, carriage return or escape character
    #[error("Text run contains a control character: \"{text}\"")]
    InvalidText { text: String },

    /// A styled run used the reset code, which cannot open a run
    #[error("Style code {code} cannot open a styled run")]
    InvalidStyleCode { code: u8 },

    /// An SGR sequence carried parameters that are not style codes
    #[error("Invalid escape sequence '{sequence}' at byte {position}")]
    InvalidEscapeSequence { sequence: String, position: usize },

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    // === I/O and regex errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Regex compilation errors
    #[error("Regex compilation error: {0}")]
    Regex(#[from] regex::Error),
}
