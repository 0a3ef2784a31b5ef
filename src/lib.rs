//! Discolor - A Rust GUI editor for Discord colored text
//!
//! This library provides the core of Discolor: a styled text model that
//! can be colored interactively and exported as an `ansi` code block that
//! Discord renders in color.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`models`] - The run tree (`Run`, `StyleCode`, `Document`)
//! - [`editor`] - Applying styles to selections, resetting to plain text
//! - [`ansi`] - ANSI serialization, export fencing and parsing
//! - [`palette`] - The fixed table of style codes
//! - [`state`] - The editing session owning the live document
//!
//! ### Boundaries
//!
//! - [`clipboard`] - Host clipboard primitive and the system clipboard
//! - [`config`] - Configuration loading
//! - [`ui`] - egui rendering helpers
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use discolor::{ansi, Document, Selection, StyleCode, StyleEditor};
//!
//! let mut document = Document::from_plain_text("the cat sat");
//! StyleEditor::new().apply(&mut document, Selection::new(4, 7), StyleCode(31));
//!
//! assert_eq!(ansi::serialize(&document), "the \x1b[31mcat\x1b[0m sat");
//! assert_eq!(
//!     ansi::export(&document),
//!     "```ansi\nthe \x1b[31mcat\x1b[0m sat\n```"
//! );
//! ```
//!
//! ## Architecture
//!
//! Everything runs on the egui UI thread. The session is the only owner of
//! the document and every mutation takes `&mut`, so there is never more
//! than one writer. Clipboard failures are reported as notices and never
//! touch the document.

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod palette;
pub mod state;
pub mod ui;

use std::path::Path;

// Re-exports for core functionality
pub use ansi::{AnsiParser, AnsiSerializer};
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use config::{Config, ConfigLoader};
pub use editor::{Selection, SelectionSource, StyleEditor};
pub use error::{Error, Result};
pub use models::{Document, Run, StyleCode};
pub use state::{EditorSession, Notice, NoticeKind};

// Version information
/// The current version of Discolor from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration and start a session
///
/// An explicit configuration file is tried first, then the default search
/// locations. Falls back to the built-in defaults when no usable
/// configuration file is found.
///
/// # Errors
///
/// Returns an error if the configured initial text cannot be parsed.
pub fn init(config_path: Option<&Path>) -> Result<(Config, EditorSession)> {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = load_config(config_path);
    let session = EditorSession::new(&config.editor)?;
    Ok((config, session))
}

fn load_config(config_path: Option<&Path>) -> Config {
    if let Some(path) = config_path {
        debug!("Loading config from: {}", path.display());
        match ConfigLoader::load_from_path(path) {
            Ok(config) => {
                info!("Configuration loaded from: {}", path.display());
                return config;
            }
            Err(e) => warn!("Failed to load config from {}: {}", path.display(), e),
        }
    }

    ConfigLoader::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration: {}. Using defaults", e);
        Config::default()
    })
}
