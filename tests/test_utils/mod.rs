//! Test Utilities and Mocks
//!
//! Shared fixtures and a mock clipboard for the Discolor test suites.

#![allow(dead_code)]


// Re-exports for convenience
pub use fixtures::{count_escapes, overlapping_document, EscapeCounts};
pub use mock_clipboard::MockClipboard;
