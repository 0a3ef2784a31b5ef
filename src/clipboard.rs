//! Clipboard access
//!
//! The editor only ever writes to the clipboard. The [`ClipboardSink`]
//! trait is the narrow host primitive the session talks to; the
//! [`SystemClipboard`] implementation is backed by `arboard`.

use crate::error::{Error, Result};

/// Host clipboard primitive
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Open the system clipboard
    ///
    /// Opening is lazy: if the clipboard is not available yet, it is retried
    /// on the next write.
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self { inner }
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| Error::ClipboardUnavailable {
                reason: e.to_string(),
            })?;
            self.inner = Some(clipboard);
        }
        self.inner.as_mut().ok_or_else(|| Error::ClipboardUnavailable {
            reason: "clipboard was not initialized".to_string(),
        })
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("available", &self.inner.is_some())
            .finish()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self.clipboard()?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::ClipboardWriteFailed {
                reason: e.to_string(),
            })?;
        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
