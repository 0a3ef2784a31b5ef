//! Editing Session State
//!
//! The session is the single owner of the live [`Document`]. Every mutation
//! goes through `&mut self`, so there is exactly one writer at a time. The
//! session also tracks the transient notice shown after an export and how
//! many times the text has been copied.

use crate::ansi::{AnsiParser, AnsiSerializer};
use crate::clipboard::ClipboardSink;
use crate::config::EditorConfig;
use crate::editor::{Selection, SelectionSource, StyleEditor};
use crate::error::Result;
use crate::models::{Document, StyleCode};
use std::time::{Duration, Instant};

/// Kind of user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The export reached the clipboard
    Copied,
    /// Something the user asked for failed
    Error,
}

/// Short-lived message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    raised_at: Instant,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    /// Check if the notice is still visible at `now`
    pub fn is_active(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) < duration
    }
}

/// One editing session over one document
#[derive(Debug)]
pub struct EditorSession {
    document: Document,
    editor: StyleEditor,
    serializer: AnsiSerializer,
    parser: AnsiParser,
    notice: Option<Notice>,
    notice_duration: Duration,
    copy_count: u64,
}

impl EditorSession {
    /// Create a session with the starting document described by `config`
    pub fn new(config: &EditorConfig) -> Result<Self> {
        let parser = AnsiParser::new()?;
        let document = match &config.initial_text {
            Some(text) => parser.parse_document(text)?,
            None if config.start_with_welcome => Document::welcome(),
            None => Document::new(),
        };
        info!(
            "Editor session started ({} characters, {} styled runs)",
            document.char_len(),
            document.styled_count()
        );

        Ok(Self {
            document,
            editor: StyleEditor::new(),
            serializer: AnsiSerializer::new(),
            parser,
            notice: None,
            notice_duration: config.notice_duration(),
            copy_count: 0,
        })
    }

    /// Create a session around an existing document
    pub fn with_document(document: Document) -> Result<Self> {
        let mut session = Self::new(&EditorConfig {
            start_with_welcome: false,
            ..EditorConfig::default()
        })?;
        session.document = document;
        Ok(session)
    }

    /// The live document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Apply a style to a selection of the document
    pub fn apply_style(&mut self, selection: Selection, code: StyleCode) -> bool {
        self.editor.apply(&mut self.document, selection, code)
    }

    /// Apply a style to the host's current selection
    pub fn apply_style_from(&mut self, source: &dyn SelectionSource, code: StyleCode) -> bool {
        self.editor
            .apply_from_source(&mut self.document, source, code)
    }

    /// Drop all styling
    pub fn reset(&mut self) {
        self.editor.reset(&mut self.document);
    }

    /// Replace the document with new text, which may carry ANSI styling
    /// or be a previously exported code block.
    ///
    /// On a parse error the document is left as it was.
    pub fn load_text(&mut self, input: &str) -> Result<()> {
        match self.parser.parse_document(input) {
            Ok(document) => {
                debug!(
                    "Loaded {} characters with {} styled runs",
                    document.char_len(),
                    document.styled_count()
                );
                self.document = document;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load text: {}", e);
                self.notice = Some(Notice::new(NoticeKind::Error, e.to_string()));
                Err(e)
            }
        }
    }

    /// ANSI text of the current document
    pub fn serialize(&self) -> String {
        self.serializer.serialize(&self.document)
    }

    /// Fenced `ansi` code block of the current document
    pub fn export(&self) -> String {
        self.serializer.export(&self.document)
    }

    /// Copy the export to the clipboard.
    ///
    /// Success raises a "copied" notice; failure raises an error notice and
    /// is returned. The document is never modified.
    pub fn export_to(&mut self, clipboard: &mut dyn ClipboardSink) -> Result<()> {
        let text = self.export();
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.copy_count += 1;
                info!("Copied export to clipboard ({} total)", self.copy_count);
                self.notice = Some(Notice::new(NoticeKind::Copied, "Copied!"));
                Ok(())
            }
            Err(e) => {
                error!("Clipboard write failed: {}", e);
                self.notice = Some(Notice::new(NoticeKind::Error, "Failed to copy text"));
                Err(e)
            }
        }
    }

    /// Number of successful copies in this session
    pub fn copy_count(&self) -> u64 {
        self.copy_count
    }

    /// The notice to display at `now`, if any
    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| notice.is_active(now, self.notice_duration))
    }

    /// The notice to display right now, if any
    pub fn notice(&self) -> Option<&Notice> {
        self.notice_at(Instant::now())
    }

    /// Hide the current notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
