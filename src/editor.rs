//! Selection-aware style editing
//!
//! The style editor applies a style code to a character range of a
//! [`Document`], splitting partially covered runs at the range boundaries
//! and wrapping the covered runs in a new styled run. It also resets a
//! document back to plain text.
//!
//! Both operations only change the shape of the tree: the flattened text is
//! identical before and after [`StyleEditor::apply`].

use crate::models::run::{boundary_index, split_runs_at};
use crate::models::{Document, Run, StyleCode};

/// Half-open character range `[start, end)` over a document's flattened text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Create a selection from two cursor positions in either order
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            start: anchor.min(head),
            end: anchor.max(head),
        }
    }

    /// Selection covering the whole document
    pub fn all(document: &Document) -> Self {
        Self::new(0, document.char_len())
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both ends into `[0, len]`
    pub fn clamp(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

impl From<(usize, usize)> for Selection {
    fn from((anchor, head): (usize, usize)) -> Self {
        Self::new(anchor, head)
    }
}

/// Host-provided selection primitive
///
/// The presentation layer reports the current selection as character
/// offsets; the editor never reads selection state on its own.
pub trait SelectionSource {
    /// Current selection as `(start, end)` offsets, if anything is selected
    fn selection_range(&self) -> Option<(usize, usize)>;

    /// Current selection as a normalized [`Selection`]
    fn selection(&self) -> Option<Selection> {
        self.selection_range().map(Selection::from)
    }
}

impl SelectionSource for Option<(usize, usize)> {
    fn selection_range(&self) -> Option<(usize, usize)> {
        *self
    }
}

/// Applies styles to selections and resets documents
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleEditor;

impl StyleEditor {
    pub fn new() -> Self {
        Self
    }

    /// Wrap the selected text of `document` in a new styled run.
    ///
    /// The selection is clamped to the document. Empty selections and the
    /// reset code 0 leave the document untouched. Returns `true` if the tree
    /// changed.
    pub fn apply(&self, document: &mut Document, selection: Selection, code: StyleCode) -> bool {
        if code.value() == 0 {
            warn!("Ignoring reset code 0, it cannot open a styled run");
            return false;
        }
        let selection = selection.clamp(document.char_len());
        if selection.is_empty() {
            debug!("Ignoring style {} on empty selection", code);
            return false;
        }

        debug!(
            "Applying style {} to [{}, {})",
            code,
            selection.start(),
            selection.end()
        );
        wrap_range(
            document.runs_mut(),
            selection.start(),
            selection.end(),
            code,
        );
        true
    }

    /// Apply a style to whatever the host currently has selected
    pub fn apply_from_source(
        &self,
        document: &mut Document,
        source: &dyn SelectionSource,
        code: StyleCode,
    ) -> bool {
        match source.selection() {
            Some(selection) => self.apply(document, selection, code),
            None => false,
        }
    }

    /// Discard all styling, keeping the flattened text
    pub fn reset(&self, document: &mut Document) {
        let plain = Document::from_plain_text(&document.flatten_text());
        debug!(
            "Resetting document ({} styled runs dropped)",
            document.styled_count()
        );
        *document = plain;
    }
}

/// Wrap the runs covering `[start, end)` of a sibling list.
///
/// If the range lies entirely inside one styled child, the wrap happens
/// inside that child so its style stays an ancestor of the new run.
fn wrap_range(runs: &mut Vec<Run>, start: usize, end: usize, code: StyleCode) {
    let mut offset = 0;
    for run in runs.iter_mut() {
        let len = run.char_len();
        if offset <= start && end <= offset + len {
            if let Run::Styled { children, .. } = run {
                wrap_range(children, start - offset, end - offset, code);
                return;
            }
            break;
        }
        if offset + len > start {
            break;
        }
        offset += len;
    }

    split_runs_at(runs, start);
    split_runs_at(runs, end);
    let first = boundary_index(runs, start);
    let last = boundary_index(runs, end);

    let covered: Vec<Run> = runs.drain(first..last).collect();
    runs.insert(
        first,
        Run::Styled {
            code,
            children: covered,
        },
    );
}
