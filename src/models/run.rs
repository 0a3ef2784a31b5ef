//! Run Model
//!
//! A run is one node of the styled text tree: literal text, a hard line
//! break, or a styled subtree carrying a single SGR style code.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ANSI SGR parameter (foreground, background, bold, underline...)
///
/// Codes are accepted opaquely; mapping a code to a display color is the
/// job of [`crate::palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleCode(pub u8);

impl StyleCode {
    /// Bold text
    pub const BOLD: StyleCode = StyleCode(1);
    /// Underlined text
    pub const UNDERLINE: StyleCode = StyleCode(4);

    /// Raw SGR parameter value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a foreground color code (30-37)
    pub fn is_foreground(self) -> bool {
        (30..=37).contains(&self.0)
    }

    /// Check if this is a background color code (40-47)
    pub fn is_background(self) -> bool {
        (40..=47).contains(&self.0)
    }
}

impl From<u8> for StyleCode {
    fn from(code: u8) -> Self {
        StyleCode(code)
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Characters a text run never holds
const FORBIDDEN_IN_TEXT: [char; 3] = ['\n', '\r', '\x1b'];

/// Strip carriage returns and escape characters from one line of input
pub(crate) fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| !FORBIDDEN_IN_TEXT.contains(c))
        .collect()
}

/// A node in the styled text tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Run {
    /// Literal, non-empty text without line breaks
    Text(String),
    /// A style code wrapping a non-empty, ordered sequence of children
    Styled { code: StyleCode, children: Vec<Run> },
    /// A hard newline
    LineBreak,
}

impl Run {
    /// Create a text run, rejecting empty content and control characters
    pub fn text(content: impl Into<String>) -> Result<Self> {
        let run = Run::Text(content.into());
        run.validate()?;
        Ok(run)
    }

    /// Create a styled run, rejecting code 0 and an empty child list
    pub fn styled(code: impl Into<StyleCode>, children: Vec<Run>) -> Result<Self> {
        let run = Run::Styled {
            code: code.into(),
            children,
        };
        run.validate()?;
        Ok(run)
    }

    /// Length of this run's flattened text, in characters
    pub fn char_len(&self) -> usize {
        match self {
            Run::Text(text) => text.chars().count(),
            Run::Styled { children, .. } => children.iter().map(Run::char_len).sum(),
            Run::LineBreak => 1,
        }
    }

    /// Append this run's flattened text to `out`
    pub fn flatten_into(&self, out: &mut String) {
        match self {
            Run::Text(text) => out.push_str(text),
            Run::Styled { children, .. } => {
                for child in children {
                    child.flatten_into(out);
                }
            }
            Run::LineBreak => out.push('\n'),
        }
    }

    /// Number of styled runs in this subtree, including itself
    pub fn styled_count(&self) -> usize {
        match self {
            Run::Styled { children, .. } => {
                1 + children.iter().map(Run::styled_count).sum::<usize>()
            }
            _ => 0,
        }
    }

    /// Check the construction invariants for this subtree
    pub fn validate(&self) -> Result<()> {
        match self {
            Run::Text(text) if text.is_empty() => Err(Error::EmptyRun { kind: "text" }),
            Run::Text(text) if text.contains(FORBIDDEN_IN_TEXT) => Err(Error::InvalidText {
                text: text.escape_debug().to_string(),
            }),
            Run::Text(_) | Run::LineBreak => Ok(()),
            Run::Styled { code, .. } if code.0 == 0 => {
                Err(Error::InvalidStyleCode { code: code.0 })
            }
            Run::Styled { children, .. } if children.is_empty() => {
                Err(Error::EmptyRun { kind: "styled" })
            }
            Run::Styled { children, .. } => children.iter().try_for_each(Run::validate),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    /// Split this run at a character offset strictly inside it.
    ///
    /// Styled runs are split recursively; both halves keep the same style
    /// code so the nesting above the split point is preserved.
    pub(crate) fn split_at(self, offset: usize) -> (Run, Run) {
        debug_assert!(offset > 0 && offset < self.char_len());
        match self {
            Run::Text(text) => {
                let byte = text
                    .char_indices()
                    .nth(offset)
                    .map(|(idx, _)| idx)
                    .unwrap_or(text.len());
                let (left, right) = text.split_at(byte);
                (Run::Text(left.to_string()), Run::Text(right.to_string()))
            }
            Run::Styled { code, mut children } => {
                split_runs_at(&mut children, offset);
                let at = boundary_index(&children, offset);
                let right = children.split_off(at);
                (
                    Run::Styled {
                        code,
                        children,
                    },
                    Run::Styled {
                        code,
                        children: right,
                    },
                )
            }
            // A line break is one character wide; there is no interior offset.
            Run::LineBreak => unreachable!("line breaks cannot be split"),
        }
    }
}

/// Ensure a run boundary exists at `offset` within a sibling list.
///
/// If a run straddles the offset it is replaced in place by its two halves.
pub(crate) fn split_runs_at(runs: &mut Vec<Run>, offset: usize) {
    let mut start = 0;
    for index in 0..runs.len() {
        let len = runs[index].char_len();
        if offset > start && offset < start + len {
            let run = runs.remove(index);
            let (left, right) = run.split_at(offset - start);
            runs.insert(index, right);
            runs.insert(index, left);
            return;
        }
        if start + len >= offset {
            return;
        }
        start += len;
    }
}

/// Index of the first run starting at or after `offset`
///
/// Assumes a boundary exists at `offset` (see [`split_runs_at`]).
pub(crate) fn boundary_index(runs: &[Run], offset: usize) -> usize {
    let mut start = 0;
    for (index, run) in runs.iter().enumerate() {
        if start >= offset {
            return index;
        }
        start += run.char_len();
    }
    runs.len()
}
