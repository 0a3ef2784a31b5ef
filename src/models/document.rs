//! Document Model
//!
//! The root of the styled text tree. A document exclusively owns an ordered
//! sequence of [`Run`]s and offers the flattening and traversal primitives
//! used by the style editor, the serializer and the preview renderer.

use super::run::{clean_line, Run, StyleCode};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A piece of flattened text together with the style codes active over it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Flattened text of the piece (`\n` for line breaks)
    pub text: String,
    /// Active style codes, outermost first
    pub styles: Vec<StyleCode>,
}

/// Styled text document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Run>", into = "Vec<Run>")]
pub struct Document {
    runs: Vec<Run>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a list of runs
    ///
    /// Rejects runs that break the construction invariants (empty runs,
    /// control characters in text runs, a reset code on a styled run).
    pub fn from_runs(runs: Vec<Run>) -> Result<Self> {
        runs.iter().try_for_each(Run::validate)?;
        Ok(Self { runs })
    }

    /// Create an unstyled document: one text run per non-empty line,
    /// separated by line breaks.
    ///
    /// Carriage returns and escape characters are dropped.
    pub fn from_plain_text(text: &str) -> Self {
        let mut runs = Vec::new();
        push_plain_lines(&mut runs, text);
        Self { runs }
    }

    /// The document shown when the editor starts
    pub fn welcome() -> Self {
        let text = |s: &str| Run::Text(s.to_string());
        let styled = |code: u8, children: Vec<Run>| Run::Styled {
            code: StyleCode(code),
            children,
        };

        let mut runs = vec![
            text("Welcome to "),
            styled(33, vec![text("Discolor")]),
            text("'s "),
            styled(45, vec![styled(37, vec![text("Discord")])]),
            text(" "),
        ];
        for (letter, code) in "Colored".chars().zip(31..=37) {
            runs.push(styled(code, vec![Run::Text(letter.to_string())]));
        }
        runs.push(text(" Text Generator!"));

        Self { runs }
    }

    /// Top-level runs, in visual order
    pub fn children(&self) -> &[Run] {
        &self.runs
    }

    pub(crate) fn runs_mut(&mut self) -> &mut Vec<Run> {
        &mut self.runs
    }

    /// Concatenated text of all runs, with line breaks as `\n`
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            run.flatten_into(&mut out);
        }
        out
    }

    /// Length of the flattened text, in characters
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    /// Check if the document has no content
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of styled runs in the tree
    pub fn styled_count(&self) -> usize {
        self.runs.iter().map(Run::styled_count).sum()
    }

    /// Check if the document carries no styling at all
    pub fn is_plain(&self) -> bool {
        self.styled_count() == 0
    }

    /// Flatten the tree into text pieces tagged with their style stacks
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut stack = Vec::new();
        for run in &self.runs {
            collect_segments(run, &mut stack, &mut segments);
        }
        segments
    }
}

impl TryFrom<Vec<Run>> for Document {
    type Error = Error;

    fn try_from(runs: Vec<Run>) -> Result<Self> {
        Self::from_runs(runs)
    }
}

impl From<Document> for Vec<Run> {
    fn from(document: Document) -> Self {
        document.runs
    }
}

/// Append `text` as text runs separated by line breaks
pub(crate) fn push_plain_lines(runs: &mut Vec<Run>, text: &str) {
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            runs.push(Run::LineBreak);
        }
        let line = clean_line(line);
        if !line.is_empty() {
            runs.push(Run::Text(line));
        }
    }
}

fn collect_segments(run: &Run, stack: &mut Vec<StyleCode>, out: &mut Vec<Segment>) {
    match run {
        Run::Text(text) => out.push(Segment {
            text: text.clone(),
            styles: stack.clone(),
        }),
        Run::LineBreak => out.push(Segment {
            text: "\n".to_string(),
            styles: stack.clone(),
        }),
        Run::Styled { code, children } => {
            stack.push(*code);
            for child in children {
                collect_segments(child, stack, out);
            }
            stack.pop();
        }
    }
}
