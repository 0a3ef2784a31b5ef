//! ANSI escape code processing
//!
//! This module converts between the styled run tree and flat ANSI SGR
//! text. The serializer walks a [`Document`] depth-first, opening each
//! styled run with `ESC[<code>m` and closing it with `ESC[0m`; the parser
//! performs the inverse, treating every reset as the close of the innermost
//! open run.

use crate::error::{Error, Result};
use crate::models::document::push_plain_lines;
use crate::models::{Document, Run, StyleCode};
use regex::Regex;
use std::fmt::Write;

/// Escape character that introduces every SGR sequence
pub const ESC: char = '\x1b';

/// Sequence closing a styled run
pub const RESET: &str = "\x1b[0m";

/// Opening line of an exported code block
pub const EXPORT_FENCE_OPEN: &str = "```ansi\n";

/// Closing line of an exported code block
pub const EXPORT_FENCE_CLOSE: &str = "\n```";

/// Serialize a document into ANSI-escaped text
pub fn serialize(document: &Document) -> String {
    AnsiSerializer::new().serialize(document)
}

/// Serialize a document wrapped in an `ansi` fenced code block
pub fn export(document: &Document) -> String {
    AnsiSerializer::new().export(document)
}

/// Depth-first run tree to ANSI text writer
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiSerializer;

impl AnsiSerializer {
    /// Create a new serializer
    pub fn new() -> Self {
        Self
    }

    /// Serialize the whole document
    pub fn serialize(&self, document: &Document) -> String {
        let mut out = String::with_capacity(document.char_len() + document.styled_count() * 9);
        for run in document.children() {
            self.write_run(&mut out, run);
        }
        out
    }

    /// Serialize the document as a Discord-ready code block
    pub fn export(&self, document: &Document) -> String {
        format!(
            "{}{}{}",
            EXPORT_FENCE_OPEN,
            self.serialize(document),
            EXPORT_FENCE_CLOSE
        )
    }

    fn write_run(&self, out: &mut String, run: &Run) {
        match run {
            Run::Text(text) => out.push_str(text),
            Run::LineBreak => out.push('\n'),
            Run::Styled { code, children } => {
                // Writing to a String cannot fail
                let _ = write!(out, "{}[{}m", ESC, code);
                for child in children {
                    self.write_run(out, child);
                }
                out.push_str(RESET);
            }
        }
    }
}

/// Remove a surrounding ```` ```ansi ```` fence, if present
pub fn strip_export_fence(input: &str) -> &str {
    let Some(body) = input.strip_prefix(EXPORT_FENCE_OPEN) else {
        return input;
    };
    body.strip_suffix(EXPORT_FENCE_CLOSE)
        .or_else(|| body.strip_suffix("\n```\n"))
        .unwrap_or(body)
}

/// ANSI escape sequence parser producing a styled run tree
#[derive(Debug, Clone)]
pub struct AnsiParser {
    /// Regex for SGR escape sequences
    escape_regex: Regex,
}

/// A styled run under construction
struct OpenRun {
    code: StyleCode,
    children: Vec<Run>,
}

impl AnsiParser {
    /// Create a new ANSI parser
    pub fn new() -> Result<Self> {
        let escape_regex = Regex::new(r"\x1b\[([0-9;]*)m")?;
        Ok(Self { escape_regex })
    }

    /// Parse ANSI text (optionally fenced) into a document.
    ///
    /// Escape characters that do not start a recognized SGR sequence are
    /// dropped, as are carriage returns.
    pub fn parse_document(&self, input: &str) -> Result<Document> {
        let text = strip_export_fence(input);
        let mut root: Vec<Run> = Vec::new();
        let mut stack: Vec<OpenRun> = Vec::new();
        let mut last_end = 0;

        for caps in self.escape_regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };

            push_plain_lines(
                current_children(&mut root, &mut stack),
                &text[last_end..whole.start()],
            );
            last_end = whole.end();

            let params = caps.get(1).map_or("", |m| m.as_str());
            for code in parse_params(params, whole.as_str(), whole.start())? {
                if code == 0 {
                    close_innermost(&mut root, &mut stack);
                } else {
                    stack.push(OpenRun {
                        code: StyleCode(code),
                        children: Vec::new(),
                    });
                }
            }
        }

        push_plain_lines(current_children(&mut root, &mut stack), &text[last_end..]);

        if !stack.is_empty() {
            debug!("Closing {} unterminated style run(s)", stack.len());
        }
        while !stack.is_empty() {
            close_innermost(&mut root, &mut stack);
        }

        Document::from_runs(root)
    }
}

/// Split an SGR parameter list into codes; an empty list means reset
fn parse_params(params: &str, sequence: &str, position: usize) -> Result<Vec<u8>> {
    if params.is_empty() {
        return Ok(vec![0]);
    }
    params
        .split(';')
        .map(|param| {
            if param.is_empty() {
                return Ok(0);
            }
            param.parse::<u8>().map_err(|_| Error::InvalidEscapeSequence {
                sequence: sequence.escape_debug().to_string(),
                position,
            })
        })
        .collect()
}

fn current_children<'a>(root: &'a mut Vec<Run>, stack: &'a mut [OpenRun]) -> &'a mut Vec<Run> {
    match stack.last_mut() {
        Some(open) => &mut open.children,
        None => root,
    }
}

/// Close the innermost open run, dropping it if it never received content
fn close_innermost(root: &mut Vec<Run>, stack: &mut Vec<OpenRun>) {
    let Some(open) = stack.pop() else {
        // Stray reset with nothing open
        return;
    };
    if open.children.is_empty() {
        return;
    }
    current_children(root, stack).push(Run::Styled {
        code: open.code,
        children: open.children,
    });
}
