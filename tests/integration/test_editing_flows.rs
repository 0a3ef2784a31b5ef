//! Integration Tests for Editing Flows
//!
//! These tests drive an editing session the way the editor window does:
//! selections from the host, style buttons, reset and loading text.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use discolor::config::EditorConfig;
use discolor::palette::{self, StyleCategory};
use discolor::{Document, EditorSession, Selection, SelectionSource, StyleCode};
use test_utils::{count_escapes, overlapping_document};

/// Selection reported by a fake presentation layer
struct HostSelection(Option<(usize, usize)>);

impl SelectionSource for HostSelection {
    fn selection_range(&self) -> Option<(usize, usize)> {
        self.0
    }
}

#[test]
fn test_overlapping_styles_make_three_groups() {
    let serialized = discolor::ansi::serialize(&overlapping_document());

    let left = "\x1b[31mabc\x1b[0m";
    let overlap = "\x1b[42m\x1b[31mdef\x1b[0mghi\x1b[0m";
    assert_eq!(serialized, format!("{}{}j", left, overlap));

    let left_at = serialized.find(left).unwrap();
    let overlap_at = serialized.find(overlap).unwrap();
    assert!(left_at + left.len() <= overlap_at);
}

#[test]
fn test_every_palette_button_applies() {
    let mut session = EditorSession::with_document(Document::from_plain_text("x")).unwrap();
    let host = HostSelection(Some((0, 1)));

    for category in [
        StyleCategory::Modifier,
        StyleCategory::Foreground,
        StyleCategory::Background,
    ] {
        for entry in palette::category(category) {
            assert!(session.apply_style_from(&host, entry.code));
        }
    }

    let counts = count_escapes(&session.serialize()).unwrap();
    assert_eq!(counts.opens, palette::PALETTE.len());
    assert_eq!(counts.closes, palette::PALETTE.len());
    assert_eq!(counts.max_depth, palette::PALETTE.len());
    assert_eq!(session.document().flatten_text(), "x");
}

#[test]
fn test_no_host_selection_does_nothing() {
    let mut session = EditorSession::new(&EditorConfig::default()).unwrap();
    let before = session.serialize();
    assert!(!session.apply_style_from(&HostSelection(None), StyleCode(31)));
    assert!(!session.apply_style_from(&HostSelection(Some((4, 4))), StyleCode(31)));
    assert_eq!(session.serialize(), before);
}

#[test]
fn test_backwards_drag_selection() {
    let mut session = EditorSession::with_document(Document::from_plain_text("drag me")).unwrap();
    session.apply_style_from(&HostSelection(Some((7, 5))), StyleCode(4));
    assert_eq!(session.serialize(), "drag \x1b[4mme\x1b[0m");
}

#[test]
fn test_style_then_reset_then_restyle() {
    let mut session = EditorSession::new(&EditorConfig::default()).unwrap();
    let text = session.document().flatten_text();

    session.apply_style(Selection::new(0, 7), StyleCode(1));
    session.reset();
    assert_eq!(session.serialize(), text);

    session.apply_style(Selection::new(0, 7), StyleCode(32));
    assert_eq!(
        session.serialize(),
        format!("\x1b[32mWelcome\x1b[0m{}", &text[7..])
    );
}

#[test]
fn test_load_text_then_edit() {
    let mut session = EditorSession::new(&EditorConfig::default()).unwrap();
    session.load_text("first line\nsecond line").unwrap();
    session.apply_style(Selection::new(6, 17), StyleCode(46));
    assert_eq!(
        session.serialize(),
        "first \x1b[46mline\nsecond\x1b[0m line"
    );
}

#[test]
fn test_init_falls_back_to_defaults() {
    let (config, session) = discolor::init(None).unwrap();
    assert!(config.ui.font_size > 0);
    assert_eq!(session.copy_count(), 0);
}

#[test]
fn test_init_with_explicit_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("discolor.toml");
    std::fs::write(
        &path,
        "[ui]\nfont_size = 20\n\n[editor]\ninitial_text = \"\\u001b[35mhey\\u001b[0m\"\n",
    )
    .unwrap();

    let (config, session) = discolor::init(Some(&path)).unwrap();
    assert_eq!(config.ui.font_size, 20);
    assert_eq!(session.serialize(), "\x1b[35mhey\x1b[0m");
}

#[test]
fn test_init_ignores_broken_explicit_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("discolor.toml");
    std::fs::write(&path, "ui = [not valid").unwrap();

    let (config, _session) = discolor::init(Some(&path)).unwrap();
    assert!(config.ui.font_size > 0);
}
