//! Property-based tests for the style editor
//!
//! Random texts and random sequences of style applications must never
//! change the text, never produce malformed trees, and always reset back
//! to plain text.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use discolor::{ansi, Document, Selection, StyleCode, StyleEditor};
use proptest::prelude::*;
use test_utils::count_escapes;

fn code_strategy() -> impl Strategy<Value = u8> {
    prop_oneof![Just(1u8), Just(4u8), 30u8..38u8, 40u8..48u8]
}

fn edits_strategy() -> impl Strategy<Value = Vec<(usize, usize, u8)>> {
    prop::collection::vec((0usize..80, 0usize..80, code_strategy()), 0..12)
}

proptest! {
    #[test]
    fn test_apply_preserves_text(text in "[a-zé \n]{0,60}", edits in edits_strategy()) {
        let mut document = Document::from_plain_text(&text);
        let editor = StyleEditor::new();

        for (anchor, head, code) in edits {
            editor.apply(&mut document, Selection::new(anchor, head), StyleCode(code));
            prop_assert_eq!(document.flatten_text(), text.clone());
            prop_assert!(document.children().iter().all(|run| run.is_well_formed()));
        }
    }

    #[test]
    fn test_escapes_stay_balanced(text in "[a-z \n]{1,60}", edits in edits_strategy()) {
        let mut document = Document::from_plain_text(&text);
        let editor = StyleEditor::new();
        for (anchor, head, code) in edits {
            editor.apply(&mut document, Selection::new(anchor, head), StyleCode(code));
        }

        let counts = count_escapes(&ansi::serialize(&document));
        prop_assert!(counts.is_ok(), "{:?}", counts);
        let counts = counts.unwrap();
        prop_assert_eq!(counts.opens, document.styled_count());
        prop_assert_eq!(counts.closes, document.styled_count());
    }

    #[test]
    fn test_reset_returns_plain_text(text in "[a-z \n]{0,60}", edits in edits_strategy()) {
        let mut document = Document::from_plain_text(&text);
        let editor = StyleEditor::new();
        for (anchor, head, code) in edits {
            editor.apply(&mut document, Selection::new(anchor, head), StyleCode(code));
        }

        editor.reset(&mut document);
        prop_assert!(document.is_plain());
        prop_assert_eq!(ansi::serialize(&document), text);
    }

    #[test]
    fn test_full_selection_wraps_everything(text in "[a-z ]{1,40}", code in code_strategy()) {
        let mut document = Document::from_plain_text(&text);
        let len = document.char_len();
        StyleEditor::new().apply(&mut document, Selection::new(0, len), StyleCode(code));

        prop_assert_eq!(
            ansi::serialize(&document),
            format!("\x1b[{}m{}\x1b[0m", code, text)
        );
    }

    #[test]
    fn test_empty_selection_is_noop(
        text in "[a-z \n]{0,40}",
        at in 0usize..50,
        code in code_strategy(),
    ) {
        let mut document = Document::from_plain_text(&text);
        let before = document.clone();
        let changed = StyleEditor::new().apply(&mut document, Selection::new(at, at), StyleCode(code));

        prop_assert!(!changed);
        prop_assert_eq!(document, before);
    }
}
