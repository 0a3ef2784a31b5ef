//! Property-based tests for ANSI serialization and parsing
//!
//! These tests generate random styled documents and verify that the
//! serializer is deterministic and that the parser reads its output back.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use discolor::{ansi, AnsiParser, Document, Selection, StyleCode, StyleEditor};
use proptest::prelude::*;
use test_utils::count_escapes;

fn styled_document() -> impl Strategy<Value = Document> {
    (
        "[a-zA-Z0-9 \n]{1,50}",
        prop::collection::vec((0usize..60, 0usize..60, 30u8..48u8), 0..8),
    )
        .prop_map(|(text, edits)| {
            let mut document = Document::from_plain_text(&text);
            let editor = StyleEditor::new();
            for (anchor, head, code) in edits {
                editor.apply(&mut document, Selection::new(anchor, head), StyleCode(code));
            }
            document
        })
}

/// Input mixing text, complete SGR sequences and broken escape fragments
fn fragmented_ansi() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z ]{0,4}",
            Just("\x1b[".to_string()),
            Just("\x1b".to_string()),
            Just("31m".to_string()),
            Just("\x1b[31m".to_string()),
            Just("\x1b[1;44m".to_string()),
            Just("\x1b[0m".to_string()),
            Just("\x1b[m".to_string()),
            Just("\r".to_string()),
            Just("\n".to_string()),
        ],
        0..24,
    )
    .prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn test_parser_doesnt_panic_on_random_input(s in "\\PC*") {
        let parser = AnsiParser::new().unwrap();
        let _ = parser.parse_document(&s);
    }

    #[test]
    fn test_serialize_is_deterministic(document in styled_document()) {
        let first = ansi::serialize(&document);
        let second = ansi::serialize(&document.clone());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_parse_reads_serialized_output(document in styled_document()) {
        let parser = AnsiParser::new().unwrap();
        let serialized = ansi::serialize(&document);

        let parsed = parser.parse_document(&serialized).unwrap();
        prop_assert_eq!(parsed.flatten_text(), document.flatten_text());
        prop_assert_eq!(parsed.styled_count(), document.styled_count());
        prop_assert_eq!(ansi::serialize(&parsed), serialized);
    }

    #[test]
    fn test_export_wraps_serialized(document in styled_document()) {
        let exported = ansi::export(&document);
        let serialized = ansi::serialize(&document);
        prop_assert_eq!(ansi::strip_export_fence(&exported), serialized.as_str());
        prop_assert_eq!(exported, format!("```ansi\n{}\n```", serialized));
    }

    #[test]
    fn test_plain_text_parses_unstyled(s in "[a-zA-Z0-9 \n]{0,100}") {
        let parser = AnsiParser::new().unwrap();
        let parsed = parser.parse_document(&s).unwrap();
        prop_assert!(parsed.is_plain());
        prop_assert_eq!(parsed.flatten_text(), s);
    }

    #[test]
    fn test_imported_fragments_stay_balanced(input in fragmented_ansi()) {
        let parser = AnsiParser::new().unwrap();
        let document = parser.parse_document(&input).unwrap();
        let serialized = ansi::serialize(&document);

        let counts = count_escapes(&serialized);
        prop_assert!(counts.is_ok(), "{:?} from {:?}", counts, input);
        prop_assert_eq!(counts.unwrap().opens, document.styled_count());

        let reparsed = parser.parse_document(&serialized).unwrap();
        prop_assert_eq!(reparsed.char_len(), document.char_len());
        prop_assert_eq!(ansi::serialize(&reparsed), serialized.clone());

        let mut plain = document.clone();
        StyleEditor::new().reset(&mut plain);
        let plain_serialized = ansi::serialize(&plain);
        prop_assert!(!plain_serialized.contains('\x1b'));
        prop_assert_eq!(plain_serialized, document.flatten_text());
    }
}
