//! Unit tests for importing ANSI text

use discolor::ansi::{serialize, AnsiParser};
use discolor::{Error, Run, StyleCode};

#[cfg(test)]
mod ansi_import_tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let parser = AnsiParser::new().unwrap();
        let doc = parser.parse_document("Hello, World!").unwrap();
        assert!(doc.is_plain());
        assert_eq!(doc.flatten_text(), "Hello, World!");
    }

    #[test]
    fn test_parse_nested_runs() {
        let parser = AnsiParser::new().unwrap();
        let doc = parser
            .parse_document("a\x1b[45mb\x1b[37mc\x1b[0md\x1b[0me")
            .unwrap();
        assert_eq!(
            doc.children(),
            &[
                Run::Text("a".to_string()),
                Run::Styled {
                    code: StyleCode(45),
                    children: vec![
                        Run::Text("b".to_string()),
                        Run::Styled {
                            code: StyleCode(37),
                            children: vec![Run::Text("c".to_string())],
                        },
                        Run::Text("d".to_string()),
                    ],
                },
                Run::Text("e".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_newlines_and_carriage_returns() {
        let parser = AnsiParser::new().unwrap();
        let doc = parser.parse_document("\x1b[31mone\r\ntwo\x1b[0m").unwrap();
        assert_eq!(serialize(&doc), "\x1b[31mone\ntwo\x1b[0m");
    }

    #[test]
    fn test_parse_fenced_export() {
        let parser = AnsiParser::new().unwrap();
        let doc = parser
            .parse_document("```ansi\n\x1b[1mhi\x1b[0m\n```")
            .unwrap();
        assert_eq!(serialize(&doc), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn test_parse_bare_reset_sequence() {
        let parser = AnsiParser::new().unwrap();
        let doc = parser.parse_document("\x1b[32mgo\x1b[m!").unwrap();
        assert_eq!(serialize(&doc), "\x1b[32mgo\x1b[0m!");
    }

    #[test]
    fn test_parse_invalid_parameter() {
        let parser = AnsiParser::new().unwrap();
        let err = parser.parse_document("ok \x1b[1;256mno").unwrap_err();
        assert!(matches!(err, Error::InvalidEscapeSequence { position: 3, .. }));
    }

    #[test]
    fn test_non_sgr_sequences_lose_their_escape() {
        let parser = AnsiParser::new().unwrap();
        let doc = parser.parse_document("a\x1b[2Kb").unwrap();
        assert_eq!(doc.flatten_text(), "a[2Kb");
        assert!(doc.is_plain());
    }

    #[test]
    fn test_split_escape_does_not_become_a_style() {
        let parser = AnsiParser::new().unwrap();
        let doc = parser.parse_document("\x1b[\x1b[0m31mhi").unwrap();
        assert_eq!(doc.styled_count(), 0);
        assert_eq!(serialize(&doc), "[31mhi");
        assert!(doc.children().iter().all(Run::is_well_formed));
    }
}
