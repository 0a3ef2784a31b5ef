//! Unit tests for the ANSI serializer

use discolor::ansi::{export, serialize, AnsiSerializer};
use discolor::{Document, Run, StyleCode};

#[cfg(test)]
mod serializer_tests {
    use super::*;

    #[test]
    fn test_text_passes_through_unescaped() {
        let doc = Document::from_plain_text("`code` *stars* <tags> & \\slashes");
        assert_eq!(serialize(&doc), "`code` *stars* <tags> & \\slashes");
    }

    #[test]
    fn test_line_breaks_become_newlines() {
        let doc = Document::from_runs(vec![
            Run::text("a").unwrap(),
            Run::LineBreak,
            Run::LineBreak,
            Run::text("b").unwrap(),
        ])
        .unwrap();
        assert_eq!(serialize(&doc), "a\n\nb");
    }

    #[test]
    fn test_each_styled_run_opens_and_closes() {
        let doc = Document::from_runs(vec![
            Run::styled(1, vec![Run::text("bold").unwrap()]).unwrap(),
            Run::styled(
                40,
                vec![
                    Run::text("x").unwrap(),
                    Run::styled(36, vec![Run::text("y").unwrap()]).unwrap(),
                ],
            )
            .unwrap(),
        ])
        .unwrap();
        assert_eq!(
            serialize(&doc),
            "\x1b[1mbold\x1b[0m\x1b[40mx\x1b[36my\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn test_welcome_serialization() {
        let expected = concat!(
            "Welcome to \x1b[33mDiscolor\x1b[0m's ",
            "\x1b[45m\x1b[37mDiscord\x1b[0m\x1b[0m ",
            "\x1b[31mC\x1b[0m\x1b[32mo\x1b[0m\x1b[33ml\x1b[0m\x1b[34mo\x1b[0m",
            "\x1b[35mr\x1b[0m\x1b[36me\x1b[0m\x1b[37md\x1b[0m",
            " Text Generator!"
        );
        assert_eq!(serialize(&Document::welcome()), expected);
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let doc = Document::welcome();
        let serializer = AnsiSerializer::new();
        assert_eq!(serializer.serialize(&doc), serializer.serialize(&doc));
    }

    #[test]
    fn test_export_is_bit_exact() {
        let doc = Document::from_runs(vec![Run::styled(
            StyleCode(32),
            vec![Run::text("ok").unwrap()],
        )
        .unwrap()])
        .unwrap();
        assert_eq!(export(&doc), "```ansi\n\x1b[32mok\x1b[0m\n```");
    }

    #[test]
    fn test_export_empty_document() {
        assert_eq!(export(&Document::new()), "```ansi\n\n```");
    }
}
