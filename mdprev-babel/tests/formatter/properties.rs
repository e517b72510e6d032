use mdprev_babel::formatter::highlight::Highlighter;
use mdprev_babel::formatter::split_sentences;
use mdprev_babel::{format_list, format_paragraph, render, HighlightMode, RawInput};
use proptest::prelude::*;

fn any_form() -> impl Strategy<Value = RawInput> {
    (".{0,20}", ".{0,20}", ".{0,60}", ".{0,20}", ".{0,40}").prop_map(
        |(title, tagline, paragraph, highlight, items)| RawInput {
            title,
            tagline,
            paragraph,
            highlight,
            items,
        },
    )
}

proptest! {
    #[test]
    fn render_is_pure(form in any_form()) {
        prop_assert_eq!(render(&form), render(&form));
    }

    #[test]
    fn paragraph_has_one_bullet_per_sentence(text in ".{0,80}") {
        let formatted = format_paragraph(&text, "");
        let sentences = split_sentences(&text);
        if sentences.is_empty() {
            prop_assert_eq!(formatted, "");
        } else {
            let expected: Vec<String> = sentences.iter().map(|s| format!("- {s}")).collect();
            prop_assert_eq!(formatted, expected.join("\n"));
        }
    }

    #[test]
    fn highlighting_never_changes_the_plain_text(
        text in "[a-z ]{0,40}",
        words in prop::collection::vec("[a-z]{1,4}", 1..4),
    ) {
        let csv = words.join(",");
        for mode in [HighlightMode::Word, HighlightMode::Substring] {
            let highlighted = Highlighter::new(&csv, mode).apply(&text);
            prop_assert_eq!(highlighted.replace("**", ""), text.clone());
        }
    }

    #[test]
    fn highlighting_is_idempotent(
        text in "[a-z ]{0,40}",
        words in prop::collection::vec("[a-z]{1,4}", 1..4),
    ) {
        let csv = words.join(",");
        for mode in [HighlightMode::Word, HighlightMode::Substring] {
            let highlighter = Highlighter::new(&csv, mode);
            let once = highlighter.apply(&text);
            prop_assert_eq!(highlighter.apply(&once), once.clone());
            prop_assert!(!once.contains("****"), "{:?} in {:?}", once, mode);
        }
    }

    #[test]
    fn list_has_one_numbered_line_per_item(items in prop::collection::vec("[^\n]{1,12}", 0..8)) {
        let formatted = format_list(&items);
        if items.is_empty() {
            prop_assert_eq!(formatted, "");
        } else {
            let lines: Vec<&str> = formatted.split('\n').collect();
            prop_assert_eq!(lines.len(), items.len());
            for (index, (line, item)) in lines.iter().zip(&items).enumerate() {
                prop_assert_eq!(*line, format!("{}. *{}*", index + 1, item));
            }
        }
    }
}
