use mdprev_babel::formatter::highlight::Highlighter;
use mdprev_babel::{format_paragraph, format_paragraph_with_rules, HighlightMode, RenderRules};

fn substring_rules() -> RenderRules {
    RenderRules {
        highlight_mode: HighlightMode::Substring,
        ..RenderRules::default()
    }
}

#[test]
fn test_whole_words_by_default() {
    assert_eq!(
        format_paragraph("The Mars rover crossed Marsh Plain.", "Mars"),
        "- The **Mars** rover crossed Marsh Plain"
    );
}

#[test]
fn test_substring_mode_bolds_inside_words() {
    assert_eq!(
        format_paragraph_with_rules(
            "The Mars rover crossed Marsh Plain.",
            "Mars",
            &substring_rules()
        ),
        "- The **Mars** rover crossed **Mars**h Plain"
    );
}

#[test]
fn test_duplicate_words_do_not_double_wrap() {
    assert_eq!(
        format_paragraph("bold word here.", "bold, bold"),
        "- **bold** word here"
    );
    assert_eq!(
        format_paragraph_with_rules("bold word here.", "bold,bold", &substring_rules()),
        "- **bold** word here"
    );
}

#[test]
fn test_reapplying_highlight_is_stable() {
    for mode in [HighlightMode::Word, HighlightMode::Substring] {
        let highlighter = Highlighter::new("bold", mode);
        let once = highlighter.apply("bold word here");
        assert_eq!(once, "**bold** word here");
        assert_eq!(highlighter.apply(&once), once, "mode {mode:?}");
    }
}

#[test]
fn test_paragraph_of_own_output_does_not_double_wrap() {
    let first = format_paragraph("bold word here.", "bold");
    let second = format_paragraph(&first, "bold");
    assert!(!second.contains("****"));
    assert!(second.contains("**bold** word here"));
}

#[test]
fn test_later_word_does_not_rewrap_earlier_word() {
    assert_eq!(
        format_paragraph_with_rules("Marsupial.", "Marsupial, Mars", &substring_rules()),
        "- **Marsupial**"
    );
}

#[test]
fn test_trailing_comma_in_highlight_list() {
    assert_eq!(format_paragraph("Mars is red.", "Mars,"), "- **Mars** is red");
}

#[test]
fn test_phrases_with_spaces() {
    assert_eq!(
        format_paragraph("The solar system is big.", "solar system"),
        "- The **solar system** is big"
    );
}

#[test]
fn test_touching_matches_merge_into_one_run() {
    assert_eq!(
        format_paragraph_with_rules("aa and a.", "a", &substring_rules()),
        "- **aa** **a**nd **a**"
    );
    assert_eq!(
        format_paragraph("Say C++C++ twice.", "C++"),
        "- Say **C++C++** twice"
    );
    let once = format_paragraph_with_rules("MarsMars.", "Mars", &substring_rules());
    assert_eq!(once, "- **MarsMars**");
    assert!(!once.contains("****"));
}

#[test]
fn test_huge_highlight_list() {
    let mut words: Vec<String> = (0..30_000).map(|n| format!("word{n}")).collect();
    words.push("Mars".to_string());
    assert_eq!(
        format_paragraph("Mars is red. Venus is not.", &words.join(", ")),
        "- **Mars** is red\n- Venus is not"
    );
}
