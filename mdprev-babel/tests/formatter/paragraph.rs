use mdprev_babel::{format_list, format_paragraph, format_title_tagline, parse_items};

#[test]
fn test_tagline_with_empty_text_is_markers_only() {
    for title in ["", "Space", "  padded  "] {
        let (heading, tagline) = format_title_tagline(title, "");
        assert_eq!(heading, format!("## {title}"));
        assert_eq!(tagline, "###### **");
    }
}

#[test]
fn test_sentences_are_bulleted() {
    assert_eq!(format_paragraph("A. B. C.", ""), "- A\n- B\n- C");
}

#[test]
fn test_highlighted_sentences() {
    assert_eq!(
        format_paragraph("Mars is red. Venus is hot.", "Mars,hot"),
        "- **Mars** is red\n- Venus is **hot**"
    );
}

#[test]
fn test_empty_paragraph() {
    assert_eq!(format_paragraph("", ""), "");
    assert_eq!(format_paragraph("", "anything, at all"), "");
}

#[test]
fn test_newlines_inside_a_sentence_are_kept() {
    assert_eq!(format_paragraph("one\ntwo. three", ""), "- one\ntwo\n- three");
}

#[test]
fn test_decimal_points_split_sentences() {
    assert_eq!(format_paragraph("Pi is 3.14", ""), "- Pi is 3\n- 14");
}

#[test]
fn test_list_of_missions() {
    assert_eq!(format_list(&["Apollo", "Artemis"]), "1. *Apollo*\n2. *Artemis*");
}

#[test]
fn test_empty_list() {
    assert_eq!(format_list::<&str>(&[]), "");
}

#[test]
fn test_list_from_comma_separated_field() {
    let items = parse_items("Apollo,  Gemini ,,Mercury, ");
    assert_eq!(format_list(&items), "1. *Apollo*\n2. *Gemini*\n3. *Mercury*");
}
