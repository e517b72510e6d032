use crate::common::{form, missions_form};
use insta::assert_snapshot;
use mdprev_babel::{render, render_with_rules, Fragment, HighlightMode, RenderRules};

#[test]
fn test_missions_form_snapshot() {
    let output = render(&missions_form());
    assert_snapshot!(output.to_markdown(), @r"
    ## My Favourite Space Missions

    ###### *Humanity's boldest trips*

    - Apollo 11 landed on the **Moon** in 1969
    - **Voyager 1** left the solar system
    - Curiosity still drives on **Mars**

    1. *Apollo 11*
    2. *Voyager 1*
    3. *Curiosity*
    ");
}

#[test]
fn test_custom_rules_snapshot() {
    let rules = RenderRules {
        title_level: 1,
        tagline_level: 4,
        bullet_marker: '*',
        highlight_mode: HighlightMode::Substring,
    };
    let output = render_with_rules(&form("Moons", "small worlds", "Io. Europa.", "o", ""), &rules);
    assert_snapshot!(output.to_markdown(), @r"
    # Moons

    #### *small worlds*

    * I**o**
    * Eur**o**pa
    ");
}

#[test]
fn test_only_items() {
    let output = render(&form("", "", "", "", "Hubble"));
    assert_eq!(output.fragments(), [Fragment::List("1. *Hubble*".to_string())]);
}

#[test]
fn test_only_paragraph() {
    let output = render(&form("", "", "Quiet. Dark.", "", ""));
    assert_eq!(output.len(), 1);
    assert_eq!(output.fragments()[0].kind(), "paragraph");
}

#[test]
fn test_title_without_tagline_keeps_both_fragments() {
    let output = render(&form("Comets", "", "", "", ""));
    let markdown: Vec<&str> = output.fragments().iter().map(Fragment::markdown).collect();
    assert_eq!(markdown, ["## Comets", "###### **"]);
}

#[test]
fn test_nothing_to_render() {
    assert!(render(&form("", "", "", "", " , ,")).is_empty());
}
