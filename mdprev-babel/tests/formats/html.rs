use crate::common::missions_form;
use mdprev_babel::{render, FormatRegistry};
use std::collections::HashMap;

#[test]
fn test_registry_renders_html() {
    let registry = FormatRegistry::default();
    let html = registry.serialize(&render(&missions_form()), "html").unwrap();

    assert!(html.contains("<h2>My Favourite Space Missions</h2>"));
    assert!(html.contains("<h6><em>Humanity’s boldest trips</em></h6>")
        || html.contains("<h6><em>Humanity's boldest trips</em></h6>"));
    assert!(html.contains("<strong>Voyager 1</strong>"));
    assert!(html.contains("<li><em>Curiosity</em></li>"));
}

#[test]
fn test_registry_passes_options_to_html() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("standalone".to_string(), "yes".to_string());
    let html = registry
        .serialize_with_options(&render(&missions_form()), "html", &options)
        .unwrap();
    assert!(html.contains("<title>My Favourite Space Missions</title>"));
}

#[test]
fn test_markdown_rejects_options() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("standalone".to_string(), "true".to_string());
    assert!(registry
        .serialize_with_options(&render(&missions_form()), "markdown", &options)
        .is_err());
}
