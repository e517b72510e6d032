//! Shared fixtures for the integration tests

#![allow(dead_code)]

use mdprev_babel::RawInput;

/// The space-missions form the tool was first written for.
pub fn missions_form() -> RawInput {
    RawInput {
        title: "My Favourite Space Missions".to_string(),
        tagline: "Humanity's boldest trips".to_string(),
        paragraph: "Apollo 11 landed on the Moon in 1969. Voyager 1 left the solar system. \
                    Curiosity still drives on Mars."
            .to_string(),
        highlight: "Moon, Mars, Voyager 1".to_string(),
        items: "Apollo 11, Voyager 1, Curiosity".to_string(),
    }
}

pub fn form(title: &str, tagline: &str, paragraph: &str, highlight: &str, items: &str) -> RawInput {
    RawInput {
        title: title.to_string(),
        tagline: tagline.to_string(),
        paragraph: paragraph.to_string(),
        highlight: highlight.to_string(),
        items: items.to_string(),
    }
}
