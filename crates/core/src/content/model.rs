use serde::{Deserialize, Serialize};
use vitrine_protocol::SharedStr;

/// One highlight card in the showcase grid.
///
/// `title` and `description` are pre-rendered HTML strings from the static
/// content pipeline and are carried verbatim — sanitization is the content
/// source's contract, not this crate's. Ordering is significant: the index
/// decides grid position and even/odd parity for the parallax animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightEntry {
    pub url: SharedStr,
    #[serde(rename = "imageSource")]
    pub image_source: SharedStr,
    pub title: SharedStr,
    pub description: SharedStr,
}

impl HighlightEntry {
    /// An entry with no image or no title has nothing to show — the grid
    /// skips it rather than rendering a hole.
    pub fn is_renderable(&self) -> bool {
        !self.image_source.is_empty() && !self.title.is_empty()
    }
}

/// The showcase section of the site config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseContent {
    #[serde(default)]
    pub title: SharedStr,
    #[serde(default)]
    pub highlights: Vec<HighlightEntry>,
}

/// The slice of the site configuration this crate consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(rename = "showCase")]
    pub show_case: ShowcaseContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_renderable_requires_image_and_title() {
        let mut entry = HighlightEntry {
            url: "https://example.com".into(),
            image_source: "/images/a.png".into(),
            title: "A".into(),
            description: "desc".into(),
        };
        assert!(entry.is_renderable());

        entry.image_source = "".into();
        assert!(!entry.is_renderable());

        entry.image_source = "/images/a.png".into();
        entry.title = "".into();
        assert!(!entry.is_renderable());
    }

    #[test]
    fn camel_case_image_source() {
        let json = r#"{
            "url": "https://example.com",
            "imageSource": "/images/a.png",
            "title": "A",
            "description": "d"
        }"#;
        let entry: HighlightEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entry.image_source, "/images/a.png");
    }
}
