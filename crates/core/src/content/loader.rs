use serde_json::Value;
use thiserror::Error;
use vitrine_protocol::SharedStr;

use crate::content::model::{HighlightEntry, ShowcaseContent, SiteContent};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content config has no showCase section")]
    MissingShowcase,
}

/// Parse the static site configuration.
///
/// Only structural failures are errors (not JSON, no `showCase` section).
/// Individual highlight entries are decoded leniently: an entry that is
/// missing fields or has the wrong shape is dropped with a debug log, and
/// the rest of the showcase still loads.
pub fn parse_site_content(data: &[u8]) -> Result<SiteContent, ContentError> {
    let value: Value = serde_json::from_slice(data)?;
    let section = value.get("showCase").ok_or(ContentError::MissingShowcase)?;

    let title: SharedStr = section
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .into();

    let highlights = match section.get("highlights").and_then(Value::as_array) {
        Some(raw) => decode_highlights(raw),
        None => Vec::new(),
    };

    tracing::debug!(
        highlights = highlights.len(),
        "loaded showcase content"
    );

    Ok(SiteContent {
        show_case: ShowcaseContent { title, highlights },
    })
}

fn decode_highlights(raw: &[Value]) -> Vec<HighlightEntry> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| {
            match serde_json::from_value::<HighlightEntry>(value.clone()) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!(index, %err, "skipping malformed highlight entry");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "showCase": {
            "title": "Built for <em>makers</em>",
            "highlights": [
                {
                    "url": "https://example.com/one",
                    "imageSource": "/images/one.png",
                    "title": "One",
                    "description": "First highlight"
                },
                {
                    "url": "https://example.com/two",
                    "imageSource": "/images/two.png",
                    "title": "Two",
                    "description": "Second highlight"
                }
            ]
        }
    }"#;

    #[test]
    fn parses_title_and_highlights_in_order() {
        let content = parse_site_content(CONFIG.as_bytes()).expect("parse");
        assert_eq!(content.show_case.title, "Built for <em>makers</em>");
        let titles: Vec<_> = content
            .show_case
            .highlights
            .iter()
            .map(|h| h.title.as_str())
            .collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn malformed_entries_are_dropped_not_fatal() {
        let config = r#"{
            "showCase": {
                "title": "t",
                "highlights": [
                    { "url": "u", "imageSource": "/a.png", "title": "ok", "description": "d" },
                    { "url": "u", "title": "missing image" },
                    "not even an object",
                    { "url": "u", "imageSource": "/b.png", "title": "also ok", "description": "d" }
                ]
            }
        }"#;
        let content = parse_site_content(config.as_bytes()).expect("parse");
        let titles: Vec<_> = content
            .show_case
            .highlights
            .iter()
            .map(|h| h.title.as_str())
            .collect();
        assert_eq!(titles, vec!["ok", "also ok"]);
    }

    #[test]
    fn missing_showcase_section_is_an_error() {
        let err = parse_site_content(br#"{ "hero": {} }"#).expect_err("should fail");
        assert!(matches!(err, ContentError::MissingShowcase));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = parse_site_content(b"not json").expect_err("should fail");
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn empty_highlights_is_fine() {
        let content =
            parse_site_content(br#"{ "showCase": { "title": "t" } }"#).expect("parse");
        assert!(content.show_case.highlights.is_empty());
    }
}
