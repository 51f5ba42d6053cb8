use log::error;
use serde::Deserialize;

const CONTENT_JSON: &str = include_str!("content.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Card {
    pub title: String,
    pub blurb: String,
}

/// Copy for the services grid, the "why us" grid and the contact promises.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SiteContent {
    pub services: Vec<Card>,
    pub reasons: Vec<Card>,
    pub promises: Vec<String>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The embedded copy. Falls back to empty grids if it doesn't parse.
    pub fn load() -> Self {
        match Self::parse(CONTENT_JSON) {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to parse site content: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::parse(CONTENT_JSON).expect("embedded content");
        assert_eq!(content.services.len(), 5);
        assert_eq!(content.reasons.len(), 4);
        assert_eq!(content.promises.len(), 3);
        assert_eq!(content.services[0].title, "Business Systems & Operational Analysis");
    }

    #[test]
    fn broken_content_is_an_error() {
        assert!(SiteContent::parse(r#"{"services": ["#).is_err());
        assert!(SiteContent::parse(r#"{"services": []}"#).is_err());
    }
}
