//! Advertisement records displayed by the results view.

use serde::{Deserialize, Serialize};

/// A single classified-ad listing returned by a search.
///
/// Advertisements are created by the search subsystem, handed to the view
/// wholesale, and replaced wholesale on the next search. The view never
/// mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    /// Listing title.
    pub title: String,

    /// Longer description shown in the detail pane.
    #[serde(default)]
    pub description: String,

    /// Destination URL opened in the system browser.
    pub url: String,

    /// Ordered image references (local paths or URLs).
    #[serde(default)]
    pub images: Vec<String>,
}

impl Advertisement {
    /// Create a new advertisement with the required fields.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            url: url.into(),
            images: Vec::new(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an ordered image sequence.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Number of images in the sequence.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Get the image reference at `index`, if in bounds.
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_images() {
        let ad = Advertisement::new("Bike", "https://ads.example/1");
        assert_eq!(ad.title, "Bike");
        assert_eq!(ad.url, "https://ads.example/1");
        assert!(ad.description.is_empty());
        assert_eq!(ad.image_count(), 0);
        assert!(ad.image(0).is_none());
    }

    #[test]
    fn test_builders() {
        let ad = Advertisement::new("Sofa", "https://ads.example/2")
            .with_description("Three seats, good condition")
            .with_images(vec!["a.png".into(), "b.png".into()]);

        assert_eq!(ad.description, "Three seats, good condition");
        assert_eq!(ad.image_count(), 2);
        assert_eq!(ad.image(1), Some("b.png"));
        assert!(ad.image(2).is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let ad = Advertisement::new("Desk", "https://ads.example/3")
            .with_images(vec!["x.jpg".into()]);

        let json = serde_json::to_string(&ad).unwrap();
        let back: Advertisement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ad);
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        // Backends may omit description and images entirely.
        let ad: Advertisement =
            serde_json::from_str(r#"{"title":"Lamp","url":"https://ads.example/4"}"#).unwrap();
        assert!(ad.description.is_empty());
        assert!(ad.images.is_empty());
    }
}
