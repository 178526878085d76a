//! Search-model descriptors for the model selector.

use serde::{Deserialize, Serialize};

/// A selectable search model.
///
/// The search subsystem decides what models exist (which site or category a
/// search runs against); the view only renders the choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Stable identifier handed back when the user confirms a choice.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Optional one-line description shown next to the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ModelInfo {
    /// Create a new model descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let model = ModelInfo::new("kijiji", "Kijiji");
        assert_eq!(model.id, "kijiji");
        assert_eq!(model.name, "Kijiji");
        assert!(model.description.is_none());
    }

    #[test]
    fn test_with_description() {
        let model = ModelInfo::new("cl", "Craigslist").with_description("North America");
        assert_eq!(model.description.as_deref(), Some("North America"));
    }
}
