use serde::{Deserialize, Serialize};

/// A content card the user has saved for later.
///
/// The `id` is the identity key; at most one saved entry exists per id at
/// any time. Everything else is opaque display data the store never
/// interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    /// Stable identifier, unique across the session.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Opaque reference to display media (asset name or URL).
    #[serde(default)]
    pub image: Option<String>,
}

impl SavedCard {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: None,
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
