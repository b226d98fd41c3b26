//! Category records from the remote document.

use serde::{Deserialize, Deserializer};

/// One product grouping rendered as a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub title: String,
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Icon class list, e.g. `fas fa-gem`.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    /// Mirror the card layout.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reverse: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Category {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: image.into(),
            icon: None,
            features: Vec::new(),
            reverse: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// The record's icon, or `default` when missing or blank.
    pub fn icon_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.icon.as_deref() {
            Some(icon) if !icon.trim().is_empty() => icon,
            _ => default,
        }
    }
}
