//! Content items handed over by the host pipeline after rendering.

mod taxon;

pub use taxon::{TaxonList, TaxonRef};

use serde::{Deserialize, Serialize};

/// One rendered post or page.
///
/// Only `content` is ever written back by the transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    /// Rendered HTML.
    pub content: String,
    /// Categories, first one decides the category style.
    #[serde(deserialize_with = "taxon::deserialize_taxa")]
    pub categories: TaxonList,
    /// Tags, scanned in order for an override.
    #[serde(deserialize_with = "taxon::deserialize_taxa")]
    pub tags: TaxonList,
}

impl ContentItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_categories(mut self, categories: impl Into<TaxonList>) -> Self {
        self.categories = categories.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<TaxonList>) -> Self {
        self.tags = tags.into();
        self
    }
}
