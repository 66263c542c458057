//! Category and tag references attached to a content item.
//!
//! Hosts hand taxonomy terms over in several shapes:
//!
//! | Shape                          | Example                          |
//! |--------------------------------|----------------------------------|
//! | bare name                      | `"Rust"`                         |
//! | named object                   | `{"name": "Rust", "slug": "rust"}` |
//! | plain list                     | `["Rust", {"name": "Web"}]`      |
//! | query wrapper                  | `{"data": ["Rust"]}`             |
//!
//! All of them normalize to an ordered list of names via [`TaxonList::names`].

use serde::{Deserialize, Deserializer, Serialize};

/// A single category or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaxonRef {
    Name(String),
    Named { name: String },
}

impl TaxonRef {
    /// The term's name, whatever its shape.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Named { name } => name,
        }
    }
}

impl From<&str> for TaxonRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for TaxonRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Ordered categories or tags of one content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaxonList {
    List(Vec<TaxonRef>),
    /// Lazily queried collection serialized as `{ "data": [...] }`.
    Query { data: Vec<TaxonRef> },
}

impl Default for TaxonList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl TaxonList {
    /// Underlying references in their original order.
    pub fn refs(&self) -> &[TaxonRef] {
        match self {
            Self::List(refs) | Self::Query { data: refs } => refs,
        }
    }

    /// Normalized names in their original order.
    pub fn names(&self) -> Vec<String> {
        self.refs().iter().map(|r| r.name().to_owned()).collect()
    }

    /// Name of the first term, if any.
    pub fn first(&self) -> Option<&str> {
        self.refs().first().map(TaxonRef::name)
    }

    pub fn len(&self) -> usize {
        self.refs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs().is_empty()
    }
}

impl<T: Into<TaxonRef>> FromIterator<T> for TaxonList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TaxonRef>> From<Vec<T>> for TaxonList {
    fn from(refs: Vec<T>) -> Self {
        refs.into_iter().collect()
    }
}

/// Deserialize a taxon list, treating `null` as empty
pub(super) fn deserialize_taxa<'de, D>(deserializer: D) -> Result<TaxonList, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<TaxonList> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
