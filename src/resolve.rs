//! Heading color resolution.
//!
//! Picks one color from the taxonomy style config for a content item:
//!
//! ```text
//! heading tier:  tag override → first category → defaults
//! title tier:    tag override → first category → defaults   (legacy)
//! ```
//!
//! The whole heading tier is exhausted before the title tier is consulted.
//! Empty color strings count as absent.

use std::fmt;

use crate::config::{ColorRule, StyleRecord, TaxonomyStyles};
use crate::debug;

/// Where a resolved color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    TagHeading,
    CategoryHeading,
    DefaultHeading,
    TagTitle,
    CategoryTitle,
    DefaultTitle,
}

impl fmt::Display for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TagHeading => "tag heading",
            Self::CategoryHeading => "category heading",
            Self::DefaultHeading => "default heading",
            Self::TagTitle => "tag title",
            Self::CategoryTitle => "category title",
            Self::DefaultTitle => "default title",
        })
    }
}

/// A resolved heading color, borrowed from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColor<'a> {
    pub color: &'a str,
    pub source: ColorSource,
}

/// Resolve the heading color for a content item.
///
/// `categories` and `tags` are normalized names in item order. Only the first
/// category is consulted; the first tag whose style defines `post`, `title` or
/// `heading` is the tag override.
///
/// Returns `None` when the config is disabled or no source defines a color.
pub fn resolve<'a, C, T>(
    styles: &'a TaxonomyStyles,
    categories: &[C],
    tags: &[T],
) -> Option<ResolvedColor<'a>>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    if !styles.enable {
        return None;
    }

    let category = categories
        .first()
        .and_then(|name| styles.categories.get(name.as_ref()));
    let tag = tags.iter().find_map(|name| {
        styles
            .tags
            .get(name.as_ref())
            .filter(|style| style.is_override())
            .map(|style| &style.style)
    });
    let defaults = &styles.defaults;

    let candidates: [(ColorSource, Option<&'a ColorRule>); 6] = [
        (ColorSource::TagHeading, tag.and_then(heading)),
        (ColorSource::CategoryHeading, category.and_then(heading)),
        (ColorSource::DefaultHeading, heading(defaults)),
        (ColorSource::TagTitle, tag.and_then(title)),
        (ColorSource::CategoryTitle, category.and_then(title)),
        (ColorSource::DefaultTitle, title(defaults)),
    ];

    candidates.into_iter().find_map(|(source, rule)| {
        let color = rule?.color.as_deref()?;
        if color.trim().is_empty() {
            debug!("heading"; "skipping empty color from {}", source);
            return None;
        }
        Some(ResolvedColor { color, source })
    })
}

/// Resolve only the color string.
#[inline]
pub fn resolve_color<'a, C, T>(
    styles: &'a TaxonomyStyles,
    categories: &[C],
    tags: &[T],
) -> Option<&'a str>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    resolve(styles, categories, tags).map(|resolved| resolved.color)
}

#[inline]
fn heading(record: &StyleRecord) -> Option<&ColorRule> {
    record.heading.as_ref()
}

#[inline]
fn title(record: &StyleRecord) -> Option<&ColorRule> {
    record.title.as_ref()
}

// ============================================================================
// tests
// ============================================================================
