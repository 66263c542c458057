//! Post-render heading color transform.
//!
//! Runs once per rendered content item, after the host has produced its HTML:
//!
//! ```text
//! ContentItem ──► normalize taxonomy ──► resolve color ──► rewrite headings
//!                                            │
//!                                            └─ none ──► content untouched
//! ```
//!
//! The transform borrows the configuration and keeps no state between items,
//! so [`HeadingColorTransform::apply_all`] processes items on the rayon pool.

use rayon::prelude::*;
use std::borrow::Cow;

use crate::config::TaxonomyStyles;
use crate::debug;
use crate::page::ContentItem;
use crate::resolve::resolve;
use crate::rewrite::{HeadingStyle, rewrite_headings};

/// Heading color post-render hook.
#[derive(Debug, Clone, Copy)]
pub struct HeadingColorTransform<'a> {
    styles: &'a TaxonomyStyles,
    h1_font_size: Option<&'a str>,
}

impl<'a> HeadingColorTransform<'a> {
    pub const fn new(styles: &'a TaxonomyStyles) -> Self {
        Self {
            styles,
            h1_font_size: Some(crate::rewrite::H1_FONT_SIZE),
        }
    }

    /// Override the level-1 font size (`None` disables it).
    pub const fn with_h1_font_size(mut self, size: Option<&'a str>) -> Self {
        self.h1_font_size = size;
        self
    }

    /// Transform rendered HTML given the item's normalized taxonomy names.
    ///
    /// Returns the input borrowed when no color resolves.
    pub fn transform<'h, C, T>(&self, html: &'h str, categories: &[C], tags: &[T]) -> Cow<'h, str>
    where
        C: AsRef<str>,
        T: AsRef<str>,
    {
        let Some(resolved) = resolve(self.styles, categories, tags) else {
            return Cow::Borrowed(html);
        };

        debug!("heading"; "color {} from {}", resolved.color, resolved.source);
        let style = HeadingStyle::new(resolved.color).with_h1_font_size(self.h1_font_size);
        rewrite_headings(html, &style)
    }

    /// Rewrite one content item in place.
    ///
    /// Returns `true` if the content changed.
    pub fn apply(&self, item: &mut ContentItem) -> bool {
        let categories = item.categories.names();
        let tags = item.tags.names();

        let rewritten = match self.transform(&item.content, &categories, &tags) {
            Cow::Owned(html) if html != item.content => Some(html),
            _ => None,
        };

        match rewritten {
            Some(html) => {
                item.content = html;
                true
            }
            None => false,
        }
    }

    /// Rewrite a batch of content items in parallel.
    ///
    /// Returns the number of items whose content changed.
    pub fn apply_all(&self, items: &mut [ContentItem]) -> usize {
        let changed = items
            .par_iter_mut()
            .map(|item| self.apply(item))
            .filter(|&changed| changed)
            .count();
        debug!("heading"; "rewrote {} of {} items", changed, items.len());
        changed
    }
}

/// Rewrite one content item with the given taxonomy styles.
#[inline]
pub fn apply(styles: &TaxonomyStyles, item: &mut ContentItem) -> bool {
    HeadingColorTransform::new(styles).apply(item)
}

// ============================================================================
// tests
// ============================================================================
