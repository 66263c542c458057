//! Taxonomy-driven heading colors for rendered posts.
//!
//! A post-render transform: after a content item has been rendered to HTML,
//! pick one heading color from the theme's `taxonomy_styles` (tag override,
//! first category, defaults) and pin it on every `<h1>`..`<h6>` as an inline
//! style, so the color holds where a theme CSS variable does not resolve.
//!
//! # Example
//!
//! ```
//! use tola_heading_color::{ContentItem, HeadingColorTransform, ThemeConfig};
//!
//! let theme = ThemeConfig::from_str(r##"
//! [taxonomy_styles]
//! enable = true
//! [taxonomy_styles.categories.Rust.heading]
//! color = "#dea584"
//! "##).unwrap();
//!
//! let mut item = ContentItem::new("<h2>Ownership</h2>").with_categories(vec!["Rust"]);
//! HeadingColorTransform::new(theme.taxonomy_styles()).apply(&mut item);
//!
//! assert_eq!(item.content, r##"<h2 style="color:#dea584;">Ownership</h2>"##);
//! ```
//!
//! # Modules
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `config`   | `ThemeConfig` / `[taxonomy_styles]` loading      |
//! | `page`     | `ContentItem` and taxonomy normalization         |
//! | `resolve`  | Color precedence chain                           |
//! | `rewrite`  | Inline style injection into heading tags         |
//! | `pipeline` | Post-render hook tying the two together          |
//! | `logger`   | `log!` / `debug!` macros                         |

pub mod config;
pub mod logger;
pub mod page;
pub mod pipeline;
pub mod resolve;
pub mod rewrite;

pub use config::{ColorRule, ConfigError, StyleRecord, TagStyle, TaxonomyStyles, ThemeConfig};
pub use page::{ContentItem, TaxonList, TaxonRef};
pub use pipeline::{HeadingColorTransform, apply};
pub use resolve::{ColorSource, ResolvedColor, resolve, resolve_color};
pub use rewrite::{H1_FONT_SIZE, HeadingStyle, rewrite_headings};
