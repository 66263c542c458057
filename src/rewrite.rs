//! Inline heading style injection.
//!
//! Rewrites every `<h1>`..`<h6>` opening tag so it carries the resolved color
//! as an inline style. Level-1 headings also get a fixed font size.
//!
//! ```text
//! <h2>Text</h2>                        → <h2 style="color:#f00;">Text</h2>
//! <h3 class="x" style="margin:0">      → <h3 class="x" style="color:#f00;margin:0">
//! <h1>Title</h1>                       → <h1 style="color:#f00;font-size:26px;">Title</h1>
//! ```
//!
//! The scan is a single regex pass over the document, not an HTML parse: a
//! literal `>` inside an attribute value ends the tag early.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Font size forced on level-1 headings.
pub const H1_FONT_SIZE: &str = "26px";

/// `<h1>`..`<h6>` opening tag, any case, optional attributes.
static RE_HEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(h[1-6])(\s[^>]*)?>").unwrap());

/// Existing `style` attribute up to and including its opening quote.
static RE_STYLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\sstyle\s*=\s*["']"#).unwrap());

/// Declarations to inject into heading tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingStyle<'a> {
    pub color: &'a str,
    /// Font size for `<h1>` only, `None` to leave it alone.
    pub h1_font_size: Option<&'a str>,
}

impl<'a> HeadingStyle<'a> {
    /// Color plus the default level-1 font size.
    pub const fn new(color: &'a str) -> Self {
        Self {
            color,
            h1_font_size: Some(H1_FONT_SIZE),
        }
    }

    pub const fn with_h1_font_size(mut self, size: Option<&'a str>) -> Self {
        self.h1_font_size = size;
        self
    }

    /// CSS declarations for a heading, e.g. `color:#f00;font-size:26px;`.
    pub fn declarations(&self, is_h1: bool) -> String {
        match self.h1_font_size {
            Some(size) if is_h1 => format!("color:{};font-size:{};", self.color, size),
            _ => format!("color:{};", self.color),
        }
    }
}

/// Inject `style` into every heading opening tag of `html`.
///
/// Closing tags and heading bodies are untouched. Returns the input borrowed
/// when there is no heading at all.
pub fn rewrite_headings<'h>(html: &'h str, style: &HeadingStyle<'_>) -> Cow<'h, str> {
    RE_HEADING_OPEN.replace_all(html, |caps: &Captures<'_>| rewrite_tag(caps, style))
}

fn rewrite_tag(caps: &Captures<'_>, style: &HeadingStyle<'_>) -> String {
    let tag = &caps[1];
    let attrs = caps.get(2).map_or("", |m| m.as_str());
    let declarations = style.declarations(tag.eq_ignore_ascii_case("h1"));

    match RE_STYLE_ATTR.find(attrs) {
        Some(open) => {
            let (head, value) = attrs.split_at(open.end());
            // Already injected by an earlier pass
            if value.starts_with(&declarations) {
                return caps[0].to_owned();
            }
            format!("<{tag}{head}{declarations}{value}>")
        }
        None => format!(r#"<{tag}{attrs} style="{declarations}">"#),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(html: &str, color: &str) -> String {
        rewrite_headings(html, &HeadingStyle::new(color)).into_owned()
    }

    #[test]
    fn test_no_existing_style() {
        assert_eq!(
            rewrite("<h2>Text</h2>", "#ff0000"),
            r#"<h2 style="color:#ff0000;">Text</h2>"#
        );
    }

    #[test]
    fn test_merge_existing_style() {
        assert_eq!(
            rewrite(r#"<h3 class="x" style="margin:0">Text</h3>"#, "#00f"),
            r#"<h3 class="x" style="color:#00f;margin:0">Text</h3>"#
        );
    }

    #[test]
    fn test_append_after_other_attributes() {
        assert_eq!(
            rewrite(r#"<h4 id="intro" class="a b">Intro</h4>"#, "red"),
            r#"<h4 id="intro" class="a b" style="color:red;">Intro</h4>"#
        );
    }

    #[test]
    fn test_h1_gets_font_size() {
        let out = rewrite("<h1>Title</h1>", "#123456");
        assert_eq!(
            out,
            r#"<h1 style="color:#123456;font-size:26px;">Title</h1>"#
        );

        let out = rewrite("<h2>Sub</h2>", "#123456");
        assert!(out.contains("color:#123456;"));
        assert!(!out.contains("font-size"));
    }

    #[test]
    fn test_h1_size_can_be_disabled() {
        let style = HeadingStyle::new("#123456").with_h1_font_size(None);
        assert_eq!(
            rewrite_headings("<h1>Title</h1>", &style),
            r#"<h1 style="color:#123456;">Title</h1>"#
        );
    }

    #[test]
    fn test_h1_merge_keeps_order() {
        assert_eq!(
            rewrite(r#"<h1 style="font-size:40px">T</h1>"#, "#000"),
            r#"<h1 style="color:#000;font-size:26px;font-size:40px">T</h1>"#
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            rewrite(r#"<H2 STYLE="x">A</H2>"#, "red"),
            r#"<H2 STYLE="color:red;x">A</H2>"#
        );
        assert_eq!(
            rewrite("<H1>A</H1>", "red"),
            r#"<H1 style="color:red;font-size:26px;">A</H1>"#
        );
        assert_eq!(
            rewrite(r#"<h5 Style = "x">A</h5>"#, "red"),
            r#"<h5 Style = "color:red;x">A</h5>"#
        );
    }

    #[test]
    fn test_single_quoted_style() {
        assert_eq!(
            rewrite("<h2 style='margin:0'>A</h2>", "red"),
            "<h2 style='color:red;margin:0'>A</h2>"
        );
    }

    #[test]
    fn test_data_style_is_not_style() {
        assert_eq!(
            rewrite(r#"<h2 data-style="fancy">A</h2>"#, "red"),
            r#"<h2 data-style="fancy" style="color:red;">A</h2>"#
        );
    }

    #[test]
    fn test_unquoted_style_gets_new_attribute() {
        assert_eq!(
            rewrite("<h2 style=margin:0>A</h2>", "red"),
            r#"<h2 style=margin:0 style="color:red;">A</h2>"#
        );
    }

    #[test]
    fn test_non_headings_untouched() {
        let html = "<header><hr><h7>x</h7><h10>y</h10><hgroup></hgroup><p>z</p></header>";
        let out = rewrite_headings(html, &HeadingStyle::new("red"));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, html);
    }

    #[test]
    fn test_no_headings_borrowed() {
        let out = rewrite_headings("", &HeadingStyle::new("red"));
        assert!(matches!(out, Cow::Borrowed("")));
    }

    #[test]
    fn test_every_heading_rewritten() {
        let html = "<h1>A</h1><p>x</p><h2 id=\"b\">B</h2><h6>F</h6>";
        assert_eq!(
            rewrite(html, "teal"),
            "<h1 style=\"color:teal;font-size:26px;\">A</h1><p>x</p>\
             <h2 id=\"b\" style=\"color:teal;\">B</h2><h6 style=\"color:teal;\">F</h6>"
        );
    }

    #[test]
    fn test_bodies_and_closing_tags_untouched() {
        let html = "<h2>see <code>&lt;h2&gt;</code> and <span style=\"a\">b</span></h2>";
        assert_eq!(
            rewrite(html, "red"),
            "<h2 style=\"color:red;\">see <code>&lt;h2&gt;</code> and <span style=\"a\">b</span></h2>"
        );
    }

    #[test]
    fn test_second_pass_is_noop() {
        let style = HeadingStyle::new("red");
        let once = rewrite_headings("<h1>A</h1><h2 style=\"margin:0\">B</h2>", &style).into_owned();
        let twice = rewrite_headings(&once, &style);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_different_color_prepends_again() {
        let once = rewrite("<h2>A</h2>", "red");
        assert_eq!(
            rewrite(&once, "blue"),
            r#"<h2 style="color:blue;color:red;">A</h2>"#
        );
    }

    #[test]
    fn test_gt_in_attribute_ends_match() {
        // Inherited limitation: the tag ends at the first `>`
        assert_eq!(
            rewrite(r#"<h2 title="a>b">A</h2>"#, "red"),
            r#"<h2 title="a style="color:red;">b">A</h2>"#
        );
    }
}
