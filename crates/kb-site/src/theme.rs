//! Site-wide heading style.
//!
//! Every heading on the homepage goes through [`Heading`] so levels, anchor
//! ids and escaping stay consistent. Anchor ids are unique per page: repeated
//! slugs get a numeric suffix from [`AnchorIds`].

use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;

use crate::markup::escape;

/// Heading level used by homepage sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub const fn number(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.number()
    }
}

/// A themed heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: HeadingLevel,
    pub text: &'a str,
}

impl<'a> Heading<'a> {
    pub const fn new(level: HeadingLevel, text: &'a str) -> Self {
        Self { level, text }
    }

    /// Base anchor slug for linkable headings. The page title (H1) has none.
    pub fn anchor_id(&self) -> Option<String> {
        match self.level {
            HeadingLevel::H1 => None,
            HeadingLevel::H2 | HeadingLevel::H3 => {
                let slug = slugify(self.text);
                (!slug.is_empty()).then_some(slug)
            }
        }
    }

    /// Append the heading markup to `html`, claiming its anchor in `ids`.
    pub fn write_html(&self, html: &mut String, class: Option<&str>, ids: &mut AnchorIds) {
        let level = self.level.number();
        let _ = write!(html, "<h{level}");
        if let Some(slug) = self.anchor_id() {
            let _ = write!(html, " id=\"{}\"", escape(&ids.claim(&slug)));
        }
        if let Some(class) = class {
            let _ = write!(html, " class=\"{}\"", escape(class));
        }
        let _ = writeln!(html, ">{}</h{level}>", escape(self.text));
    }
}

/// Anchor ids already used on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorIds {
    used: HashSet<String>,
}

impl AnchorIds {
    /// Reserve an id for `slug`. Repeats become `slug-1`, `slug-2`, ...
    pub fn claim(&mut self, slug: &str) -> String {
        if self.used.insert(slug.to_owned()) {
            return slug.to_owned();
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{slug}-{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Convert heading text to an anchor slug.
///
/// ASCII alphanumerics are lowercased; runs of anything else collapse to a
/// single `-`. Leading and trailing separators are removed.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
