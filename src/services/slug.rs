//! Slug derivation
//!
//! Turns article titles into URL-safe slugs and keeps an authoring form's
//! slug in step with its title until the author edits the slug by hand.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Generate a URL-friendly slug from a title
///
/// Lower-cases the title, drops everything except ASCII word characters,
/// whitespace and hyphens, turns whitespace runs into a single hyphen,
/// collapses repeated hyphens and trims hyphens from both ends.
///
/// Applying it to its own output returns the output unchanged.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(stripped.trim(), "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Tracks whether a form's slug still follows its title
///
/// The slug is re-derived on every title change as long as it equals the
/// slug derived from the current title. Once the author types a different
/// slug, title changes leave it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugTracker {
    title: String,
    slug: String,
}

impl SlugTracker {
    /// Tracker for a new, empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker pre-filled from an existing article
    pub fn for_existing(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }

    /// Whether the slug is still the one derived from the title
    pub fn is_tracking(&self) -> bool {
        self.slug == generate_slug(&self.title)
    }

    /// Record a title edit, re-deriving the slug while it is still tracking
    pub fn set_title(&mut self, title: impl Into<String>) -> &str {
        let tracking = self.is_tracking();
        self.title = title.into();
        if tracking {
            self.slug = generate_slug(&self.title);
        }
        &self.slug
    }

    /// Record a manual slug edit
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}
