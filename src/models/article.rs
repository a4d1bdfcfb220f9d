//! Article model
//!
//! This module provides:
//! - `Article` entity representing a published article
//! - `CreateArticleInput` carrying every caller-supplied field
//! - `UpdateArticleInput` for partial updates (only `Some` fields are applied)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article entity
///
/// `content` is an HTML fragment supplied by the author. It is stored and
/// returned verbatim; whoever renders it treats it as trusted markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Article title
    pub title: String,
    /// URL-friendly slug
    pub slug: String,
    /// Short summary shown in listings
    pub excerpt: String,
    /// HTML body
    pub content: String,
    /// Author display name
    pub author: String,
    /// Tags in insertion order (duplicates allowed)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the article is promoted to the featured section
    #[serde(default)]
    pub featured: bool,
    /// Cover image URL
    pub image_url: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Build a stored article from creation input.
    pub(crate) fn from_input(id: i64, input: CreateArticleInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            slug: input.slug,
            excerpt: input.excerpt,
            content: input.content,
            author: input.author,
            tags: input.tags,
            featured: input.featured,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the supplied fields over this article.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock does.
    pub(crate) fn apply(&mut self, input: UpdateArticleInput, now: DateTime<Utc>) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(slug) = input.slug {
            self.slug = slug;
        }
        if let Some(excerpt) = input.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = input.content {
            self.content = content;
        }
        if let Some(author) = input.author {
            self.author = author;
        }
        if let Some(tags) = input.tags {
            self.tags = tags;
        }
        if let Some(featured) = input.featured {
            self.featured = featured;
        }
        if let Some(image_url) = input.image_url {
            self.image_url = image_url;
        }
        self.updated_at = now.max(self.created_at);
    }
}

/// Input for creating a new article
///
/// No field is validated by the store; empty strings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub image_url: String,
}

impl CreateArticleInput {
    /// Create a new CreateArticleInput with the required text fields
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            excerpt: excerpt.into(),
            content: content.into(),
            author: author.into(),
            tags: Vec::new(),
            featured: false,
            image_url: image_url.into(),
        }
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the featured flag
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

/// Input for updating an existing article
///
/// `id` and `created_at` are not updatable and have no field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub image_url: Option<String>,
}

impl UpdateArticleInput {
    /// Create a new empty UpdateArticleInput
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the featured flag
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }
}
