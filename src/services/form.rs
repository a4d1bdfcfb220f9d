//! Form models
//!
//! Caller-side validation for the article authoring form and the comment
//! form. The store accepts any input, so these checks are the only place
//! where required fields are enforced.

use crate::models::{Article, CreateArticleInput, CreateCommentInput, UpdateArticleInput};
use crate::services::slug::SlugTracker;
use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, &'static str>,
}

impl FormErrors {
    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.errors.insert(field, message);
        }
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Message for a field, if it failed validation
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    /// Names of the fields that failed validation
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().copied().collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Article authoring form
///
/// Tags are edited as a single comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub tags: String,
    pub featured: bool,
    pub image_url: String,
}

impl ArticleForm {
    /// Empty form for a new article
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled for editing an existing article
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            slug: article.slug.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            author: article.author.clone(),
            tags: article.tags.join(", "),
            featured: article.featured,
            image_url: article.image_url.clone(),
        }
    }

    /// Slug tracker seeded from this form's current title and slug
    pub fn slug_tracker(&self) -> SlugTracker {
        SlugTracker::for_existing(self.title.clone(), self.slug.clone())
    }

    /// Apply a title edit, re-deriving the slug while it still follows the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        let mut tracker = self.slug_tracker();
        tracker.set_title(title);
        self.title = tracker.title().to_string();
        self.slug = tracker.slug().to_string();
    }

    /// Check that every required field is filled in
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("title", &self.title, "Title is required");
        errors.require("slug", &self.slug, "Slug is required");
        errors.require("excerpt", &self.excerpt, "Excerpt is required");
        errors.require("content", &self.content, "Content is required");
        errors.require("author", &self.author, "Author is required");
        errors.require("imageUrl", &self.image_url, "Image URL is required");
        errors.into_result()
    }

    /// Split the tag string on commas, dropping blank entries
    pub fn parse_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate and convert into store creation input
    pub fn into_create_input(self) -> Result<CreateArticleInput, FormErrors> {
        self.validate()?;
        let tags = self.parse_tags();
        Ok(CreateArticleInput {
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            tags,
            featured: self.featured,
            image_url: self.image_url,
        })
    }

    /// Validate and convert into a full store update
    ///
    /// The form always submits every field, so every field is set.
    pub fn into_update_input(self) -> Result<UpdateArticleInput, FormErrors> {
        let input = self.into_create_input()?;
        Ok(UpdateArticleInput {
            title: Some(input.title),
            slug: Some(input.slug),
            excerpt: Some(input.excerpt),
            content: Some(input.content),
            author: Some(input.author),
            tags: Some(input.tags),
            featured: Some(input.featured),
            image_url: Some(input.image_url),
        })
    }
}

/// Reader comment form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub author: String,
    pub content: String,
}

impl CommentForm {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }

    /// Check that both name and comment are filled in
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("author", &self.author, "Please enter your name");
        errors.require("content", &self.content, "Please enter a comment");
        errors.into_result()
    }

    /// Validate and convert into store input for the given article
    pub fn into_input(self, article_id: i64) -> Result<CreateCommentInput, FormErrors> {
        self.validate()?;
        Ok(CreateCommentInput::new(article_id, self.author, self.content))
    }
}
