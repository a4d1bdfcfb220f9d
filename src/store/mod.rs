//! Article store
//!
//! In-memory owner of the article and comment collections.
//!
//! This module provides:
//! - `ArticleStore` with read queries and write operations
//! - `seed` with the demo dataset the store can be built from
//!
//! Missing records are reported through `Option` / `bool` return values; no
//! operation fails otherwise. The store performs no validation and no
//! authorization: callers validate input and gate admin writes.
//!
//! # Concurrency
//!
//! Both collections live behind a single `RwLock`. Writes are serialized and
//! a reader sees either the state before a write or the state after it.

pub mod seed;

use crate::models::{Article, Comment, CreateArticleInput, CreateCommentInput, UpdateArticleInput};
use chrono::Utc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Collections plus id counters, guarded together
#[derive(Debug)]
struct Collections {
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_article_id: i64,
    next_comment_id: i64,
}

impl Collections {
    fn new(articles: Vec<Article>, comments: Vec<Comment>) -> Self {
        let next_article_id = articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_comment_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            articles,
            comments,
            next_article_id,
            next_comment_id,
        }
    }

    fn allocate_article_id(&mut self) -> i64 {
        let id = self.next_article_id;
        self.next_article_id += 1;
        id
    }

    fn allocate_comment_id(&mut self) -> i64 {
        let id = self.next_comment_id;
        self.next_comment_id += 1;
        id
    }
}

/// In-memory article and comment store
#[derive(Debug)]
pub struct ArticleStore {
    inner: RwLock<Collections>,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// Create a store pre-populated with the given records
    ///
    /// New ids continue after the largest id present in each collection.
    pub fn with_data(articles: Vec<Article>, comments: Vec<Comment>) -> Self {
        Self {
            inner: RwLock::new(Collections::new(articles, comments)),
        }
    }

    /// Create a store holding the demo dataset
    pub fn with_demo_data() -> Self {
        Self::with_data(seed::demo_articles(), seed::demo_comments())
    }

    // Every write completes its changes before releasing the guard, so a
    // poisoned lock still holds consistent collections.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// List all articles, newest first
    ///
    /// Articles with equal `created_at` are ordered by id, highest first, so
    /// the most recently created one always leads.
    pub fn list_articles(&self) -> Vec<Article> {
        let mut articles = self.read().articles.clone();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        articles
    }

    /// List featured articles in collection order
    pub fn list_featured_articles(&self) -> Vec<Article> {
        self.read()
            .articles
            .iter()
            .filter(|a| a.featured)
            .cloned()
            .collect()
    }

    /// Get article by ID
    pub fn get_article_by_id(&self, id: i64) -> Option<Article> {
        self.read().articles.iter().find(|a| a.id == id).cloned()
    }

    /// Get article by slug
    ///
    /// Slugs are not unique; the first match in collection order wins.
    pub fn get_article_by_slug(&self, slug: &str) -> Option<Article> {
        self.read().articles.iter().find(|a| a.slug == slug).cloned()
    }

    /// List comments for an article, oldest first
    ///
    /// Returns an empty list when the article has no comments or does not exist.
    pub fn list_comments_for_article(&self, article_id: i64) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .read()
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        comments
    }

    /// Number of stored articles
    pub fn article_count(&self) -> usize {
        self.read().articles.len()
    }

    /// Number of stored comments, orphans included
    pub fn comment_count(&self) -> usize {
        self.read().comments.len()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a new article
    ///
    /// Assigns a fresh id and sets `created_at = updated_at = now`.
    pub fn create_article(&self, input: CreateArticleInput) -> Article {
        let mut inner = self.write();
        let id = inner.allocate_article_id();
        let article = Article::from_input(id, input, Utc::now());
        inner.articles.push(article.clone());
        drop(inner);

        tracing::debug!(id = article.id, slug = %article.slug, "article created");
        article
    }

    /// Update an existing article
    ///
    /// Only the fields present in `input` are changed; `updated_at` is always
    /// refreshed. Returns `None` if no article has this id.
    pub fn update_article(&self, id: i64, input: UpdateArticleInput) -> Option<Article> {
        let mut inner = self.write();
        let article = inner.articles.iter_mut().find(|a| a.id == id)?;
        article.apply(input, Utc::now());
        let updated = article.clone();
        drop(inner);

        tracing::debug!(id, "article updated");
        Some(updated)
    }

    /// Delete an article
    ///
    /// Comments that reference the article are left in place.
    /// Returns whether a record was removed.
    pub fn delete_article(&self, id: i64) -> bool {
        let mut inner = self.write();
        let Some(index) = inner.articles.iter().position(|a| a.id == id) else {
            return false;
        };
        inner.articles.remove(index);
        drop(inner);

        tracing::debug!(id, "article deleted");
        true
    }

    /// Append a comment
    ///
    /// The article id is not checked against the article collection.
    pub fn add_comment(&self, input: CreateCommentInput) -> Comment {
        let mut inner = self.write();
        let comment = Comment {
            id: inner.allocate_comment_id(),
            article_id: input.article_id,
            author: input.author,
            content: input.content,
            created_at: Utc::now(),
        };
        inner.comments.push(comment.clone());
        drop(inner);

        tracing::debug!(id = comment.id, article_id = comment.article_id, "comment added");
        comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn input(title: &str) -> CreateArticleInput {
        CreateArticleInput::new(
            title,
            crate::services::slug::generate_slug(title),
            "Excerpt",
            "<p>Body</p>",
            "Tester",
            "https://example.com/cover.jpg",
        )
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[test]
    fn test_empty_store() {
        let store = ArticleStore::new();
        assert!(store.list_articles().is_empty());
        assert!(store.list_featured_articles().is_empty());
        assert_eq!(store.article_count(), 0);
        assert_eq!(store.comment_count(), 0);
    }

    #[test]
    fn test_demo_list_is_newest_first() {
        let store = ArticleStore::with_demo_data();
        let ids: Vec<i64> = store.list_articles().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_demo_featured_in_collection_order() {
        let store = ArticleStore::with_demo_data();
        let ids: Vec<i64> = store.list_featured_articles().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_get_by_id_and_slug() {
        let store = ArticleStore::with_demo_data();

        let by_id = store.get_article_by_id(2).expect("article 2 exists");
        assert_eq!(by_id.slug, "the-power-of-tailwind-css");

        let by_slug = store
            .get_article_by_slug("the-power-of-tailwind-css")
            .expect("slug exists");
        assert_eq!(by_slug, by_id);

        assert!(store.get_article_by_id(999).is_none());
        assert!(store.get_article_by_slug("missing").is_none());
    }

    #[test]
    fn test_comments_oldest_first() {
        let store = ArticleStore::with_demo_data();
        let comments = store.list_comments_for_article(1);
        assert_eq!(comments.len(), 2);
        assert!(comments[0].created_at <= comments[1].created_at);
        assert_eq!(comments[0].author, "Michael Brown");
    }

    #[test]
    fn test_comments_for_unknown_article_is_empty() {
        let store = ArticleStore::with_demo_data();
        assert!(store.list_comments_for_article(42).is_empty());
    }

    #[test]
    fn test_comments_sorted_even_when_inserted_out_of_order() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let comment = |id: i64, offset: i64| Comment {
            id,
            article_id: 1,
            author: format!("author {id}"),
            content: "text".to_string(),
            created_at: base + Duration::minutes(offset),
        };
        let store = ArticleStore::with_data(Vec::new(), vec![comment(1, 30), comment(2, 10), comment(3, 20)]);

        let ids: Vec<i64> = store.list_comments_for_article(1).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    #[test]
    fn test_create_assigns_fresh_id_and_timestamps() {
        let store = ArticleStore::with_demo_data();
        let created = store.create_article(input("Hello World"));

        assert_eq!(created.id, 4);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(store.get_article_by_id(created.id), Some(created));
    }

    #[test]
    fn test_create_accepts_empty_fields() {
        let store = ArticleStore::new();
        let created = store.create_article(CreateArticleInput::default());
        assert_eq!(created.id, 1);
        assert_eq!(created.title, "");
        assert_eq!(store.article_count(), 1);
    }

    #[test]
    fn test_new_article_is_listed_first() {
        let store = ArticleStore::with_demo_data();
        let created = store.create_article(input("Fresh"));
        assert_eq!(store.list_articles()[0].id, created.id);
    }

    #[test]
    fn test_same_timestamp_ties_go_to_newest_id() {
        let store = ArticleStore::new();
        let first = store.create_article(input("One"));
        let second = store.create_article(input("Two"));

        let listed = store.list_articles();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn test_update_title_only() {
        let store = ArticleStore::with_demo_data();
        let before = store.get_article_by_id(1).unwrap();

        let after = store
            .update_article(1, UpdateArticleInput::new().with_title("X"))
            .expect("article 1 exists");

        assert_eq!(after.title, "X");
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.slug, before.slug);
        assert_eq!(after.excerpt, before.excerpt);
        assert_eq!(after.content, before.content);
        assert_eq!(after.author, before.author);
        assert_eq!(after.tags, before.tags);
        assert_eq!(after.featured, before.featured);
        assert_eq!(after.image_url, before.image_url);
    }

    #[test]
    fn test_update_unknown_returns_none() {
        let store = ArticleStore::with_demo_data();
        assert!(store
            .update_article(999, UpdateArticleInput::new().with_title("X"))
            .is_none());
        assert_eq!(store.article_count(), 3);
    }

    #[test]
    fn test_delete_known_and_unknown() {
        let store = ArticleStore::with_demo_data();

        assert!(!store.delete_article(999));
        assert_eq!(store.article_count(), 3);

        assert!(store.delete_article(2));
        assert_eq!(store.article_count(), 2);
        assert!(store.get_article_by_id(2).is_none());
        assert!(store.get_article_by_id(1).is_some());
        assert!(store.get_article_by_id(3).is_some());
    }

    #[test]
    fn test_delete_leaves_comments_in_place() {
        let store = ArticleStore::with_demo_data();
        assert!(store.delete_article(3));
        assert_eq!(store.list_comments_for_article(3).len(), 2);
        assert_eq!(store.comment_count(), 5);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = ArticleStore::new();
        let first = store.create_article(input("One"));
        assert!(store.delete_article(first.id));
        let second = store.create_article(input("Two"));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_add_comment_without_article() {
        let store = ArticleStore::new();
        let comment = store.add_comment(CreateCommentInput::new(77, "Reader", "Hi"));

        assert_eq!(comment.article_id, 77);
        assert_eq!(store.list_comments_for_article(77), vec![comment]);
    }

    #[test]
    fn test_add_comment_is_listed_last() {
        let store = ArticleStore::with_demo_data();
        let comment = store.add_comment(CreateCommentInput::new(1, "Reader", "Late reply"));

        let comments = store.list_comments_for_article(1);
        assert_eq!(comments.len(), 3);
        assert_eq!(comments.last(), Some(&comment));
        assert_eq!(comment.id, 6);
    }

    #[test]
    fn test_end_to_end_lifecycle() {
        let store = ArticleStore::with_demo_data();

        let created = store.create_article(input("Hello World"));
        assert_eq!(store.get_article_by_id(created.id), Some(created.clone()));

        store
            .update_article(created.id, UpdateArticleInput::new().with_featured(true))
            .expect("article exists");
        assert!(store
            .list_featured_articles()
            .iter()
            .any(|a| a.id == created.id));

        assert!(store.delete_article(created.id));
        assert!(store.get_article_by_id(created.id).is_none());
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(ArticleStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|i| store.create_article(input(&format!("t{t} a{i}"))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), 200);
        assert_eq!(store.article_count(), 200);
    }

    // ========================================================================
    // Property-Based Tests
    // ========================================================================

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Every id returned by a run of creates is distinct.
        #[test]
        fn property_create_ids_are_unique(titles in proptest::collection::vec("[a-zA-Z ]{1,20}", 1..30)) {
            let store = ArticleStore::with_demo_data();
            let mut seen: HashSet<i64> = store.list_articles().iter().map(|a| a.id).collect();

            for title in &titles {
                let created = store.create_article(input(title));
                prop_assert!(seen.insert(created.id));
            }
        }

        /// Listing order is `created_at` descending after any mix of creates and deletes.
        #[test]
        fn property_list_sorted_newest_first(
            creates in 0usize..10,
            deletes in proptest::collection::vec(1i64..15, 0..5),
        ) {
            let store = ArticleStore::with_demo_data();
            for i in 0..creates {
                store.create_article(input(&format!("Article {i}")));
            }
            for id in deletes {
                store.delete_article(id);
            }

            let listed = store.list_articles();
            for pair in listed.windows(2) {
                prop_assert!(pair[0].created_at >= pair[1].created_at);
            }
        }

        /// A delete of an unknown id never changes the collection.
        #[test]
        fn property_delete_unknown_is_noop(id in 100i64..10_000) {
            let store = ArticleStore::with_demo_data();
            let before = store.list_articles();
            prop_assert!(!store.delete_article(id));
            prop_assert_eq!(store.list_articles(), before);
        }
    }
}
