//! Reader service
//!
//! Data behind the public pages: the home page listings, a single article
//! with its comments, and posting a comment. Each call waits for the
//! configured simulated latency before reading or writing the store.

use crate::config::LatencyConfig;
use crate::models::{Article, Comment};
use crate::services::form::{CommentForm, FormErrors};
use crate::store::ArticleStore;
use serde::Serialize;
use std::sync::Arc;

/// Error types for reader operations
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// Comment form failed validation
    #[error("Validation error: {0}")]
    ValidationError(#[from] FormErrors),
}

/// Home page data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    /// Featured articles in collection order
    pub featured: Vec<Article>,
    /// All articles, newest first
    pub recent: Vec<Article>,
}

/// Article page data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub article: Article,
    /// Comments, oldest first
    pub comments: Vec<Comment>,
}

/// Read-side facade over the article store
pub struct ReaderService {
    store: Arc<ArticleStore>,
    latency: LatencyConfig,
}

impl ReaderService {
    pub fn new(store: Arc<ArticleStore>, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    async fn simulate_latency(&self) {
        let delay = self.latency.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Featured and recent articles for the home page
    pub async fn home(&self) -> HomeView {
        self.simulate_latency().await;
        HomeView {
            featured: self.store.list_featured_articles(),
            recent: self.store.list_articles(),
        }
    }

    /// An article with its comments, or `None` for the not-found page
    pub async fn article_page(&self, id: i64) -> Option<ArticlePage> {
        self.simulate_latency().await;
        let article = self.store.get_article_by_id(id)?;
        let comments = self.store.list_comments_for_article(article.id);
        Some(ArticlePage { article, comments })
    }

    /// Look an article up by slug
    pub async fn article_by_slug(&self, slug: &str) -> Option<ArticlePage> {
        self.simulate_latency().await;
        let article = self.store.get_article_by_slug(slug)?;
        let comments = self.store.list_comments_for_article(article.id);
        Some(ArticlePage { article, comments })
    }

    /// Validate and post a reader comment
    pub async fn post_comment(
        &self,
        article_id: i64,
        form: CommentForm,
    ) -> Result<Comment, ReaderError> {
        let input = form.into_input(article_id)?;
        self.simulate_latency().await;
        let comment = self.store.add_comment(input);
        tracing::info!(article_id, comment_id = comment.id, "Comment posted");
        Ok(comment)
    }
}
