//! Comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity
///
/// `article_id` is not checked against the article collection, so a comment
/// can outlive the article it was written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a comment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    pub article_id: i64,
    pub author: String,
    pub content: String,
}

impl CreateCommentInput {
    pub fn new(article_id: i64, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            article_id,
            author: author.into(),
            content: content.into(),
        }
    }
}
