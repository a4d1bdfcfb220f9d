//! Data models
//!
//! This module contains the data structures shared by the store and its callers:
//! - Entities (Article, Comment, AuthUser)
//! - Input types for creating and updating them

mod article;
mod comment;
mod user;

pub use article::{Article, CreateArticleInput, UpdateArticleInput};
pub use comment::{Comment, CreateCommentInput};
pub use user::{AuthUser, ADMIN_USER_ID};
