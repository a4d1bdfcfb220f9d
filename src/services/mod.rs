//! Services layer
//!
//! This module contains the callers of the article store:
//! - Slug derivation and form validation for the authoring surface
//! - The authentication gate in front of admin writes
//! - Reader and admin facades returning page data

pub mod admin;
pub mod auth;
pub mod form;
pub mod reader;
pub mod slug;

pub use admin::{AdminError, AdminService};
pub use auth::{AuthError, AuthService, USER_STORAGE_KEY};
pub use form::{ArticleForm, CommentForm, FormErrors};
pub use reader::{ArticlePage, HomeView, ReaderError, ReaderService};
pub use slug::{generate_slug, SlugTracker};
