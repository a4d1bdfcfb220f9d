//! Admin service
//!
//! Write-side facade used by the admin dashboard:
//! - List every article for the admin table
//! - Create, update and delete articles from the authoring form
//!
//! Every operation requires a signed-in admin. Form input is validated here,
//! before the store is called, since the store accepts anything.

use crate::config::LatencyConfig;
use crate::models::Article;
use crate::services::auth::AuthService;
use crate::services::form::{ArticleForm, FormErrors};
use crate::store::ArticleStore;
use std::sync::Arc;

/// Error types for admin operations
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// No admin session
    #[error("Admin access required")]
    Unauthorized,

    /// Article not found
    #[error("Article not found: {0}")]
    NotFound(i64),

    /// Article form failed validation
    #[error("Validation error: {0}")]
    ValidationError(#[from] FormErrors),
}

/// Admin facade over the article store
pub struct AdminService {
    store: Arc<ArticleStore>,
    auth: Arc<AuthService>,
    latency: LatencyConfig,
}

impl AdminService {
    pub fn new(store: Arc<ArticleStore>, auth: Arc<AuthService>, latency: LatencyConfig) -> Self {
        Self {
            store,
            auth,
            latency,
        }
    }

    async fn authorize(&self) -> Result<(), AdminError> {
        if self.auth.is_admin().await {
            Ok(())
        } else {
            Err(AdminError::Unauthorized)
        }
    }

    async fn simulate_latency(&self) {
        let delay = self.latency.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// All articles, newest first
    pub async fn list(&self) -> Result<Vec<Article>, AdminError> {
        self.authorize().await?;
        self.simulate_latency().await;
        Ok(self.store.list_articles())
    }

    /// Pre-filled form for editing an article
    pub async fn edit_form(&self, id: i64) -> Result<ArticleForm, AdminError> {
        self.authorize().await?;
        self.store
            .get_article_by_id(id)
            .map(|article| ArticleForm::from_article(&article))
            .ok_or(AdminError::NotFound(id))
    }

    /// Create an article from a submitted form
    pub async fn create(&self, form: ArticleForm) -> Result<Article, AdminError> {
        self.authorize().await?;
        let input = form.into_create_input()?;
        self.simulate_latency().await;

        let article = self.store.create_article(input);
        tracing::info!(id = article.id, slug = %article.slug, "Article created");
        Ok(article)
    }

    /// Replace an article's fields with a submitted form
    pub async fn update(&self, id: i64, form: ArticleForm) -> Result<Article, AdminError> {
        self.authorize().await?;
        let input = form.into_update_input()?;
        self.simulate_latency().await;

        let article = self
            .store
            .update_article(id, input)
            .ok_or(AdminError::NotFound(id))?;
        tracing::info!(id, "Article updated");
        Ok(article)
    }

    /// Delete an article
    ///
    /// Its comments stay in the store.
    pub async fn delete(&self, id: i64) -> Result<(), AdminError> {
        self.authorize().await?;
        self.simulate_latency().await;

        if !self.store.delete_article(id) {
            return Err(AdminError::NotFound(id));
        }
        tracing::info!(id, "Article deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::storage::{MemoryStorage, Storage};

    async fn setup(signed_in: bool) -> (Arc<ArticleStore>, AdminService) {
        let store = Arc::new(ArticleStore::with_demo_data());
        let storage = Arc::new(Storage::Memory(MemoryStorage::new()));
        let auth = Arc::new(AuthService::new(AuthConfig::default(), storage));
        if signed_in {
            auth.login("admin", "admin").await.unwrap();
        }
        let service = AdminService::new(store.clone(), auth, LatencyConfig::none());
        (store, service)
    }

    fn form(title: &str) -> ArticleForm {
        let mut form = ArticleForm::new();
        form.set_title(title);
        form.excerpt = "Short".to_string();
        form.content = "<p>Long</p>".to_string();
        form.author = "Admin".to_string();
        form.tags = "News, Rust".to_string();
        form.image_url = "https://example.com/x.jpg".to_string();
        form
    }

    #[tokio::test]
    async fn test_requires_admin_session() {
        let (store, service) = setup(false).await;

        assert!(matches!(service.list().await, Err(AdminError::Unauthorized)));
        assert!(matches!(
            service.create(form("Nope")).await,
            Err(AdminError::Unauthorized)
        ));
        assert!(matches!(service.delete(1).await, Err(AdminError::Unauthorized)));
        assert_eq!(store.article_count(), 3);
    }

    #[tokio::test]
    async fn test_create_from_form() {
        let (store, service) = setup(true).await;

        let article = service.create(form("Release Notes")).await.unwrap();

        assert_eq!(article.slug, "release-notes");
        assert_eq!(article.tags, vec!["News", "Rust"]);
        assert_eq!(store.list_articles()[0].id, article.id);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_form() {
        let (store, service) = setup(true).await;
        let mut bad = form("Release Notes");
        bad.image_url.clear();

        let err = service.create(bad).await.unwrap_err();

        match err {
            AdminError::ValidationError(errors) => {
                assert_eq!(errors.get("imageUrl"), Some("Image URL is required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.article_count(), 3);
    }

    #[tokio::test]
    async fn test_edit_and_update() {
        let (store, service) = setup(true).await;

        let mut edit = service.edit_form(2).await.unwrap();
        edit.featured = true;
        let updated = service.update(2, edit).await.unwrap();

        assert!(updated.featured);
        assert_eq!(updated.slug, "the-power-of-tailwind-css");
        assert!(store.list_featured_articles().iter().any(|a| a.id == 2));
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown() {
        let (_, service) = setup(true).await;

        assert!(matches!(service.edit_form(99).await, Err(AdminError::NotFound(99))));
        assert!(matches!(
            service.update(99, form("Ghost")).await,
            Err(AdminError::NotFound(99))
        ));
        assert!(matches!(service.delete(99).await, Err(AdminError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_keeps_comments() {
        let (store, service) = setup(true).await;

        service.delete(1).await.unwrap();

        assert!(store.get_article_by_id(1).is_none());
        assert_eq!(store.list_comments_for_article(1).len(), 2);
    }
}
