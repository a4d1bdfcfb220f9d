//! Pressroom - An article publishing demo

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pressroom::{
    config::Config,
    services::{AdminService, AuthService, ReaderService},
    storage::create_storage,
    store::ArticleStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pressroom=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pressroom...");

    // Load configuration
    let config_path = std::env::var("PRESSROOM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("pressroom.yml"));
    let config = Config::load_with_env(&config_path)?;
    tracing::info!("Configuration loaded from {}", config_path.display());

    // Build the article store
    let store = Arc::new(if config.store.seed_demo_data {
        ArticleStore::with_demo_data()
    } else {
        ArticleStore::new()
    });
    tracing::info!(
        articles = store.article_count(),
        comments = store.comment_count(),
        "Article store ready"
    );

    // Restore any saved session
    let storage = create_storage(&config.storage).await?;
    let auth = Arc::new(AuthService::new(config.auth.clone(), storage));
    match auth.restore().await {
        Some(user) => tracing::info!("Signed in as {}", user.username),
        None => tracing::info!("No saved session"),
    }

    let reader = ReaderService::new(store.clone(), config.latency.clone());
    let admin = AdminService::new(store.clone(), auth.clone(), config.latency.clone());

    // Walk the reader surface
    let home = reader.home().await;
    for article in &home.featured {
        tracing::info!(id = article.id, slug = %article.slug, "Featured: {}", article.title);
    }
    for article in &home.recent {
        let comments = store.list_comments_for_article(article.id).len();
        tracing::info!(
            id = article.id,
            comments,
            "{} by {} ({})",
            article.title,
            article.author,
            article.created_at.format("%Y-%m-%d")
        );
    }

    match admin.list().await {
        Ok(articles) => tracing::info!("Admin dashboard: {} articles", articles.len()),
        Err(e) => tracing::info!("Admin dashboard unavailable: {}", e),
    }

    Ok(())
}
