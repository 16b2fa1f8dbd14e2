mod model;
mod server;

use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    cache::ListingCache, config::Config, error::AppError, router, service::auth::token::TokenKeys,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cache = ListingCache::new(
        config.cache_max_capacity,
        Duration::from_secs(config.cache_ttl_seconds),
    );

    startup::seed_superadmin(&db, &cache, &config).await?;

    let keys = TokenKeys::new(&config.jwt_secret, config.jwt_expires_in_seconds);
    let app = router::router(&config)?.with_state(AppState::new(
        db,
        cache,
        keys,
        config.superadmin_email.clone(),
        config.bcrypt_cost,
    ));

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
