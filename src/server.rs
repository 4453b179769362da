//! HTTP server initialization and runtime setup.
//!
//! Handles registry backend selection and Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{MemoryLinkRepository, RedisLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Registry backend (Redis when configured, in-memory otherwise)
/// - Axum HTTP server
///
/// A configured but unreachable Redis fails startup; there is no silent
/// fallback to the volatile in-memory registry.
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but the connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn LinkRepository> = match &config.redis_url {
        Some(redis_url) => {
            let redis = RedisLinkRepository::connect(redis_url)
                .await
                .context("Failed to initialize Redis registry")?;
            tracing::info!("Registry backend: Redis");
            Arc::new(redis)
        }
        None => {
            tracing::info!("Registry backend: in-memory (volatile)");
            Arc::new(MemoryLinkRepository::new())
        }
    };

    let link_service = Arc::new(LinkService::new(repository));

    let state = AppState {
        link_service,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
