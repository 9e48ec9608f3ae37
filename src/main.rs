use std::net::SocketAddr;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mission_poster::app_state::AppState;
use mission_poster::build_router;
use mission_poster::config::Config;
use mission_poster::constants::MISSION_EMOJI;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mission_poster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Create storage directories
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tokio::fs::create_dir_all(&config.generated_dir).await?;

    let port = config.port;
    let state = AppState::new(config);

    // Rate limiting: 2 requests per second per IP, bursts of 10
    let rate_limit_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(10)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Failed to build rate limit config"))?;

    let rate_limit_layer = GovernorLayer {
        config: std::sync::Arc::new(rate_limit_config),
    };

    let app = build_router(state).layer(rate_limit_layer);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("{} mission-poster listening on {}", MISSION_EMOJI, addr);
    tracing::info!("📖 API docs available at http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
