//! FarmSync backend server entry point

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farmsync_backend::seed::SeedData;
use farmsync_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "farmsync_server=debug,farmsync_backend=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting FarmSync Server");
    tracing::info!("Environment: {}", config.environment);

    // Seed the in-memory stores
    let seed = SeedData::load()?;
    tracing::info!(
        farms = seed.farms.len(),
        crops = seed.crops.len(),
        tasks = seed.tasks.len(),
        transactions = seed.transactions.len(),
        "Seed data loaded"
    );

    let port = config.server.port;
    let state = AppState::from_seed(seed, config);

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
