use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movieradar::config::Config;
use movieradar::infrastructure::AppState;
use movieradar::server;

#[tokio::main]
async fn main() {
    // Load .env first so RUST_LOG from it applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movieradar=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        tracing::error!("API keys not set in environment variables: {}", e);
        std::process::exit(1);
    }
    tracing::debug!("Loaded configuration: {:?}", config);

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize providers: {}", e);
            std::process::exit(1);
        }
    };

    let app = server::build_router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("MovieRadar backend listening on {}", addr);
    tracing::info!("Serving frontend from {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
