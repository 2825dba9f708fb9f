//! Entry point: load config, create the database gateway, and run the server.

use sections_api::config::Config;
use sections_api::{create_app_with_limit, AppState, Database};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create the pool before accepting requests; connections still open on demand.
    let db = Database::from_config(&config.database);
    db.initialize();
    tracing::info!(
        host = %config.database.host,
        database = %config.database.name,
        "database pool ready"
    );

    let app = create_app_with_limit(AppState::new(db), config.max_upload_bytes);

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
