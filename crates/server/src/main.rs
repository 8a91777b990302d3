use std::sync::Arc;

use fintech_recommender::AppResources;
use fintech_recommender::api::start_webserver;
use fintech_recommender::config::load_config_or_panic;
use sea_orm::Database;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing() {
    let default_directives = "fintech_recommender=info,sea_orm=info,tower_http=info";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install().expect("Failed to install `color_eyre::install`");
    dotenvy::dotenv().ok();

    initialize_tracing();

    // Load config
    let config = Arc::new(load_config_or_panic());

    // Set up SeaORM database connection
    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .expect("Failed to connect to database"),
    );

    tracing::info!(
        default_page_size = config.pagination.default_page_size,
        max_page_size = config.pagination.max_page_size,
        "pagination configuration"
    );

    let resources = AppResources { db, config };
    start_webserver(resources).await?;
    Ok(())
}
