use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_catalog::infrastructure::AppState;
use product_catalog::{config, db, seed, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    let db = db::init_db(&config.database_url).await?;
    let state = AppState::new(db);

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(state.db()).await {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    let app = server::build_router(state, &config.cors_allowed_origins);
    server::serve(app, config.port).await?;

    Ok(())
}
