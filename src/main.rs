use holocron::server::{config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Holocron v{}", env!("CARGO_PKG_VERSION"));

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::serve(&config, AppState::from(db)).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
