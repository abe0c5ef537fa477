use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use txfetch::server::{
    config::Config, error::Error, model::app::AppState, router, service::auth::jwt::JwtAuth,
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txfetch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let eth_client = startup::build_eth_client(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState {
        db: db.clone(),
        eth_client,
        jwt: JwtAuth::new(&config.jwt_secret, config.jwt_duration),
        fetch_concurrency: config.fetch_concurrency,
    };
    let app = router::routes().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    startup::serve(addr, app, db, startup::shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

