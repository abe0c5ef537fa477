use std::{future::Future, net::SocketAddr};

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    eth::EthClient,
    service::auth::seed_default_users,
};

/// Build the Ethereum node client and log the network it reports
///
/// An unreachable node is logged but does not prevent startup; lookups fail per request until
/// the node becomes available.
pub async fn build_eth_client(config: &Config) -> Result<EthClient, Error> {
    let eth_client = EthClient::new(&config.eth_node_url)?;

    match eth_client.network_id().await {
        Ok(network_id) => tracing::info!(network_id = %network_id, "Connected to Ethereum node"),
        Err(e) => tracing::warn!(error = %e, "Ethereum node did not report its network ID"),
    }

    Ok(eth_client)
}

/// Connect to the database, run migrations and create the default users
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    seed_default_users(&db, bcrypt::DEFAULT_COST).await?;

    Ok(db)
}

/// Serve the API until `shutdown` resolves, then close the database connection
///
/// The connection is closed whether binding, serving or shutdown ends the server; a serve
/// error takes precedence over a close error.
pub async fn serve<F>(
    addr: SocketAddr,
    app: Router,
    db: DatabaseConnection,
    shutdown: F,
) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = serve_until(addr, app, shutdown).await;
    let closed = db.close().await;

    served?;
    closed?;

    Ok(())
}

async fn serve_until<F>(addr: SocketAddr, app: Router, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Resolves once the process is asked to stop via Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
