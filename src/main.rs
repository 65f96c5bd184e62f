use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;

use session_catalog::adapters::http::{api_router, ApiKeyGate, SessionHandlers};
use session_catalog::adapters::postgres::{self, PostgresSessionRepository};
use session_catalog::config::AppConfig;
use session_catalog::{server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init(&config.server);

    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let repository = Arc::new(PostgresSessionRepository::new(pool));
    let handlers = SessionHandlers::new(repository);
    let gate = ApiKeyGate::new(config.auth.api_key.clone());

    let app = server::with_server_layers(api_router(handlers, gate), &config.server);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        environment = ?config.server.environment,
        "listening on {}",
        listener.local_addr()?
    );

    server::serve(listener, app).await?;
    tracing::info!("Server stopped");
    Ok(())
}
