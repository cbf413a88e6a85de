//! Courses API server.
//!
//! Usage: `courses-server [port] [datasource]`. Without arguments the port and datasource come from
//! `COURSES_PORT` and `DATABASE_URL` (see `ServerConfig::from_env`); `memory` selects the in-process store.

use courses_api::{build_state, Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("courses_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?.with_args(std::env::args().skip(1))?;
    let state = build_state(&config).await?;
    let server = Server::bind(&config, state).await?;
    server.run().await?;
    tracing::info!("server stopped");
    Ok(())
}
