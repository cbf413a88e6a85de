//! Server lifecycle. A `Server` owns its listener and router; callers decide when it starts and stops,
//! so several instances can run side by side in one process.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::routes::app_router;
use crate::state::AppState;
use crate::store::{ensure_database_exists, ensure_tables, PgCourseStore, PgReviewStore};
use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    /// Bind the configured address. Port 0 picks a free port; read it back with `local_addr`.
    pub async fn bind(config: &ServerConfig, state: AppState) -> Result<Self, AppError> {
        let addr = config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            app: app_router(state, config.max_body_bytes),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> io::Result<()> {
        tracing::info!("listening on {}", self.local_addr()?);
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown signal received");
            })
            .await
    }

    /// Serve on a background task until `ServerHandle::stop` is called.
    pub fn spawn(self) -> io::Result<ServerHandle> {
        let addr = self.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(self.listener, self.app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });
        tracing::info!("listening on {}", addr);
        Ok(ServerHandle {
            addr,
            shutdown_tx,
            task,
        })
    }
}

pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections, let in-flight requests finish, and wait for the task.
    pub async fn stop(self) -> io::Result<()> {
        let _ = self.shutdown_tx.send(());
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e)),
        }
    }
}

/// Build stores for the configured datasource: in-process for `memory`, Postgres otherwise.
pub async fn build_state(config: &ServerConfig) -> Result<AppState, AppError> {
    if config.uses_memory_store() {
        tracing::info!("using in-memory store");
        return Ok(AppState::in_memory());
    }
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_tables(&pool, &config.schema).await?;
    tracing::info!(schema = %config.schema, "connected to postgres");
    Ok(AppState::new(
        Arc::new(PgCourseStore::new(pool.clone(), &config.schema)),
        Arc::new(PgReviewStore::new(pool, &config.schema)),
    ))
}
