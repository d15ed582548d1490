//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router on `/` and `/{*path}` for GET and POST
//! - Wire up request tracing
//! - Bind to a listener and shut down gracefully on Ctrl-C

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use storage::MessageStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handlers::{get_messages, post_message};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
}

/// HTTP façade over a [`MessageStore`].
pub struct MessageServer {
    router: Router,
}

impl MessageServer {
    /// The store must already be initialized; the server never touches the schema.
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        let router = Self::build_router(AppState { store });
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(get_messages).post(post_message))
            .route("/{*path}", get(get_messages).post(post_message))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until Ctrl-C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
