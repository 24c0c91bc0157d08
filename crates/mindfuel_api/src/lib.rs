//! HTTP surface for MindFuel.
//!
//! # Responsibility
//! - Route requests by exact path and method to the tracking use-cases.
//! - Own the process-wide store handle and the server lifecycle.
//!
//! # Invariants
//! - Handlers never panic on caller input; failures become `ApiError`.
//! - Cross-origin requests are accepted from any origin.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use log::{error, info};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServeError};
pub use state::AppState;

use routes::{
    habit_handler, index_handler, insights_handler, mood_handler, stats_handler,
    timeline_handler,
};

/// Builds the router with CORS applied; state is injected by the caller.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(index_handler))
        .route("/habit", post(habit_handler))
        .route("/mood", post(mood_handler))
        .route("/stats", get(stats_handler))
        .route("/timeline", get(timeline_handler))
        .route("/insights", get(insights_handler))
        .layer(cors)
        .with_state(state)
}

/// Opens the store, binds the listener and serves until SIGINT/SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    info!(
        "event=store_open module=api status=start path={}",
        config.db_path.display()
    );
    let state = AppState::open(&config.db_path)?;

    let listener = TcpListener::bind(config.bind).await?;
    info!(
        "event=server_start module=api status=ok address={}",
        listener.local_addr()?
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=api status=ok");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("event=shutdown module=api reason=ctrl_c"),
            Err(err) => {
                error!("event=shutdown module=api status=error error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("event=shutdown module=api reason=sigterm");
            }
            Err(err) => {
                error!("event=shutdown module=api status=error error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
