use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::Config,
    handler::handle_event,
    models::{event::InvocationEvent, health::HealthReport, response::ApiResponse},
};

/// Invocation path used by serverless runtime emulators.
pub const RUNTIME_INVOKE_PATH: &str = "/2015-03-31/functions/function/invocations";

pub struct AppState {
    config: Config,
}

pub fn build_router(config: Config) -> Router {
    let state = Arc::new(AppState { config });

    Router::new()
        .route("/health", get(health_check))
        .route("/invoke", post(invoke))
        .route(RUNTIME_INVOKE_PATH, post(invoke))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = build_router(config);

    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Intake server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Intake server stopped");

    Ok(())
}

async fn invoke(body: Bytes) -> Response {
    let event = match parse_event(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Rejected malformed invocation event");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(
                    e.to_string(),
                    "Invocation event must be valid JSON".to_string(),
                )),
            )
                .into_response();
        }
    };

    let response = handle_event(event).await;
    let status_code = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::OK);

    (status_code, Json(response)).into_response()
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = HealthReport::healthy(&state.config.service_name);

    (
        StatusCode::OK,
        Json(ApiResponse::success(health, "Service is healthy".to_string())),
    )
}

/// An empty body is treated as a direct invocation with no payload.
pub fn parse_event(body: &[u8]) -> Result<InvocationEvent, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(InvocationEvent::empty());
    }

    serde_json::from_slice(body)
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }

    info!("Shutdown signal received");
}
