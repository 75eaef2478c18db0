use axum::{
    Router,
    extract::FromRef,
    handler::HandlerWithoutStateExt,
    http::HeaderName,
    middleware,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod auth;
pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod views;

pub mod routes;
use routes::{account, pages};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use error::AppError;
pub use repository::{CredentialState, PostgresCredentialStore};

/// AppState
///
/// The single, immutable container of shared services, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Read-only access to the `users` table.
    pub credentials: CredentialState,
    pub config: AppConfig,
}

impl FromRef<AppState> for CredentialState {
    fn from_ref(app_state: &AppState) -> CredentialState {
        app_state.credentials.clone()
    }
}

/// create_router
///
/// Assembles the site. Layers, innermost first:
/// 1. page and account routes, with static files and the home fallback behind them;
/// 2. the access gate, covering every route including static files;
/// 3. the session manager the gate and the login handlers read from;
/// 4. request-id and tracing.
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Static files first; anything not on disk falls through to the home page.
    let static_files =
        ServeDir::new(&config.public_dir).fallback(handlers::fallback.into_service());

    let site = Router::new()
        .merge(pages::page_routes())
        .merge(account::account_routes())
        .fallback_service(static_files)
        .layer(middleware::from_fn(gate::access_gate))
        .with_state(state);

    let site = auth::with_sessions(site, &config);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    site.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(trace_span_logger)
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(tower_http::LatencyUnit::Millis),
                    ),
            )
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

/// trace_span_logger
///
/// Opens the `http_request` span for `TraceLayer`, tagged with method, URI and the
/// `x-request-id` set by `SetRequestIdLayer`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
