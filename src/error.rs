use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// AppError
///
/// Failures that abort a request. Recoverable outcomes (missing login fields,
/// wrong credentials, an unreachable credential store) never reach this type;
/// they are turned into a re-rendered login form by the handlers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),

    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Detail stays in the logs; the client only gets the status line text.
        tracing::error!(error = %self, "request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
