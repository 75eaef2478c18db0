use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Account Router Module
///
/// The login state machine. `/login` and `/logout` are on the gate's public list,
/// so these handlers run for anonymous and logged-in clients alike.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        // GET /login renders the empty form; POST /login checks the submitted pair.
        .route(
            "/login",
            get(handlers::login_form).post(handlers::login_submit),
        )
        // GET /logout destroys the session and redirects to /.
        .route("/logout", get(handlers::logout))
}
