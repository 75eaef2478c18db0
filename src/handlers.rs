use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    auth,
    error::AppError,
    models::{LoginForm, Page, ViewData},
    repository::CredentialState,
    routes::pages::RouteEntry,
    views,
};

/// Shown when either login field is missing or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter username and password";

/// Shown for wrong credentials and for credential store failures alike.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid login";

const LOGIN_VIEW: ViewData = ViewData::titled("Login");

// --- Page Rendering ---

/// Renders a static route entry.
pub async fn render_entry(entry: RouteEntry) -> Result<Html<String>, AppError> {
    tracing::debug!(template = entry.page.template_name(), path = entry.path, "rendering page");
    Ok(Html(views::render(entry.page, &entry.view)?))
}

/// Catch-all for GET requests that match no page and no static file.
pub async fn fallback() -> Result<Html<String>, AppError> {
    render_entry(RouteEntry::FALLBACK).await
}

// --- Login Flow ---

/// GET /login
pub async fn login_form() -> Result<Html<String>, AppError> {
    render_login(LOGIN_VIEW)
}

/// POST /login
///
/// Validates presence of both fields, then looks the pair up in the credential store.
/// On a match the session is marked logged in and the client is sent to `/`.
/// Every other outcome re-renders the form and leaves the session untouched.
pub async fn login_submit(
    State(credentials): State<CredentialState>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    // An undecodable body is handled like an empty form.
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let Some(submitted) = form.credentials() else {
        return Ok(render_login(LOGIN_VIEW.with_error(MISSING_FIELDS_MESSAGE))?.into_response());
    };

    match credentials.find_user(&submitted).await {
        Ok(Some(_)) => {
            auth::sign_in(&session, &submitted).await?;
            tracing::info!(username = submitted.username(), "login succeeded");
            Ok(Redirect::to("/").into_response())
        }
        Ok(None) => {
            tracing::info!(username = submitted.username(), "login rejected");
            Ok(render_login(LOGIN_VIEW.with_error(INVALID_LOGIN_MESSAGE))?.into_response())
        }
        Err(e) => {
            tracing::error!(error = ?e, "Login error");
            Ok(render_login(LOGIN_VIEW.with_error(INVALID_LOGIN_MESSAGE))?.into_response())
        }
    }
}

/// GET /logout
///
/// Destroys the session and redirects home. A failure to destroy it is logged and
/// the redirect still happens.
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = auth::sign_out(&session).await {
        tracing::warn!(error = %e, "failed to destroy session on logout");
    }
    Redirect::to("/")
}

fn render_login(view: ViewData) -> Result<Html<String>, AppError> {
    Ok(Html(views::render(Page::Login, &view)?))
}
