use axum::{
    extract::Request,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;

use crate::{
    auth::{self, AuthSession},
    error::AppError,
    models::{Page, ViewData},
    views,
};

/// Message shown when an anonymous visitor requests a protected path.
pub const CHALLENGE_MESSAGE: &str = "Please log in to access this page";

/// Page paths reachable without logging in.
pub const PUBLIC_PATHS: &[&str] = &[
    "/",
    "/about",
    "/blog-post",
    "/receipe-post",
    "/contact",
    "/elements",
    "/login",
    "/logout",
    "/favicon.ico",
];

/// Static asset directories under the public directory.
pub const PUBLIC_PREFIXES: &[&str] = &["/css/", "/js/", "/img/", "/fonts/"];

/// Extensions of static files that may sit at the root of the public directory.
pub const PUBLIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".png", ".jpg", ".jpeg", ".svg", ".ico", ".woff", ".woff2", ".ttf", ".map",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Challenge,
}

/// Rule
///
/// One way a request can be admitted. A request needs to satisfy only one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ExactPath(&'static [&'static str]),
    PathPrefix(&'static [&'static str]),
    Extension(&'static [&'static str]),
    LoggedIn,
}

/// The admission rules in evaluation order.
pub const RULES: &[Rule] = &[
    Rule::ExactPath(PUBLIC_PATHS),
    Rule::PathPrefix(PUBLIC_PREFIXES),
    Rule::Extension(PUBLIC_EXTENSIONS),
    Rule::LoggedIn,
];

impl Rule {
    pub fn admits(&self, path: &str, session: &AuthSession) -> bool {
        match self {
            Rule::ExactPath(paths) => paths.contains(&path),
            Rule::PathPrefix(prefixes) => prefixes.iter().any(|p| path.starts_with(p)),
            Rule::Extension(extensions) => extensions.iter().any(|e| path.ends_with(e)),
            Rule::LoggedIn => session.is_logged_in(),
        }
    }
}

/// decide
///
/// Pure policy: `Allow` as soon as any rule admits the request, `Challenge` otherwise.
pub fn decide(path: &str, session: &AuthSession) -> Decision {
    if RULES.iter().any(|rule| rule.admits(path, session)) {
        Decision::Allow
    } else {
        Decision::Challenge
    }
}

/// access_gate
///
/// Middleware wrapping every route. Loads the login state and either forwards the
/// request or renders the login page in place, with a normal 200 status, at the
/// requested URL. Never writes to the session.
pub async fn access_gate(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth = auth::current(&session).await?;
    let path = request.uri().path();

    match decide(path, &auth) {
        Decision::Allow => Ok(next.run(request).await),
        Decision::Challenge => {
            tracing::debug!(path, "challenging anonymous request");
            let view = ViewData::titled("Login").with_error(CHALLENGE_MESSAGE);
            Ok(Html(views::render(Page::Login, &view)?).into_response())
        }
    }
}
