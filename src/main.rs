use anyhow::Context;
use foodisus::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    repository::{CredentialState, PostgresCredentialStore},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, initialises logging, opens the credential pool and serves the site.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Configuration (.env first, then the process environment)
    dotenv::dotenv().ok();
    let config = AppConfig::load().context("invalid configuration")?;

    // 2. Logging: RUST_LOG wins, otherwise debug for this crate.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "foodisus=debug,tower_http=info".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    if config.session_secret_is_default {
        tracing::warn!("SESSION_SECRET is not set; session cookies are signed with the built-in fallback secret");
    }

    // 3. Credential store. The pool connects lazily so public pages keep working
    // while the database is down; logins then fail as "Invalid login".
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(config.db.connect_options());

    let credentials = Arc::new(PostgresCredentialStore::new(pool)) as CredentialState;

    // 4. Router and server startup
    let port = config.port;
    let app = create_router(AppState {
        credentials,
        config,
    });

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    tracing::info!("Server is running on http://localhost:{}", port);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
