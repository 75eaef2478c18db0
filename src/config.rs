use std::{env, path::PathBuf};

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Fallback signing secret used when `SESSION_SECRET` is not set.
///
/// Anyone who knows this value can forge session cookies. It is kept so a fresh
/// checkout runs without setup; production deployments must override it.
pub const DEFAULT_SESSION_SECRET: &str = "fallback-secret-key";

/// AppConfig
///
/// Holds the application's entire configuration state. Loaded once at startup
/// and shared read-only through `AppState`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log format and the cookie `Secure` flag.
    pub env: Env,
    // Secret used to derive the session cookie signing key.
    pub session_secret: String,
    // True when `session_secret` is `DEFAULT_SESSION_SECRET`.
    pub session_secret_is_default: bool,
    pub db: DbConfig,
    // HTTP listen port.
    pub port: u16,
    // Directory served for `/css`, `/js`, `/img`, `/fonts` and root-level assets.
    pub public_dir: PathBuf,
}

/// Env
///
/// Defines the runtime context.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    Local,
    Production,
}

/// Connection parameters for the credential database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "postgres".to_string(),
            password: "admin".to_string(),
            name: "foodisus".to_string(),
            port: 5432,
        }
    }
}

impl DbConfig {
    /// Builds the sqlx connection options from the individual parts.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .port(self.port)
    }
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides the same values `load()` produces with an empty environment.
    /// Used for test state setup without touching process-wide env vars.
    fn default() -> Self {
        Self {
            env: Env::Local,
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
            session_secret_is_default: true,
            db: DbConfig::default(),
            port: 3000,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads every setting from the environment. All settings are optional and fall
    /// back to the values in `Default`; only a malformed port is rejected.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let (session_secret, session_secret_is_default) = match non_empty_var("SESSION_SECRET") {
            Some(secret) => (secret, false),
            None => (defaults.session_secret, true),
        };

        let db = DbConfig {
            host: non_empty_var("DB_HOST").unwrap_or(defaults.db.host),
            user: non_empty_var("DB_USER").unwrap_or(defaults.db.user),
            password: non_empty_var("DB_PASSWORD").unwrap_or(defaults.db.password),
            name: non_empty_var("DB_NAME").unwrap_or(defaults.db.name),
            port: port_var("DB_PORT", defaults.db.port)?,
        };

        Ok(Self {
            env,
            session_secret,
            session_secret_is_default,
            db,
            port: port_var("PORT", defaults.port)?,
            public_dir: non_empty_var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        })
    }
}

// Empty counts as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn port_var(name: &'static str, default: u16) -> Result<u16, ConfigError> {
    match non_empty_var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { var: name, value }),
        None => Ok(default),
    }
}
