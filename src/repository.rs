use crate::models::{Credentials, User};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// CredentialStore Trait
///
/// The read-only contract the login flow needs from the credential table.
/// Handlers only see this trait, so tests can substitute an in-memory store.
///
/// **Send + Sync + async_trait** are required to share `Arc<dyn CredentialStore>`
/// across Axum's task boundaries.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the user whose username AND password both equal the submitted values.
    ///
    /// `Ok(None)` means no such row; `Err` means the store could not be queried.
    async fn find_user(&self, credentials: &Credentials) -> Result<Option<User>, sqlx::Error>;
}

/// CredentialState
///
/// The concrete type used to share the credential store across the application state.
pub type CredentialState = Arc<dyn CredentialStore>;

/// PostgresCredentialStore
///
/// `CredentialStore` backed by the `users` table in PostgreSQL.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    /// find_user
    ///
    /// Plaintext equality on both columns, bound as parameters. Any number of matching
    /// rows counts as a match; the first one is returned.
    async fn find_user(&self, credentials: &Credentials) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT username, password FROM users WHERE username = $1 AND password = $2 LIMIT 1",
        )
        .bind(credentials.username())
        .bind(credentials.password())
        .fetch_optional(&self.pool)
        .await
    }
}
