//! Embedded schema migrations.
//!
//! Migrations are compiled into the binary and executed over a synchronous
//! wrapper around the async connection, on a blocking task.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{AppError, AppResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn establish_sync(
    database_url: &str,
) -> anyhow::Result<AsyncConnectionWrapper<AsyncPgConnection>> {
    AsyncConnectionWrapper::<AsyncPgConnection>::establish(database_url)
        .map_err(anyhow::Error::from)
}

async fn on_blocking_connection<T, F>(database_url: &str, f: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut AsyncConnectionWrapper<AsyncPgConnection>) -> anyhow::Result<T>
        + Send
        + 'static,
{
    let url = database_url.to_string();
    let result = tokio::task::spawn_blocking(move || {
        let mut conn = establish_sync(&url)?;
        f(&mut conn)
    })
    .await
    .map_err(|err| AppError::Internal {
        source: anyhow::Error::from(err),
    })?;

    result.map_err(AppError::from)
}

/// Applies every pending migration, returning the applied versions.
pub async fn run_pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    on_blocking_connection(database_url, |conn| {
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| anyhow::anyhow!(err))?;
        Ok(versions.into_iter().map(|v| v.to_string()).collect())
    })
    .await
}

/// Rolls back the most recently applied migration.
pub async fn revert_last_migration(database_url: &str) -> AppResult<String> {
    on_blocking_connection(database_url, |conn| {
        let version = conn
            .revert_last_migration(MIGRATIONS)
            .map_err(|err| anyhow::anyhow!(err))?;
        Ok(version.to_string())
    })
    .await
}

/// Lists migrations that have not been applied yet.
pub async fn pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    on_blocking_connection(database_url, |conn| {
        let pending = conn
            .pending_migrations(MIGRATIONS)
            .map_err(|err| anyhow::anyhow!(err))?;
        Ok(pending.iter().map(|m| m.name().to_string()).collect())
    })
    .await
}
