//! Async database connection pool implementation.
//!
//! Uses bb8 connection pool manager with diesel_async for PostgreSQL
//! connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;

use crate::config::DatabaseSettings;
use crate::error::AppError;

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap. Structures holding
/// AsyncDbPool can derive Clone without additional Arc wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Creates an async database connection pool from the database settings.
///
/// The connection URL comes from `DATABASE_URL` when set, falling back to
/// the configured `database.url`.
pub async fn establish_async_connection_pool(
    settings: &DatabaseSettings,
) -> Result<AsyncDbPool, AppError> {
    let database_url = settings.resolved_url().map_err(|err| AppError::Configuration {
        key: "database.url".to_string(),
        source: anyhow::Error::from(err),
    })?;

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(settings.max_connections)
        .min_idle(Some(settings.min_connections))
        .connection_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .build(manager)
        .await
        .map_err(|err| AppError::ConnectionPool {
            source: anyhow::Error::from(err),
        })?;

    Ok(pool)
}
