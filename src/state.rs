//! Shared application state.
//!
//! Bundles the service layer and the connection pool for whatever transport
//! layer ends up consuming them.

use crate::db::AsyncDbPool;
use crate::repositories::UnitOfWork;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since both Services and AsyncDbPool use `Arc`
/// internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from a database connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        let services = Services::new(UnitOfWork::new(pool.clone()));
        Self {
            services,
            db_pool: pool,
        }
    }
}
