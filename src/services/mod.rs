//! Service layer for business logic operations.
//!
//! Services validate input, load an aggregate root, mutate its children or
//! scalar fields, and delegate persistence to the unit of work. Mutations
//! report domain-level misses as `Ok(false)`; only store-level faults
//! surface as errors.

mod menu_service;
mod order_service;
mod user_service;

pub use menu_service::MenuService;
pub use order_service::OrderService;
pub use user_service::UserService;

use crate::repositories::UnitOfWork;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the underlying pool uses `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub menus: MenuService,
    pub orders: OrderService,
    pub users: UserService,
}

impl Services {
    /// Creates a new Services instance over one unit of work.
    pub fn new(uow: UnitOfWork) -> Self {
        Self {
            menus: MenuService::new(uow.clone()),
            orders: OrderService::new(uow.clone()),
            users: UserService::new(uow),
        }
    }
}
