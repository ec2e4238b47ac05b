//! Repository layer for data access operations.
//!
//! Repositories are stateless: every method borrows the connection it runs
//! on, so any combination of repository calls can share one transaction via
//! [`UnitOfWork::run`].

mod menu_repo;
mod order_repo;
mod recipe_repo;
mod unit_of_work;
mod user_repo;

pub use menu_repo::MenuRepository;
pub use order_repo::{OrderAggregate, OrderRepository};
pub use recipe_repo::RecipeRepository;
pub use unit_of_work::UnitOfWork;
pub use user_repo::UserRepository;
