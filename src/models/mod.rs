//! Database models for the restaurant domain.

mod menu;
mod order;
mod recipe;
mod user;

pub use menu::{Menu, MenuItem, NewMenu, NewMenuItem, UpdateMenu};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderSingleItem, UpdateOrder};
pub use recipe::Recipe;
pub use user::{NewUser, UpdateUser, User};
