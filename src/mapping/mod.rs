//! Pure mapping between payloads, models, and projections.
//!
//! Mapping functions are total and never raise: an invalid payload maps to
//! `None` (callers treat that as "no entity, no side effects"), and absent
//! aggregates map to absent projections via `Option` combinators at the call
//! site.

mod menu;
mod order;
mod user;

pub use menu::{map_to_menu, map_to_menu_changes, map_to_menu_infos};
pub use order::{map_to_order, map_to_order_changes, map_to_order_infos};
pub use user::{map_to_user, map_to_user_changes, map_to_user_infos};
