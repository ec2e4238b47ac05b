//! Data transfer objects.
//!
//! Create/update payloads accepted by the service layer (validated with
//! `validator`), and the read-only `*Info` projections returned to callers.
//! Projections never expose internal-only fields such as passwords.

mod menu;
mod order;
mod user;

pub use menu::{CreateOrUpdateMenu, MenuInfo, MenuItemInfo};
pub use order::{CreateOrUpdateOrder, OrderInfo, OrderItemInfo, OrderSingleItemInfo};
pub use user::{CreateOrUpdateUser, UserInfo};
