//! Menu-related payloads and projections.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating or updating a menu.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrUpdateMenu {
    #[validate(length(min = 1, max = 255, message = "Menu name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub price: BigDecimal,
}

/// Read-only projection of a menu with its items.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuInfo {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub price: BigDecimal,
    pub items: Vec<MenuItemInfo>,
}

/// Read-only projection of a single menu item.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MenuItemInfo {
    pub id: i32,
    pub recipe_id: i32,
}
