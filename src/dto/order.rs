//! Order-related payloads and projections.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating or updating an order.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CreateOrUpdateOrder {
    #[validate(range(min = 1, message = "User id must be positive"))]
    pub user_id: i32,
}

/// Read-only projection of an order with both item collections.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderInfo {
    pub id: i32,
    pub user_id: i32,
    pub ordered_at: String,
    pub items: Vec<OrderItemInfo>,
    pub single_items: Vec<OrderSingleItemInfo>,
}

/// Menu-based order line projection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OrderItemInfo {
    pub menu_id: i32,
    pub quantity: i32,
}

/// Recipe-based order line projection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OrderSingleItemInfo {
    pub recipe_id: i32,
    pub quantity: i32,
}
