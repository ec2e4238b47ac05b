use validator::Validate;

use crate::dto::{CreateOrUpdateOrder, OrderInfo, OrderItemInfo, OrderSingleItemInfo};
use crate::models::{NewOrder, Order, OrderItem, OrderSingleItem, UpdateOrder};

/// Maps a create payload to an insertable order; `None` when the payload does
/// not reference a plausible user. The order timestamp is filled by the store.
pub fn map_to_order(payload: &CreateOrUpdateOrder) -> Option<NewOrder> {
    payload.validate().ok()?;
    Some(NewOrder {
        user_id: payload.user_id,
    })
}

/// Maps an update payload to a changeset.
pub fn map_to_order_changes(payload: &CreateOrUpdateOrder) -> Option<UpdateOrder> {
    payload.validate().ok()?;
    Some(UpdateOrder {
        user_id: Some(payload.user_id),
    })
}

/// Projects an order with both item collections into the output shape.
pub fn map_to_order_infos(
    order: &Order,
    items: &[OrderItem],
    single_items: &[OrderSingleItem],
) -> OrderInfo {
    OrderInfo {
        id: order.id,
        user_id: order.user_id,
        ordered_at: order.ordered_at.to_jiff().to_string(),
        items: items
            .iter()
            .map(|item| OrderItemInfo {
                menu_id: item.menu_id,
                quantity: item.quantity,
            })
            .collect(),
        single_items: single_items
            .iter()
            .map(|item| OrderSingleItemInfo {
                recipe_id: item.recipe_id,
                quantity: item.quantity,
            })
            .collect(),
    }
}
