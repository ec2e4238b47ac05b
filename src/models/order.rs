use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Order model for reading from database.
///
/// An order is the aggregate root owning its `OrderItem` and
/// `OrderSingleItem` rows; deleting an order cascades to both collections.
/// `user_id` is a plain cross-aggregate reference, never cascaded.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub ordered_at: DateTime,
}

/// NewOrder model for inserting new records.
///
/// `ordered_at` is filled by the store default on insert.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub user_id: i32,
}

/// UpdateOrder model for partial updates.
#[derive(Debug, Clone, Copy, Default, AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder {
    pub user_id: Option<i32>,
}

/// Menu-based order line.
///
/// At most one row exists per `(order_id, menu_id)` pair; repeated adds
/// accumulate `quantity` instead of inserting a second row.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_id: i32,
    pub quantity: i32,
}

/// NewOrderItem model for inserting the first line of a `(order, menu)` pair.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub menu_id: i32,
    pub quantity: i32,
}

/// Recipe-based order line, ordered outside of any menu.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_single_items)]
#[diesel(belongs_to(Order))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderSingleItem {
    pub id: i32,
    pub order_id: i32,
    pub recipe_id: i32,
    pub quantity: i32,
}
