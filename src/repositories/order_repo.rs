//! Order repository for async database operations.
//!
//! Loads and mutates the order aggregate: the order row plus its menu-based
//! items and recipe-based single items.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::{AppError, AppResult};
use crate::models::{NewOrder, NewOrderItem, Order, OrderItem, OrderSingleItem, UpdateOrder};

/// Fully loaded order aggregate.
#[derive(Debug, Clone)]
pub struct OrderAggregate {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub single_items: Vec<OrderSingleItem>,
}

/// Stateless repository over the `orders`, `order_items`, and
/// `order_single_items` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderRepository;

impl OrderRepository {
    /// Loads an order with both item collections, or `None` on a miss.
    pub async fn find_by_id(
        &self,
        conn: &mut AsyncPgConnection,
        order_id: i32,
    ) -> AppResult<Option<OrderAggregate>> {
        use crate::schema::orders::dsl::*;

        let order = orders
            .filter(id.eq(order_id))
            .select(Order::as_select())
            .first(conn)
            .await
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = OrderItem::belonging_to(&order)
            .order(crate::schema::order_items::id.asc())
            .select(OrderItem::as_select())
            .load(conn)
            .await?;

        let single_items = OrderSingleItem::belonging_to(&order)
            .order(crate::schema::order_single_items::id.asc())
            .select(OrderSingleItem::as_select())
            .load(conn)
            .await?;

        Ok(Some(OrderAggregate {
            order,
            items,
            single_items,
        }))
    }

    /// Lists every order with both item collections.
    pub async fn list_all(&self, conn: &mut AsyncPgConnection) -> AppResult<Vec<OrderAggregate>> {
        use crate::schema::orders::dsl::*;

        let all_orders = orders
            .order_by(id.asc())
            .select(Order::as_select())
            .load(conn)
            .await?;

        let items = OrderItem::belonging_to(&all_orders)
            .order(crate::schema::order_items::id.asc())
            .select(OrderItem::as_select())
            .load(conn)
            .await?
            .grouped_by(&all_orders);

        let single_items = OrderSingleItem::belonging_to(&all_orders)
            .order(crate::schema::order_single_items::id.asc())
            .select(OrderSingleItem::as_select())
            .load(conn)
            .await?
            .grouped_by(&all_orders);

        Ok(all_orders
            .into_iter()
            .zip(items)
            .zip(single_items)
            .map(|((order, items), single_items)| OrderAggregate {
                order,
                items,
                single_items,
            })
            .collect())
    }

    /// Stages an order insert; id and timestamp are assigned by the store.
    pub async fn add(
        &self,
        conn: &mut AsyncPgConnection,
        new_order: &NewOrder,
    ) -> AppResult<Order> {
        use crate::schema::orders::dsl::*;

        diesel::insert_into(orders)
            .values(new_order)
            .returning(Order::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates an order's scalar fields.
    ///
    /// Fails with `AppError::NotFound` when the id does not exist.
    pub async fn update(
        &self,
        conn: &mut AsyncPgConnection,
        order_id: i32,
        changes: &UpdateOrder,
    ) -> AppResult<Order> {
        use crate::schema::orders::dsl::*;

        diesel::update(orders.filter(id.eq(order_id)))
            .set(changes)
            .returning(Order::as_returning())
            .get_result(conn)
            .await
            .optional()?
            .ok_or_else(|| AppError::not_found("order", order_id))
    }

    /// Deletes an order; the store cascades to both item collections.
    ///
    /// Fails with `AppError::NotFound` when the id does not exist.
    pub async fn delete(&self, conn: &mut AsyncPgConnection, order_id: i32) -> AppResult<()> {
        use crate::schema::orders::dsl::*;

        let affected = diesel::delete(orders.filter(id.eq(order_id)))
            .execute(conn)
            .await?;

        if affected == 0 {
            return Err(AppError::not_found("order", order_id));
        }
        Ok(())
    }

    /// Finds the order line for a `(order, menu)` pair, if any. At most one
    /// row can exist thanks to the unique index.
    pub async fn find_item(
        &self,
        conn: &mut AsyncPgConnection,
        for_order_id: i32,
        for_menu_id: i32,
    ) -> AppResult<Option<OrderItem>> {
        use crate::schema::order_items::dsl::*;

        order_items
            .filter(order_id.eq(for_order_id))
            .filter(menu_id.eq(for_menu_id))
            .select(OrderItem::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts the first line for a `(order, menu)` pair.
    pub async fn add_item(
        &self,
        conn: &mut AsyncPgConnection,
        new_item: &NewOrderItem,
    ) -> AppResult<OrderItem> {
        use crate::schema::order_items::dsl::*;

        diesel::insert_into(order_items)
            .values(new_item)
            .returning(OrderItem::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    /// Accumulates quantity on an existing order line.
    pub async fn increment_item_quantity(
        &self,
        conn: &mut AsyncPgConnection,
        item_id: i32,
    ) -> AppResult<OrderItem> {
        use crate::schema::order_items::dsl::*;

        diesel::update(order_items.filter(id.eq(item_id)))
            .set(quantity.eq(quantity + 1))
            .returning(OrderItem::as_returning())
            .get_result(conn)
            .await
            .optional()?
            .ok_or_else(|| AppError::not_found("order item", item_id))
    }

    /// Removes an order line outright, whatever its quantity.
    pub async fn remove_item(&self, conn: &mut AsyncPgConnection, item_id: i32) -> AppResult<()> {
        use crate::schema::order_items::dsl::*;

        let affected = diesel::delete(order_items.filter(id.eq(item_id)))
            .execute(conn)
            .await?;

        if affected == 0 {
            return Err(AppError::not_found("order item", item_id));
        }
        Ok(())
    }
}
