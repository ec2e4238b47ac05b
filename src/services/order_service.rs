//! Order service for business logic operations.

use diesel_async::scoped_futures::ScopedFutureExt;
use tracing::{error, info, warn};

use crate::dto::{CreateOrUpdateOrder, OrderInfo};
use crate::error::{AppError, AppResult};
use crate::mapping;
use crate::models::NewOrderItem;
use crate::repositories::UnitOfWork;

/// Service over the order aggregate.
///
/// Shares the menu service's contract, with one extra rule: adding a menu
/// to an order accumulates quantity on the existing line instead of
/// inserting a second row.
#[derive(Clone)]
pub struct OrderService {
    uow: UnitOfWork,
}

impl OrderService {
    /// Creates a new OrderService over the given unit of work.
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Creates an order from a payload.
    ///
    /// An absent payload is logged and fails with `AppError::BadRequest`; a
    /// payload that maps to no entity returns `Ok(false)` without touching
    /// the store.
    pub async fn create(&self, payload: Option<CreateOrUpdateOrder>) -> AppResult<bool> {
        let Some(payload) = payload else {
            error!("Null argument from controller: order");
            return Err(AppError::missing_payload("order"));
        };

        let Some(new_order) = mapping::map_to_order(&payload) else {
            return Ok(false);
        };

        let orders = self.uow.orders;
        let order = self
            .uow
            .run(move |conn| async move { orders.add(conn, &new_order).await }.scope_boxed())
            .await?;

        info!("Order with id {} added", order.id);
        Ok(true)
    }

    /// Adds one serving of a menu to an order.
    ///
    /// If the order already has a line for this menu its quantity grows by
    /// one; otherwise a line with quantity 1 is inserted. Returns
    /// `Ok(false)` when the order or the menu does not exist.
    pub async fn add_order_item(&self, order_id: i32, menu_id: i32) -> AppResult<bool> {
        let orders = self.uow.orders;
        let menus = self.uow.menus;

        self.uow
            .run(move |conn| {
                async move {
                    if orders.find_by_id(conn, order_id).await?.is_none() {
                        warn!("Order with id {order_id} not found");
                        return Ok(false);
                    }

                    if menus.find_by_id(conn, menu_id).await?.is_none() {
                        warn!("Menu with id {menu_id} not found");
                        return Ok(false);
                    }

                    match orders.find_item(conn, order_id, menu_id).await? {
                        Some(item) => {
                            orders.increment_item_quantity(conn, item.id).await?;
                        }
                        None => {
                            orders
                                .add_item(
                                    conn,
                                    &NewOrderItem {
                                        order_id,
                                        menu_id,
                                        quantity: 1,
                                    },
                                )
                                .await?;
                        }
                    }

                    info!("Order with id {order_id} updated. Added menu with id {menu_id}");
                    Ok(true)
                }
                .scope_boxed()
            })
            .await
    }

    /// Removes the order line for `menu_id` outright, whatever its quantity.
    ///
    /// Returns `Ok(false)` when the order does not exist or has no line for
    /// that menu.
    pub async fn delete_order_item(&self, order_id: i32, menu_id: i32) -> AppResult<bool> {
        let orders = self.uow.orders;

        self.uow
            .run(move |conn| {
                async move {
                    if orders.find_by_id(conn, order_id).await?.is_none() {
                        warn!("Order with id {order_id} not found");
                        return Ok(false);
                    }

                    let Some(item) = orders.find_item(conn, order_id, menu_id).await? else {
                        warn!(
                            "Order with id {order_id} doesn't contain menu with id {menu_id}"
                        );
                        return Ok(false);
                    };

                    orders.remove_item(conn, item.id).await?;

                    info!("Order with id {order_id} updated. Removed menu with id {menu_id}");
                    Ok(true)
                }
                .scope_boxed()
            })
            .await
    }

    /// Deletes an order; both item collections go with it.
    ///
    /// A repository `NotFound` is logged and reported as `Ok(false)`.
    pub async fn delete(&self, order_id: i32) -> AppResult<bool> {
        let orders = self.uow.orders;

        self.uow
            .run(move |conn| {
                async move {
                    match orders.delete(conn, order_id).await {
                        Ok(()) => {
                            info!("Order with id {order_id} deleted");
                            Ok(true)
                        }
                        Err(err @ AppError::NotFound { .. }) => {
                            error!("{err}");
                            Ok(false)
                        }
                        Err(err) => Err(err),
                    }
                }
                .scope_boxed()
            })
            .await
    }

    /// Lists every order as a read-only projection.
    pub async fn get_all(&self) -> AppResult<Vec<OrderInfo>> {
        let orders = self.uow.orders;

        self.uow
            .run(move |conn| {
                async move {
                    let all = orders.list_all(conn).await?;
                    Ok(all
                        .iter()
                        .map(|a| mapping::map_to_order_infos(&a.order, &a.items, &a.single_items))
                        .collect())
                }
                .scope_boxed()
            })
            .await
    }

    /// Loads one order projection; a miss is `None`, not an error.
    pub async fn get_by_id(&self, order_id: i32) -> AppResult<Option<OrderInfo>> {
        let orders = self.uow.orders;

        self.uow
            .run(move |conn| {
                async move {
                    let aggregate = orders.find_by_id(conn, order_id).await?;
                    Ok(aggregate.map(|a| {
                        mapping::map_to_order_infos(&a.order, &a.items, &a.single_items)
                    }))
                }
                .scope_boxed()
            })
            .await
    }

    /// Updates an order's scalar fields from a payload.
    ///
    /// An absent payload is logged and fails with `AppError::BadRequest`;
    /// an unmappable one or a missing order is logged and reported as
    /// `Ok(false)`.
    pub async fn update(
        &self,
        order_id: i32,
        payload: Option<CreateOrUpdateOrder>,
    ) -> AppResult<bool> {
        let Some(payload) = payload else {
            error!("Null argument from controller: order");
            return Err(AppError::missing_payload("order"));
        };

        let Some(changes) = mapping::map_to_order_changes(&payload) else {
            error!("Invalid payload for order with id {order_id}");
            return Ok(false);
        };

        let orders = self.uow.orders;

        self.uow
            .run(move |conn| {
                async move {
                    match orders.update(conn, order_id, &changes).await {
                        Ok(_) => {
                            info!("Order with id {order_id} updated");
                            Ok(true)
                        }
                        Err(err @ AppError::NotFound { .. }) => {
                            error!("{err}");
                            Ok(false)
                        }
                        Err(err) => Err(err),
                    }
                }
                .scope_boxed()
            })
            .await
    }
}
