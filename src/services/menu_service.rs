//! Menu service for business logic operations.

use diesel_async::scoped_futures::ScopedFutureExt;
use tracing::{error, info};

use crate::dto::{CreateOrUpdateMenu, MenuInfo};
use crate::error::{AppError, AppResult};
use crate::mapping;
use crate::models::NewMenuItem;
use crate::repositories::UnitOfWork;

/// Service over the menu aggregate.
///
/// Every mutation runs inside one unit-of-work transaction. Misses on a
/// mutation target come back as `Ok(false)`; read misses as `None`.
#[derive(Clone)]
pub struct MenuService {
    uow: UnitOfWork,
}

impl MenuService {
    /// Creates a new MenuService over the given unit of work.
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Creates a menu from a payload.
    ///
    /// An absent payload is a caller bug and fails with
    /// `AppError::BadRequest`; a payload that maps to no entity returns
    /// `Ok(false)` without touching the store.
    pub async fn add_menu(&self, payload: Option<CreateOrUpdateMenu>) -> AppResult<bool> {
        let Some(payload) = payload else {
            return Err(AppError::missing_payload("menu"));
        };

        let Some(new_menu) = mapping::map_to_menu(&payload) else {
            return Ok(false);
        };

        let menus = self.uow.menus;
        let menu = self
            .uow
            .run(move |conn| async move { menus.add(conn, &new_menu).await }.scope_boxed())
            .await?;

        info!("Menu with id {} added", menu.id);
        Ok(true)
    }

    /// Appends a menu item referencing `recipe_id`.
    ///
    /// No duplicate check is performed: calling this twice for the same pair
    /// creates two rows. Returns `Ok(false)` when the menu or the recipe
    /// does not exist.
    pub async fn add_menu_item(&self, menu_id: i32, recipe_id: i32) -> AppResult<bool> {
        let menus = self.uow.menus;
        let recipes = self.uow.recipes;

        self.uow
            .run(move |conn| {
                async move {
                    if menus.find_by_id(conn, menu_id).await?.is_none() {
                        return Ok(false);
                    }

                    if recipes.find_by_id(conn, recipe_id).await?.is_none() {
                        return Ok(false);
                    }

                    menus
                        .add_item(conn, &NewMenuItem { menu_id, recipe_id })
                        .await?;

                    info!("Menu with id {menu_id} updated. Added recipe with id {recipe_id}");
                    Ok(true)
                }
                .scope_boxed()
            })
            .await
    }

    /// Removes the first menu item referencing `recipe_id`.
    ///
    /// Returns `Ok(false)` when the menu does not exist or lists no such
    /// recipe.
    pub async fn delete_menu_item(&self, menu_id: i32, recipe_id: i32) -> AppResult<bool> {
        let menus = self.uow.menus;

        self.uow
            .run(move |conn| {
                async move {
                    let Some((_, items)) = menus.find_by_id(conn, menu_id).await? else {
                        return Ok(false);
                    };

                    let Some(item) = items.iter().find(|item| item.recipe_id == recipe_id) else {
                        return Ok(false);
                    };

                    menus.remove_item(conn, item.id).await?;

                    info!("Menu with id {menu_id} updated. Removed recipe with id {recipe_id}");
                    Ok(true)
                }
                .scope_boxed()
            })
            .await
    }

    /// Deletes a menu; its items go with it.
    ///
    /// A repository `NotFound` is logged and reported as `Ok(false)`.
    pub async fn delete_menu(&self, menu_id: i32) -> AppResult<bool> {
        let menus = self.uow.menus;

        self.uow
            .run(move |conn| {
                async move {
                    match menus.delete(conn, menu_id).await {
                        Ok(()) => {
                            info!("Menu with id {menu_id} deleted");
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

    /// Lists every menu as a read-only projection.
    pub async fn get_all_menus(&self) -> AppResult<Vec<MenuInfo>> {
        let menus = self.uow.menus;

        self.uow
            .run(move |conn| {
                async move {
                    let all = menus.list_all(conn).await?;
                    Ok(all
                        .iter()
                        .map(|(menu, items)| mapping::map_to_menu_infos(menu, items))
                        .collect())
                }
                .scope_boxed()
            })
            .await
    }

    /// Loads one menu projection; a miss is `None`, not an error.
    pub async fn get_menu_by_id(&self, menu_id: i32) -> AppResult<Option<MenuInfo>> {
        let menus = self.uow.menus;

        self.uow
            .run(move |conn| {
                async move {
                    let aggregate = menus.find_by_id(conn, menu_id).await?;
                    Ok(aggregate
                        .map(|(menu, items)| mapping::map_to_menu_infos(&menu, &items)))
                }
                .scope_boxed()
            })
            .await
    }

    /// Updates a menu's scalar fields from a payload.
    ///
    /// Unlike [`MenuService::add_menu`], an absent or unmappable payload is
    /// logged and reported as `Ok(false)` instead of raising.
    pub async fn update_menu(
        &self,
        menu_id: i32,
        payload: Option<CreateOrUpdateMenu>,
    ) -> AppResult<bool> {
        let Some(payload) = payload else {
            error!("Null argument from controller: menu");
            return Ok(false);
        };

        let Some(changes) = mapping::map_to_menu_changes(&payload) else {
            error!("Invalid payload for menu with id {menu_id}");
            return Ok(false);
        };

        let menus = self.uow.menus;

        self.uow
            .run(move |conn| {
                async move {
                    match menus.update(conn, menu_id, &changes).await {
                        Ok(_) => {
                            info!("Menu with id {menu_id} updated");
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
