//! Menu repository for async database operations.
//!
//! Loads and mutates the menu aggregate (a menu plus its owned items).

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::{AppError, AppResult};
use crate::models::{Menu, MenuItem, NewMenu, NewMenuItem, UpdateMenu};

/// Stateless repository over the `menus` and `menu_items` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuRepository;

impl MenuRepository {
    /// Loads a menu with its items, or `None` if no row matches. A miss is
    /// an ordinary result, never an error.
    pub async fn find_by_id(
        &self,
        conn: &mut AsyncPgConnection,
        menu_id: i32,
    ) -> AppResult<Option<(Menu, Vec<MenuItem>)>> {
        use crate::schema::menus::dsl::*;

        let menu = menus
            .filter(id.eq(menu_id))
            .select(Menu::as_select())
            .first(conn)
            .await
            .optional()?;

        match menu {
            Some(menu) => {
                let items = MenuItem::belonging_to(&menu)
                    .select(MenuItem::as_select())
                    .order(crate::schema::menu_items::id.asc())
                    .load(conn)
                    .await?;
                Ok(Some((menu, items)))
            }
            None => Ok(None),
        }
    }

    /// Lists every menu with its items.
    pub async fn list_all(
        &self,
        conn: &mut AsyncPgConnection,
    ) -> AppResult<Vec<(Menu, Vec<MenuItem>)>> {
        use crate::schema::menus::dsl::*;

        let all_menus = menus
            .order(id.asc())
            .select(Menu::as_select())
            .load(conn)
            .await?;

        let items = MenuItem::belonging_to(&all_menus)
            .order(crate::schema::menu_items::id.asc())
            .select(MenuItem::as_select())
            .load(conn)
            .await?;

        Ok(items
            .grouped_by(&all_menus)
            .into_iter()
            .zip(all_menus)
            .map(|(items, menu)| (menu, items))
            .collect())
    }

    /// Stages a menu insert; the store assigns the id.
    pub async fn add(&self, conn: &mut AsyncPgConnection, new_menu: &NewMenu) -> AppResult<Menu> {
        use crate::schema::menus::dsl::*;

        diesel::insert_into(menus)
            .values(new_menu)
            .returning(Menu::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a menu's scalar fields.
    ///
    /// Fails with `AppError::NotFound` when the id does not exist.
    pub async fn update(
        &self,
        conn: &mut AsyncPgConnection,
        menu_id: i32,
        changes: &UpdateMenu,
    ) -> AppResult<Menu> {
        use crate::schema::menus::dsl::*;

        diesel::update(menus.filter(id.eq(menu_id)))
            .set(changes)
            .returning(Menu::as_returning())
            .get_result(conn)
            .await
            .optional()?
            .ok_or_else(|| AppError::not_found("menu", menu_id))
    }

    /// Deletes a menu; the store cascades to its items.
    ///
    /// Fails with `AppError::NotFound` when the id does not exist.
    pub async fn delete(&self, conn: &mut AsyncPgConnection, menu_id: i32) -> AppResult<()> {
        use crate::schema::menus::dsl::*;

        let affected = diesel::delete(menus.filter(id.eq(menu_id)))
            .execute(conn)
            .await?;

        if affected == 0 {
            return Err(AppError::not_found("menu", menu_id));
        }
        Ok(())
    }

    /// Appends an item to a menu. No duplicate check is performed: one row
    /// is created per call, even for a recipe the menu already lists.
    pub async fn add_item(
        &self,
        conn: &mut AsyncPgConnection,
        new_item: &NewMenuItem,
    ) -> AppResult<MenuItem> {
        use crate::schema::menu_items::dsl::*;

        diesel::insert_into(menu_items)
            .values(new_item)
            .returning(MenuItem::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    /// Removes a single item row by its id.
    pub async fn remove_item(&self, conn: &mut AsyncPgConnection, item_id: i32) -> AppResult<()> {
        use crate::schema::menu_items::dsl::*;

        let affected = diesel::delete(menu_items.filter(id.eq(item_id)))
            .execute(conn)
            .await?;

        if affected == 0 {
            return Err(AppError::not_found("menu item", item_id));
        }
        Ok(())
    }
}
