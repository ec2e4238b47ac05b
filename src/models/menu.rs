use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Menu model for reading from database.
///
/// A menu is the aggregate root owning its `MenuItem` rows; deleting a menu
/// cascades to them at the store level.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menus)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Menu {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub price: BigDecimal,
}

/// NewMenu model for inserting new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::menus)]
pub struct NewMenu {
    pub name: String,
    pub image_url: String,
    pub price: BigDecimal,
}

/// UpdateMenu model for partial updates with optional fields.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::menus)]
pub struct UpdateMenu {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<BigDecimal>,
}

/// Menu item row, owned by a `Menu` and pointing at an existing `Recipe`.
///
/// There is no uniqueness over `(menu_id, recipe_id)`: a menu may list the
/// same recipe more than once.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::menu_items)]
#[diesel(belongs_to(Menu))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItem {
    pub id: i32,
    pub menu_id: i32,
    pub recipe_id: i32,
}

/// NewMenuItem model for appending an item to a menu.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct NewMenuItem {
    pub menu_id: i32,
    pub recipe_id: i32,
}
