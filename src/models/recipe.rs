use diesel::prelude::*;

/// Recipe model for reading from database.
///
/// Recipes are maintained elsewhere; this layer only reads them as lookup
/// targets for menu-item existence checks.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub dishes_type_id: i32,
}
