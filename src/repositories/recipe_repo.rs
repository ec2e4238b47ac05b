//! Recipe repository.
//!
//! Recipes are maintained by another part of the system; this layer only
//! reads them as existence-check targets for menu items.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::{AppError, AppResult};
use crate::models::Recipe;

/// Read-only repository over the `recipes` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeRepository;

impl RecipeRepository {
    /// Loads a recipe by id, or `None` on a miss.
    pub async fn find_by_id(
        &self,
        conn: &mut AsyncPgConnection,
        recipe_id: i32,
    ) -> AppResult<Option<Recipe>> {
        use crate::schema::recipes::dsl::*;

        recipes
            .filter(id.eq(recipe_id))
            .select(Recipe::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
