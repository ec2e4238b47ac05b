//! User repository for async database operations.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};

/// Stateless repository over the `users` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRepository;

impl UserRepository {
    /// Loads a user by id, or `None` on a miss.
    pub async fn find_by_id(
        &self,
        conn: &mut AsyncPgConnection,
        user_id: i32,
    ) -> AppResult<Option<User>> {
        use crate::schema::users::dsl::*;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Loads a user by email, or `None` on a miss.
    pub async fn find_by_email(
        &self,
        conn: &mut AsyncPgConnection,
        user_email: &str,
    ) -> AppResult<Option<User>> {
        use crate::schema::users::dsl::*;

        users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists all users.
    pub async fn list_all(&self, conn: &mut AsyncPgConnection) -> AppResult<Vec<User>> {
        use crate::schema::users::dsl::*;

        users
            .order(id.asc())
            .select(User::as_select())
            .load(conn)
            .await
            .map_err(AppError::from)
    }

    /// Stages a user insert; the id is assigned by the store.
    pub async fn add(&self, conn: &mut AsyncPgConnection, new_user: &NewUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;

        diesel::insert_into(users)
            .values(new_user)
            .returning(User::as_returning())
            .get_result(conn)
            .await
            .map_err(AppError::from)
    }

    /// Updates a user's fields.
    ///
    /// Fails with `AppError::NotFound` when the id does not exist.
    pub async fn update(
        &self,
        conn: &mut AsyncPgConnection,
        user_id: i32,
        changes: &UpdateUser,
    ) -> AppResult<User> {
        use crate::schema::users::dsl::*;

        diesel::update(users.filter(id.eq(user_id)))
            .set(changes)
            .returning(User::as_returning())
            .get_result(conn)
            .await
            .optional()?
            .ok_or_else(|| AppError::not_found("user", user_id))
    }

    /// Deletes a user.
    ///
    /// Fails with `AppError::NotFound` when the id does not exist.
    pub async fn delete(&self, conn: &mut AsyncPgConnection, user_id: i32) -> AppResult<()> {
        use crate::schema::users::dsl::*;

        let affected = diesel::delete(users.filter(id.eq(user_id)))
            .execute(conn)
            .await?;

        if affected == 0 {
            return Err(AppError::not_found("user", user_id));
        }
        Ok(())
    }
}
