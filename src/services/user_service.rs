//! User service for account CRUD.
//!
//! Follows the same contract as the menu and order services. Credential
//! validation and token issuance belong to the auth layer and are not
//! handled here.

use diesel_async::scoped_futures::ScopedFutureExt;
use tracing::{error, info, warn};

use crate::dto::{CreateOrUpdateUser, UserInfo};
use crate::error::{AppError, AppResult};
use crate::mapping;
use crate::repositories::UnitOfWork;

/// Service over the user aggregate.
#[derive(Clone)]
pub struct UserService {
    uow: UnitOfWork,
}

impl UserService {
    /// Creates a new UserService over the given unit of work.
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Registers a new account.
    ///
    /// An absent payload fails with `AppError::BadRequest`; an unmappable
    /// payload or an already-taken email returns `Ok(false)`.
    pub async fn register(&self, payload: Option<CreateOrUpdateUser>) -> AppResult<bool> {
        let Some(payload) = payload else {
            return Err(AppError::missing_payload("user"));
        };

        let Some(new_user) = mapping::map_to_user(&payload) else {
            return Ok(false);
        };

        let users = self.uow.users;

        self.uow
            .run(move |conn| {
                async move {
                    if users.find_by_email(conn, &new_user.email).await?.is_some() {
                        warn!("Email {} is already registered", new_user.email);
                        return Ok(false);
                    }

                    let user = users.add(conn, &new_user).await?;
                    info!("User with id {} registered", user.id);
                    Ok(true)
                }
                .scope_boxed()
            })
            .await
    }

    /// Lists every user as a read-only projection.
    pub async fn get_all_users(&self) -> AppResult<Vec<UserInfo>> {
        let users = self.uow.users;

        self.uow
            .run(move |conn| {
                async move {
                    let all = users.list_all(conn).await?;
                    Ok(all.iter().map(mapping::map_to_user_infos).collect())
                }
                .scope_boxed()
            })
            .await
    }

    /// Loads one user projection; a miss is `None`, not an error.
    pub async fn get_user_by_id(&self, user_id: i32) -> AppResult<Option<UserInfo>> {
        let users = self.uow.users;

        self.uow
            .run(move |conn| {
                async move {
                    let user = users.find_by_id(conn, user_id).await?;
                    Ok(user.as_ref().map(mapping::map_to_user_infos))
                }
                .scope_boxed()
            })
            .await
    }

    /// Updates an account from a payload.
    ///
    /// Same contract as menu updates: absent or unmappable payloads and
    /// missing targets are logged and reported as `Ok(false)`.
    pub async fn update_user(
        &self,
        user_id: i32,
        payload: Option<CreateOrUpdateUser>,
    ) -> AppResult<bool> {
        let Some(payload) = payload else {
            error!("Null argument from controller: user");
            return Ok(false);
        };

        let Some(changes) = mapping::map_to_user_changes(&payload) else {
            error!("Invalid payload for user with id {user_id}");
            return Ok(false);
        };

        let users = self.uow.users;

        self.uow
            .run(move |conn| {
                async move {
                    match users.update(conn, user_id, &changes).await {
                        Ok(_) => {
                            info!("User with id {user_id} updated");
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

    /// Deletes an account.
    ///
    /// A repository `NotFound` is logged and reported as `Ok(false)`.
    pub async fn delete_account(&self, user_id: i32) -> AppResult<bool> {
        let users = self.uow.users;

        self.uow
            .run(move |conn| {
                async move {
                    match users.delete(conn, user_id).await {
                        Ok(()) => {
                            info!("User with id {user_id} deleted");
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
