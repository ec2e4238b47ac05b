use validator::Validate;

use crate::dto::{CreateOrUpdateUser, UserInfo};
use crate::models::{NewUser, UpdateUser, User};

/// Maps a registration payload to an insertable user; `None` when the
/// payload fails validation.
pub fn map_to_user(payload: &CreateOrUpdateUser) -> Option<NewUser> {
    payload.validate().ok()?;
    Some(NewUser {
        email: payload.email.clone(),
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        password: payload.password.clone(),
    })
}

/// Maps an update payload to a changeset.
pub fn map_to_user_changes(payload: &CreateOrUpdateUser) -> Option<UpdateUser> {
    payload.validate().ok()?;
    Some(UpdateUser {
        email: Some(payload.email.clone()),
        first_name: Some(payload.first_name.clone()),
        last_name: Some(payload.last_name.clone()),
        password: Some(payload.password.clone()),
    })
}

/// Projects a user into the output shape, omitting the password.
pub fn map_to_user_infos(user: &User) -> UserInfo {
    UserInfo {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        created_at: user.created_at.to_jiff().to_string(),
    }
}
