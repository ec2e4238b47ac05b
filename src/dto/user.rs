//! User-related payloads and projections.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for registering or updating a user account.
///
/// Credential hashing and verification live in the auth layer, not here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrUpdateUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,
}

/// Read-only projection of a user; the password is never projected.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateOrUpdateUser {
        CreateOrUpdateUser {
            email: "mario@example.com".to_string(),
            first_name: "Mario".to_string(),
            last_name: "Rossi".to_string(),
            password: "secret-password".to_string(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn malformed_email_fails() {
        let mut payload = valid_payload();
        payload.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn short_password_fails() {
        let mut payload = valid_payload();
        payload.password = "abc".to_string();
        assert!(payload.validate().is_err());
    }
}
