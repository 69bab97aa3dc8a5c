//! Handlers for the `/users` resource (registration and the current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ideabox_core::error::CoreError;
use ideabox_db::models::user::{CreateUser, UserResponse};
use ideabox_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "Username must be 1 to 50 characters"))]
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    /// Trim surrounding whitespace from the identity fields.
    fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password,
        }
    }
}

/// POST /api/v1/users
///
/// Register a new account. Duplicate email or username returns 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let input = input.normalized();
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            username: input.username,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: user.into() }),
    ))
}

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden("Inactive user".into())));
    }

    Ok(Json(DataResponse { data: user.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, username: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            username: username.into(),
            password: "long-enough".into(),
        }
        .normalized()
    }

    #[test]
    fn accepts_trimmed_identity() {
        let input = request("  hana@example.jp ", " hana ");
        assert!(input.validate().is_ok());
        assert_eq!(input.email, "hana@example.jp");
        assert_eq!(input.username, "hana");
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["hana", "@example.jp", "a@b@c.jp", ""] {
            let errors = request(email, "hana").validate().unwrap_err();
            assert!(errors.field_errors().contains_key("email"), "{email:?}");
        }
    }

    #[test]
    fn rejects_blank_or_long_username() {
        let too_long = "x".repeat(51);
        for username in ["   ", too_long.as_str()] {
            let errors = request("hana@example.jp", username).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("username"));
        }
    }
}
