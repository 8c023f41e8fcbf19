//! User CRUD endpoints
//!
//! Handlers are thin: validate the body, call the decorated store, map
//! errors through `ApiError`. The cache policy lives behind the store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use userd_core::{User, UserStore};

use crate::http::error::ApiError;
use crate::models::{Email, Username, ValidationError};
use crate::state::AppState;

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Both fields are required; field-level rules live in the newtypes.
    fn validate(&self) -> Result<(Username, Email), ValidationError> {
        let username = self
            .username
            .as_deref()
            .ok_or(ValidationError::Missing { field: "username" })?;
        let email = self
            .email
            .as_deref()
            .ok_or(ValidationError::Missing { field: "email" })?;
        Ok((Username::new(username)?, Email::new(email)?))
    }
}

/// Update user request; at least one field must be present.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    fn validate(&self) -> Result<(Option<Username>, Option<Email>), ValidationError> {
        if self.username.is_none() && self.email.is_none() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        let username = self.username.as_deref().map(Username::new).transpose()?;
        let email = self.email.as_deref().map(Email::new).transpose()?;
        Ok((username, email))
    }
}

/// Confirmation body for update/delete
#[derive(Serialize)]
pub struct Confirmation {
    pub id: i64,
    pub message: &'static str,
}

/// POST /users - create a user
async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (username, email) = req.validate()?;

    let user = state
        .store()
        .insert(username.as_str(), email.as_str())
        .await?;

    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users - list all users (cached)
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store().list_all().await?;
    Ok(Json(users))
}

/// GET /users/{id} - fetch one user
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state.store().get_by_id(id).await?;
    Ok(Json(user))
}

/// PUT /users/{id} - update username and/or email
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<Confirmation>, ApiError> {
    let (username, email) = req.validate()?;

    state
        .store()
        .update(
            id,
            username.as_ref().map(Username::as_str),
            email.as_ref().map(Email::as_str),
        )
        .await?;

    tracing::info!(user_id = id, "user updated");
    Ok(Json(Confirmation {
        id,
        message: "user updated",
    }))
}

/// DELETE /users/{id} - remove a user
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Confirmation>, ApiError> {
    state.store().delete(id).await?;

    tracing::info!(user_id = id, "user deleted");
    Ok(Json(Confirmation {
        id,
        message: "user deleted",
    }))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_both_fields() {
        let req = CreateUserRequest {
            username: Some("alice".into()),
            email: None,
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Missing { field: "email" })
        ));

        let req = CreateUserRequest {
            username: None,
            email: Some("a@x.com".into()),
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Missing { field: "username" })
        ));
    }

    #[test]
    fn create_accepts_well_formed_body() {
        let req = CreateUserRequest {
            username: Some("alice".into()),
            email: Some("a@x.com".into()),
        };
        let (username, email) = req.validate().expect("valid");
        assert_eq!(username.as_str(), "alice");
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn create_rejects_malformed_email() {
        let req = CreateUserRequest {
            username: Some("alice".into()),
            email: Some("not-an-email".into()),
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::InvalidFormat { field: "email", .. })
        ));
    }

    #[test]
    fn update_with_no_fields_is_rejected() {
        let req = UpdateUserRequest {
            username: None,
            email: None,
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::NoFieldsToUpdate)
        ));
    }

    #[test]
    fn update_accepts_a_single_field() {
        let req = UpdateUserRequest {
            username: Some("alicia".into()),
            email: None,
        };
        let (username, email) = req.validate().expect("valid");
        assert_eq!(username.expect("present").as_str(), "alicia");
        assert!(email.is_none());
    }

    #[test]
    fn update_still_validates_present_fields() {
        let req = UpdateUserRequest {
            username: Some("   ".into()),
            email: None,
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Empty { field: "username" })
        ));
    }
}
