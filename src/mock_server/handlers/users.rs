//! User endpoint handlers.

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::api_error;
use crate::mock_server::state::SharedState;
use crate::User;

/// Query parameters for looking up a user.
#[derive(Debug, Default, Deserialize)]
pub struct UserDetailsQuery {
    pub id: Option<u64>,
    pub email: Option<String>,
}

/// POST /v1/users
pub async fn create_user(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Json(user): Json<User>,
) -> Response {
    if user.email.is_empty() {
        return api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing required field: email",
            &method,
            &uri,
        );
    }

    let mut state = state.write().await;
    if state.find_user_by_email(&user.email).is_some() {
        return api_error(StatusCode::CONFLICT, "user already exists", &method, &uri);
    }

    let created = state.create_user(user);
    (StatusCode::CREATED, Json(created)).into_response()
}

/// GET /v1/users/details?id=|email=
pub async fn get_user(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Query(query): Query<UserDetailsQuery>,
) -> Response {
    let state = state.read().await;

    let user = match (query.id, query.email.as_deref()) {
        (Some(id), _) => state.get_user(id),
        (None, Some(email)) => state.find_user_by_email(email),
        (None, None) => {
            return api_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "missing required field: id or email",
                &method,
                &uri,
            )
        }
    };

    match user {
        Some(user) => (StatusCode::OK, Json(user.clone())).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "user not found", &method, &uri),
    }
}

/// PUT /v1/users
pub async fn update_user(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Json(changes): Json<User>,
) -> Response {
    let mut state = state.write().await;

    match state.update_user(changes) {
        Some(user) => (StatusCode::OK, Json(user.clone())).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "user not found", &method, &uri),
    }
}
