//! Goal endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::api_error;
use crate::mock_server::state::SharedState;
use crate::Goal;

/// Query parameters for deleting a goal.
#[derive(Debug, Deserialize)]
pub struct DeleteGoalQuery {
    pub id: u64,
}

/// POST /v1/goals
pub async fn create_goal(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Json(goal): Json<Goal>,
) -> Response {
    if goal.name.is_empty() {
        return api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing required field: name",
            &method,
            &uri,
        );
    }

    let mut state = state.write().await;
    if !state.campaigns.contains_key(&goal.campaign_id) {
        return api_error(StatusCode::NOT_FOUND, "campaign not found", &method, &uri);
    }

    let created = state.create_goal(goal);
    (StatusCode::CREATED, Json(created)).into_response()
}

/// GET /v1/goals/details/{id}
pub async fn get_goal(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Path(id): Path<u64>,
) -> Response {
    match state.read().await.get_goal(id) {
        Some(goal) => (StatusCode::OK, Json(goal.clone())).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "goal not found", &method, &uri),
    }
}

/// DELETE /v1/goals?id={id}
pub async fn delete_goal(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Query(query): Query<DeleteGoalQuery>,
) -> Response {
    if state.write().await.delete_goal(query.id) {
        (StatusCode::OK, Json(serde_json::json!({ "deleted": true }))).into_response()
    } else {
        api_error(StatusCode::NOT_FOUND, "goal not found", &method, &uri)
    }
}
