//! HTTP request handlers for the mock server.

pub mod campaigns;
pub mod goals;
pub mod rates;
pub mod users;

pub use campaigns::*;
pub use goals::*;
pub use rates::*;
pub use users::*;

use std::sync::atomic::{AtomicU64, Ordering};

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::SharedState;
use crate::{ApiError, API_KEY_HEADER};

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Build an error response in the API's error envelope.
pub fn api_error(status: StatusCode, message: &str, method: &Method, uri: &Uri) -> Response {
    let guid = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let body = ApiError {
        code: i64::from(status.as_u16()),
        data: String::new(),
        ip_address: "127.0.0.1".to_string(),
        method: method.to_string(),
        message: message.to_string(),
        request_guid: format!("mock-{guid:08}"),
        url: uri.to_string(),
    };
    (status, Json(body)).into_response()
}

/// Reject requests whose `api_key` header doesn't match the configured key.
pub async fn require_api_key(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let required = state.read().await.required_api_key.clone();

    if let Some(required) = required {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        if provided != Some(required.as_str()) {
            return api_error(
                StatusCode::UNAUTHORIZED,
                "api key is missing or invalid",
                request.method(),
                request.uri(),
            );
        }
    }

    next.run(request).await
}
