//! Rate endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::api_error;
use crate::mock_server::state::SharedState;

const SATOSHIS_PER_BSV: f64 = 100_000_000.0;

/// Query parameters for a rate lookup.
#[derive(Debug, Default, Deserialize)]
pub struct RateQuery {
    pub amount: Option<f64>,
}

/// GET /v1/rates/{currency}?amount={amount}
pub async fn get_rate(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Path(currency): Path<String>,
    Query(query): Query<RateQuery>,
) -> Response {
    let state = state.read().await;
    let Some(rate) = state.get_rate(&currency) else {
        return api_error(StatusCode::NOT_FOUND, "currency not found", &method, &uri);
    };

    let mut rate = rate.clone();
    let amount = query.amount.unwrap_or(1.0);
    rate.currency_amount = amount;
    if rate.price > 0.0 {
        rate.price_in_satoshis = (amount / rate.price * SATOSHIS_PER_BSV).round() as i64;
    }

    (StatusCode::OK, Json(rate)).into_response()
}
