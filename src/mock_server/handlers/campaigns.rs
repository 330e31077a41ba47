//! Campaign endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::api_error;
use crate::mock_server::state::SharedState;
use crate::{Campaign, CampaignResults};

/// Query parameters for listing campaigns.
#[derive(Debug, Default, Deserialize)]
pub struct ListCampaignsQuery {
    pub current_page: Option<u32>,
    pub results_per_page: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// POST /v1/campaigns
pub async fn create_campaign(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Json(campaign): Json<Campaign>,
) -> Response {
    if campaign.advertiser_profile_id == 0 {
        return api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing required field: advertiser_profile_id",
            &method,
            &uri,
        );
    }

    let created = state.write().await.create_campaign(campaign);
    (StatusCode::CREATED, Json(created)).into_response()
}

/// GET /v1/campaigns/details/{id}
pub async fn get_campaign(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    Path(id): Path<u64>,
) -> Response {
    match state.read().await.get_campaign(id) {
        Some(campaign) => (StatusCode::OK, Json(campaign)).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "campaign not found", &method, &uri),
    }
}

/// GET /v1/campaigns/list
pub async fn list_campaigns(
    State(state): State<SharedState>,
    Query(query): Query<ListCampaignsQuery>,
) -> Json<CampaignResults> {
    let mut campaigns = state.read().await.list_campaigns();

    if query.sort_by.as_deref() == Some("balance") {
        campaigns.sort_by_key(|c| c.balance_satoshis);
    }
    if query.sort_order.as_deref() == Some("desc") {
        campaigns.reverse();
    }

    let current_page = query.current_page.unwrap_or(1).max(1);
    let results_per_page = query.results_per_page.unwrap_or(20).max(1);
    let results = campaigns.len() as u64;

    let skip = ((current_page - 1) * results_per_page) as usize;
    let campaigns = campaigns
        .into_iter()
        .skip(skip)
        .take(results_per_page as usize)
        .collect();

    Json(CampaignResults {
        campaigns,
        current_page,
        results,
        results_per_page,
    })
}
