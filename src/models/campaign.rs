//! Campaign model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default, AdvertiserProfile, Goal};
use crate::pagination::{Page, PaginationParams};
use crate::traits::{Create, Get, List, Update};

/// A TonicPow campaign (child of an advertiser profile).
///
/// Campaigns pay promoters per click and per goal conversion out of a
/// funded balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_profile: Option<AdvertiserProfile>,
    #[serde(skip_serializing_if = "is_default")]
    pub advertiser_profile_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub balance: f64,
    #[serde(skip_serializing_if = "is_default")]
    pub balance_satoshis: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub bot_protection: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub clicks: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub currency: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    /// RFC 3339 expiry, empty when the campaign never expires.
    #[serde(skip_serializing_if = "is_default")]
    pub expires_at: String,
    #[serde(skip_serializing_if = "is_default")]
    pub funding_address: String,
    #[serde(skip_serializing_if = "is_default")]
    pub goals: Vec<Goal>,
    #[serde(skip_serializing_if = "is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub image_url: String,
    #[serde(skip_serializing_if = "is_default")]
    pub links_created: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub pay_per_click_rate: f64,
    #[serde(skip_serializing_if = "is_default")]
    pub public_guid: String,
    #[serde(skip_serializing_if = "is_default")]
    pub target_url: String,
    #[serde(skip_serializing_if = "is_default")]
    pub title: String,
}

impl Campaign {
    /// The parsed expiry time. Empty or malformed values yield `None`.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expires_at)
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }

    /// Whether the campaign has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expiry().is_some_and(|at| at <= Utc::now())
    }

    /// Look up one of the campaign's goals by name.
    pub fn goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name == name)
    }
}

/// Sorting for campaign lists.
#[derive(Debug, Clone, Default)]
pub struct CampaignListQuery {
    /// Field to sort by (e.g. `balance`, `created_at`).
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
}

impl CampaignListQuery {
    fn to_query(&self) -> String {
        let mut query = String::new();
        if let Some(sort_by) = &self.sort_by {
            query.push_str(&format!("&sort_by={}", urlencoding::encode(sort_by)));
        }
        if let Some(sort_order) = &self.sort_order {
            query.push_str(&format!("&sort_order={}", urlencoding::encode(sort_order)));
        }
        query
    }
}

/// API response wrapper for listing campaigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignResults {
    pub campaigns: Vec<Campaign>,
    pub current_page: u32,
    /// Total number of campaigns across all pages.
    pub results: u64,
    pub results_per_page: u32,
}

#[async_trait]
impl Create for Campaign {
    type Params = Campaign;

    #[tracing::instrument(skip(client, campaign), fields(title = %campaign.title))]
    async fn create(client: &TonicPowClient, campaign: Campaign) -> Result<Self> {
        ensure(
            campaign.advertiser_profile_id > 0,
            "missing required attribute: advertiser_profile_id",
        )?;

        client.post("campaigns", &campaign, 201).await?.json()
    }
}

#[async_trait]
impl Get for Campaign {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TonicPowClient, id: u64) -> Result<Self> {
        ensure(id > 0, "missing required attribute: id")?;

        client
            .get(&format!("campaigns/details/{id}"), 200)
            .await?
            .json()
    }
}

#[async_trait]
impl Update for Campaign {
    #[tracing::instrument(skip(self, client), fields(id = self.id))]
    async fn update(&self, client: &TonicPowClient) -> Result<Self> {
        ensure(self.id > 0, "missing required attribute: id")?;

        client.put("campaigns", self, 200).await?.json()
    }
}

#[async_trait]
impl List for Campaign {
    type Query = CampaignListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &TonicPowClient,
        query: &Self::Query,
        page: u32,
        count: u32,
    ) -> Result<Page<Self>> {
        let params = PaginationParams::for_page(page, count);
        let path = format!("campaigns/list?{}{}", params.to_query(), query.to_query());

        let data: CampaignResults = client.get(&path, 200).await?.json()?;
        Ok(Page::new(data.campaigns, params, Some(data.results)))
    }
}

/// Get a campaign by the short code of one of its links.
#[tracing::instrument(skip(client))]
pub async fn get_campaign_by_short_code(
    client: &TonicPowClient,
    short_code: &str,
) -> Result<Campaign> {
    ensure(!short_code.is_empty(), "missing required attribute: short_code")?;

    let path = format!("campaigns/link/{}", urlencoding::encode(short_code));
    client.get(&path, 200).await?.json()
}
