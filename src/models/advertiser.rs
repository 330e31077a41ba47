//! Advertiser profile model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default};
use crate::traits::{Get, Update};

/// The public profile an advertiser runs campaigns under (child of a user).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvertiserProfile {
    #[serde(skip_serializing_if = "is_default")]
    pub homepage_url: String,
    #[serde(skip_serializing_if = "is_default")]
    pub icon_url: String,
    #[serde(skip_serializing_if = "is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub user_id: u64,
}

#[async_trait]
impl Get for AdvertiserProfile {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TonicPowClient, id: u64) -> Result<Self> {
        ensure(id > 0, "missing required attribute: id")?;

        client
            .get(&format!("advertisers/details/{id}"), 200)
            .await?
            .json()
    }
}

#[async_trait]
impl Update for AdvertiserProfile {
    #[tracing::instrument(skip(self, client), fields(id = self.id))]
    async fn update(&self, client: &TonicPowClient) -> Result<Self> {
        ensure(self.id > 0, "missing required attribute: id")?;

        client.put("advertisers", self, 200).await?.json()
    }
}
