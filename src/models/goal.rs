//! Goal model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default};
use crate::traits::{Create, Delete, Get, Update};

/// A conversion goal of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    #[serde(skip_serializing_if = "is_default")]
    pub campaign_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub max_per_promoter: i16,
    #[serde(skip_serializing_if = "is_default")]
    pub max_per_visitor: i16,
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub payout_rate: f64,
    #[serde(skip_serializing_if = "is_default")]
    pub payouts: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub payout_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub title: String,
}

#[async_trait]
impl Create for Goal {
    type Params = Goal;

    #[tracing::instrument(skip(client, goal), fields(campaign_id = goal.campaign_id))]
    async fn create(client: &TonicPowClient, goal: Goal) -> Result<Self> {
        ensure(goal.campaign_id > 0, "missing required attribute: campaign_id")?;
        ensure(!goal.name.is_empty(), "missing required attribute: name")?;

        client.post("goals", &goal, 201).await?.json()
    }
}

#[async_trait]
impl Get for Goal {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TonicPowClient, id: u64) -> Result<Self> {
        ensure(id > 0, "missing required attribute: id")?;

        client.get(&format!("goals/details/{id}"), 200).await?.json()
    }
}

#[async_trait]
impl Update for Goal {
    #[tracing::instrument(skip(self, client), fields(id = self.id))]
    async fn update(&self, client: &TonicPowClient) -> Result<Self> {
        ensure(self.id > 0, "missing required attribute: id")?;

        client.put("goals", self, 200).await?.json()
    }
}

#[async_trait]
impl Delete for Goal {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &TonicPowClient, id: u64) -> Result<()> {
        ensure(id > 0, "missing required attribute: id")?;

        client.delete(&format!("goals?id={id}"), 200).await?;
        Ok(())
    }
}
