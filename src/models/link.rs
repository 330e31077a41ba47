//! Link model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default};
use crate::traits::{Create, Delete, Get};

/// A promoter's short link to a campaign.
///
/// Set `custom_short_code` on create to pick your own short code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(skip_serializing_if = "is_default")]
    pub campaign_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub custom_short_code: String,
    #[serde(skip_serializing_if = "is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub short_code: String,
    #[serde(skip_serializing_if = "is_default")]
    pub short_code_url: String,
    #[serde(skip_serializing_if = "is_default")]
    pub user_id: u64,
}

#[async_trait]
impl Create for Link {
    type Params = Link;

    #[tracing::instrument(skip(client))]
    async fn create(client: &TonicPowClient, link: Link) -> Result<Self> {
        ensure(link.campaign_id > 0, "missing required attribute: campaign_id")?;
        ensure(link.user_id > 0, "missing required attribute: user_id")?;

        client.post("links", &link, 201).await?.json()
    }
}

#[async_trait]
impl Get for Link {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TonicPowClient, id: u64) -> Result<Self> {
        ensure(id > 0, "missing required attribute: id")?;

        client.get(&format!("links/details/{id}"), 200).await?.json()
    }
}

#[async_trait]
impl Delete for Link {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &TonicPowClient, id: u64) -> Result<()> {
        ensure(id > 0, "missing required attribute: id")?;

        client.delete(&format!("links/{id}"), 200).await?;
        Ok(())
    }
}

/// Get every link owned by a user.
#[tracing::instrument(skip(client))]
pub async fn get_links_by_user_id(client: &TonicPowClient, user_id: u64) -> Result<Vec<Link>> {
    ensure(user_id > 0, "missing required attribute: user_id")?;

    client
        .get(&format!("links/user/{user_id}"), 200)
        .await?
        .json()
}
