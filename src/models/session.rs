//! Visitor session model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default};
use crate::traits::{Create, Get};

/// The session of a visitor that arrived through a link.
///
/// `tncpw_session` is the session GUID used to attribute conversions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitorSession {
    #[serde(skip_serializing_if = "is_default")]
    pub campaign_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub custom_dimensions: String,
    #[serde(skip_serializing_if = "is_default")]
    pub ip_address: String,
    #[serde(skip_serializing_if = "is_default")]
    pub link_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub link_user_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub provider: String,
    #[serde(skip_serializing_if = "is_default")]
    pub referer: String,
    #[serde(skip_serializing_if = "is_default")]
    pub tncpw_session: String,
    #[serde(skip_serializing_if = "is_default")]
    pub user_agent: String,
}

#[async_trait]
impl Create for VisitorSession {
    type Params = VisitorSession;

    #[tracing::instrument(skip(client, session), fields(link_id = session.link_id))]
    async fn create(client: &TonicPowClient, session: VisitorSession) -> Result<Self> {
        ensure(session.link_id > 0, "missing required attribute: link_id")?;

        client.post("visitors/sessions", &session, 201).await?.json()
    }
}

#[async_trait]
impl Get for VisitorSession {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TonicPowClient, session_guid: String) -> Result<Self> {
        ensure(
            !session_guid.is_empty(),
            "missing required attribute: tncpw_session",
        )?;

        let path = format!(
            "visitors/sessions/details/{}",
            urlencoding::encode(&session_guid)
        );
        client.get(&path, 200).await?.json()
    }
}
