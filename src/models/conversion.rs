//! Conversion model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default};
use crate::traits::{Create, Get};

/// A goal conversion, paid out to the promoter after an optional delay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversion {
    #[serde(skip_serializing_if = "is_default")]
    pub amount: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub custom_dimensions: String,
    #[serde(skip_serializing_if = "is_default")]
    pub goal_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub goal_name: String,
    #[serde(rename = "ID", alias = "id", skip_serializing_if = "is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub payout_after: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: String,
    #[serde(skip_serializing_if = "is_default")]
    pub tx_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub user_id: u64,
}

/// Parameters for triggering a conversion.
///
/// A conversion needs a goal (by id or name) and someone to credit: either
/// a visitor session (`tncpw_session`) or a user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewConversion {
    #[serde(skip_serializing_if = "is_default")]
    pub goal_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub goal_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub tncpw_session: String,
    #[serde(skip_serializing_if = "is_default")]
    pub user_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub custom_dimensions: String,
    /// Additional amount (in satoshis) on top of the goal's payout rate.
    #[serde(skip_serializing_if = "is_default")]
    pub amount: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub delay_in_minutes: i64,
}

#[derive(Serialize)]
struct CancelConversion<'a> {
    id: u64,
    reason: &'a str,
}

#[async_trait]
impl Create for Conversion {
    type Params = NewConversion;

    #[tracing::instrument(skip(client))]
    async fn create(client: &TonicPowClient, params: NewConversion) -> Result<Self> {
        ensure(
            params.goal_id > 0 || !params.goal_name.is_empty(),
            "missing required attribute: goal_id or goal_name",
        )?;
        ensure(
            params.user_id > 0 || !params.tncpw_session.is_empty(),
            "missing required attribute: tncpw_session or user_id",
        )?;

        client.post("conversions", &params, 201).await?.json()
    }
}

#[async_trait]
impl Get for Conversion {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TonicPowClient, id: u64) -> Result<Self> {
        ensure(id > 0, "missing required attribute: id")?;

        client
            .get(&format!("conversions/details/{id}"), 200)
            .await?
            .json()
    }
}

/// Cancel a delayed conversion before it is paid out.
#[tracing::instrument(skip(client))]
pub async fn cancel_conversion(
    client: &TonicPowClient,
    id: u64,
    reason: &str,
) -> Result<Conversion> {
    ensure(id > 0, "missing required attribute: id")?;

    client
        .put("conversions/cancel", &CancelConversion { id, reason }, 200)
        .await?
        .json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_accepts_upper_case_id() {
        let conversion: Conversion =
            serde_json::from_str(r#"{"ID":12,"goal_id":3,"status":"delayed"}"#).unwrap();
        assert_eq!(conversion.id, 12);
        assert_eq!(conversion.status, "delayed");

        let lower: Conversion = serde_json::from_str(r#"{"id":13}"#).unwrap();
        assert_eq!(lower.id, 13);
    }

    #[test]
    fn test_conversion_writes_upper_case_id() {
        let conversion = Conversion {
            id: 12,
            ..Default::default()
        };
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json, serde_json::json!({ "ID": 12 }));
    }

    #[test]
    fn test_new_conversion_payload() {
        let params = NewConversion {
            goal_name: "signup".to_string(),
            tncpw_session: "abc123".to_string(),
            delay_in_minutes: 10,
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "goal_name": "signup",
                "tncpw_session": "abc123",
                "delay_in_minutes": 10
            })
        );
    }

    #[tokio::test]
    async fn test_create_requires_goal_and_target() {
        let client = TonicPowClient::new("key").unwrap();

        let err = Conversion::create(&client, NewConversion::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("goal_id"));

        let err = Conversion::create(
            &client,
            NewConversion {
                goal_id: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("tncpw_session"));
    }
}
