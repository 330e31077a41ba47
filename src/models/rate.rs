//! Exchange rates.

use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default};

/// The current BSV price in a currency, and an optional converted amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rate {
    #[serde(skip_serializing_if = "is_default")]
    pub currency: String,
    #[serde(skip_serializing_if = "is_default")]
    pub currency_amount: f64,
    #[serde(skip_serializing_if = "is_default")]
    pub currency_last_updated: String,
    #[serde(skip_serializing_if = "is_default")]
    pub currency_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub price: f64,
    #[serde(skip_serializing_if = "is_default")]
    pub price_in_satoshis: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub rate_last_updated: String,
}

/// Get the current rate for a currency, converting `amount` along the way.
#[tracing::instrument(skip(client))]
pub async fn get_current_rate(
    client: &TonicPowClient,
    currency: &str,
    amount: f64,
) -> Result<Rate> {
    ensure(!currency.is_empty(), "missing required attribute: currency")?;

    let path = format!(
        "rates/{}?amount={}",
        urlencoding::encode(&currency.to_lowercase()),
        amount
    );
    client.get(&path, 200).await?.json()
}
