//! TonicPow API client library.
//!
//! A Rust library for the TonicPow REST API. A single generic dispatcher,
//! [`TonicPowClient::request`], turns a method, endpoint, payload and
//! expected status into a [`StandardResponse`] or a [`TonicPowError`];
//! entity types implement the [`Get`], [`Create`], [`Update`], [`Delete`]
//! and [`List`] traits on top of it.
//!
//! # Quick Start
//!
//! ```no_run
//! use tonicpow::{get_current_rate, Campaign, Get, TonicPowClient, User};
//!
//! #[tokio::main]
//! async fn main() -> tonicpow::Result<()> {
//!     // Create client from environment variables
//!     let client = TonicPowClient::from_env()?;
//!
//!     // Get a user by id
//!     let user = User::get(&client, 42).await?;
//!     println!("User: {}", user.email);
//!
//!     // Get a campaign
//!     let campaign = Campaign::get(&client, 7).await?;
//!     println!("Campaign: {}", campaign.title);
//!
//!     // Convert 1 USD
//!     let rate = get_current_rate(&client, "usd", 1.0).await?;
//!     println!("1 USD = {} sats", rate.price_in_satoshis);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! When the API answers with an unexpected status, the error's text is the
//! API's own message and the decoded error body is attached:
//!
//! ```no_run
//! # use tonicpow::{Get, TonicPowClient, User};
//! # async fn example(client: &TonicPowClient) {
//! match User::get(client, 42).await {
//!     Ok(user) => println!("found {}", user.email),
//!     Err(err) => {
//!         eprintln!("error: {err}");
//!         if let Some(api_error) = err.api_error() {
//!             eprintln!("request guid: {}", api_error.request_guid);
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! # Configuration
//!
//! [`TonicPowClient::from_env`] reads:
//!
//! - `TONICPOW_API_KEY` (required) - Your TonicPow API key
//! - `TONICPOW_ENVIRONMENT` (optional) - `live`, `staging` or `development`
//!   (aliases accepted, defaults to live)
//!
//! Everything else is set through [`TonicPowClient::builder`].

pub mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod pagination;
mod response;
mod traits;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::TonicPowClient;
pub use config::{
    ClientBuilder, ClientOptions, CustomHeaders, Environment, API_KEY_HEADER, API_VERSION,
    DEFAULT_HTTP_TIMEOUT, DEFAULT_RETRY_COUNT, DEFAULT_USER_AGENT, SESSION_COOKIE,
};
pub use error::{Result, TonicPowError};
pub use output::PrettyPrint;
pub use pagination::{Page, PaginationParams};
pub use response::{ApiError, StandardResponse, TraceInfo};
pub use transport::{
    HttpMethod, HttpTransport, ReqwestTransport, TransportRequest, TransportResponse,
};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update, DEFAULT_PAGE_SIZE};

// Re-export models
pub use models::{
    AdvertiserProfile, Campaign, CampaignListQuery, CampaignResults, Conversion, Goal, Link,
    NewConversion, Rate, User, VisitorSession,
};

// Re-export convenience functions
pub use models::{
    cancel_conversion, get_campaign_by_short_code, get_current_rate, get_links_by_user_id,
    get_user_by_email,
};
