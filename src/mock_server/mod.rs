//! Mock TonicPow API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the TonicPow
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests,
//! checks the `api_key` header and answers failures with the API's error
//! shape.
//!
//! # Example
//!
//! ```ignore
//! use tonicpow::mock_server::MockServer;
//! use tonicpow::{Environment, Get, TonicPowClient, User};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = TonicPowClient::builder()
//!         .api_key(MockServer::API_KEY)
//!         .environment(Environment::custom("mock", server.api_url()))
//!         .build()
//!         .unwrap();
//!
//!     // Server comes with default fixtures
//!     let user = User::get(&client, 1).await.unwrap();
//!     assert_eq!(user.email, "promoter@tonicpow.com");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{MockState, SharedState};
