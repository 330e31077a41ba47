//! Mock TonicPow API server.
//!
//! Provides an axum-based HTTP server that simulates the TonicPow API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::{MockState, SharedState};

/// A mock TonicPow API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: SharedState,
}

impl MockServer {
    /// API key the default server expects in the `api_key` header.
    pub const API_KEY: &'static str = "test-api-key";

    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Requests must carry [`MockServer::API_KEY`].
    pub async fn start() -> Self {
        Self::with_state(Self::default_state().with_required_api_key(Self::API_KEY)).await
    }

    /// Start a mock server with empty state and no API key check.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{addr}"),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server, without the API version.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Versioned API root, ready for `Environment::custom`.
    pub fn api_url(&self) -> String {
        format!("{}/v1/", self.url)
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let state = scenario
            .users
            .into_iter()
            .fold(MockState::new(), MockState::with_user);
        let state = scenario
            .campaigns
            .into_iter()
            .fold(state, MockState::with_campaign);
        let state = scenario.goals.into_iter().fold(state, MockState::with_goal);
        scenario.rates.into_iter().fold(state, MockState::with_rate)
    }

    /// Create the axum router with all routes.
    fn create_router(state: SharedState) -> Router {
        let api = Router::new()
            // User routes
            .route(
                "/users",
                post(handlers::create_user).put(handlers::update_user),
            )
            .route("/users/details", get(handlers::get_user))
            // Campaign routes
            .route("/campaigns", post(handlers::create_campaign))
            .route("/campaigns/details/:id", get(handlers::get_campaign))
            .route("/campaigns/list", get(handlers::list_campaigns))
            // Goal routes
            .route(
                "/goals",
                post(handlers::create_goal).delete(handlers::delete_goal),
            )
            .route("/goals/details/:id", get(handlers::get_goal))
            // Rate routes
            .route("/rates/:currency", get(handlers::get_rate))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                handlers::require_api_key,
            ));

        Router::new()
            .nest("/v1", api)
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
