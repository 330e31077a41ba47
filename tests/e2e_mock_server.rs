//! E2E tests using the mock TonicPow server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use tonicpow::mock_server::{Fixtures, MockServer, MockState};
use tonicpow::{
    get_current_rate, get_user_by_email, Campaign, Create, Delete, Environment, Get, Goal, List,
    TonicPowClient, Update, User,
};

fn client_for(server: &MockServer) -> TonicPowClient {
    TonicPowClient::builder()
        .api_key(MockServer::API_KEY)
        .environment(Environment::custom("mock", server.api_url()))
        .build()
        .unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    let client = reqwest::Client::new();
    let result = client.get(format!("{url}/health")).send().await;

    assert!(result.is_err());
}

// =============================================================================
// User Workflows
// =============================================================================

#[tokio::test]
async fn test_user_create_lookup_update() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let created = User::create(
        &client,
        User {
            email: "fresh@tonicpow.com".to_string(),
            password: "hunter2".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(created.id > 0);
    assert!(created.password.is_empty());

    let found = get_user_by_email(&client, "fresh@tonicpow.com").await.unwrap();
    assert_eq!(found.id, created.id);

    let mut changes = found.clone();
    changes.first_name = "Fresh".to_string();
    let updated = changes.update(&client).await.unwrap();
    assert_eq!(updated.first_name, "Fresh");
    assert_eq!(updated.email, "fresh@tonicpow.com");

    server.shutdown().await;
}

#[tokio::test]
async fn test_duplicate_user_is_conflict() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = User::create(
        &client,
        User {
            email: "promoter@tonicpow.com".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "user already exists");
    assert_eq!(err.status_code(), Some(409));

    server.shutdown().await;
}

// =============================================================================
// Campaign Workflows
// =============================================================================

#[tokio::test]
async fn test_campaign_with_goals_roundtrip() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let campaign = Campaign::create(&client, Fixtures::campaign(0, 3, "Spring Sale"))
        .await
        .unwrap();

    let goal = Goal::create(&client, Fixtures::goal(0, campaign.id, "visit"))
        .await
        .unwrap();

    let fetched = Campaign::get(&client, campaign.id).await.unwrap();
    assert_eq!(fetched.title, "Spring Sale");
    assert_eq!(fetched.goal("visit").map(|g| g.id), Some(goal.id));

    Goal::delete(&client, goal.id).await.unwrap();
    let err = Goal::get(&client, goal.id).await.unwrap_err();
    assert_eq!(err.to_string(), "goal not found");

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_all_campaigns_walks_pages() {
    let state = (1..=30).fold(
        MockState::new().with_required_api_key(MockServer::API_KEY),
        |state, id| state.with_campaign(Fixtures::campaign(id, 3, &format!("Campaign {id}"))),
    );
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let campaigns = Campaign::list_all(&client, &Default::default()).await.unwrap();

    assert_eq!(campaigns.len(), 30);
    assert_eq!(campaigns[29].title, "Campaign 30");

    server.shutdown().await;
}

// =============================================================================
// Rates
// =============================================================================

#[tokio::test]
async fn test_rate_conversion() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let rate = get_current_rate(&client, "USD", 5.0).await.unwrap();

    assert_eq!(rate.currency, "usd");
    assert_eq!(rate.price_in_satoshis, 10_000_000);

    let err = get_current_rate(&client, "xyz", 1.0).await.unwrap_err();
    assert_eq!(err.to_string(), "currency not found");

    server.shutdown().await;
}

// =============================================================================
// State Mutation
// =============================================================================

#[tokio::test]
async fn test_state_changes_are_visible() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    server
        .state()
        .write()
        .await
        .users
        .insert(500, Fixtures::user(500, "late@tonicpow.com"));

    let user = User::get(&client, 500).await.unwrap();
    assert_eq!(user.email, "late@tonicpow.com");

    server.shutdown().await;
}
