//! Entity endpoint tests.
//!
//! Uses wiremock to check each helper hits the right path with the right
//! method and decodes what comes back.

use tonicpow::{
    cancel_conversion, get_current_rate, get_user_by_email, Campaign, CampaignListQuery, Create,
    Delete, Environment, Get, Goal, List, TonicPowClient, TonicPowError, User, VisitorSession,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TonicPowClient {
    TonicPowClient::builder()
        .api_key("test-api-key")
        .environment(Environment::custom("mock", format!("{}/v1/", server.uri())))
        .build()
        .unwrap()
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_create_user_expects_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users"))
        .and(body_json(serde_json::json!({
            "email": "new@tonicpow.com",
            "first_name": "Ada"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 77,
            "email": "new@tonicpow.com",
            "first_name": "Ada",
            "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = User::create(
        &client_for(&server),
        User {
            email: "new@tonicpow.com".to_string(),
            first_name: "Ada".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(user.id, 77);
    assert_eq!(user.status, "active");
}

#[tokio::test]
async fn test_create_user_rejects_ok_instead_of_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "nothing created"
        })))
        .mount(&server)
        .await;

    let err = User::create(
        &client_for(&server),
        User {
            email: "new@tonicpow.com".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "nothing created");
}

#[tokio::test]
async fn test_get_user_by_id_and_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/details"))
        .and(query_param("id", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": 5, "email": "a@b.com" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/details"))
        .and(query_param("email", "a+b@c.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": 6, "email": "a+b@c.com" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(User::get(&client, 5).await.unwrap().email, "a@b.com");
    assert_eq!(get_user_by_email(&client, "a+b@c.com").await.unwrap().id, 6);
}

#[tokio::test]
async fn test_missing_id_fails_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = User::get(&client_for(&server), 0).await.unwrap_err();

    assert!(matches!(err, TonicPowError::InvalidArgument(_)));
}

// ============================================================================
// Campaigns and goals
// ============================================================================

#[tokio::test]
async fn test_list_campaigns_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/campaigns/list"))
        .and(query_param("current_page", "2"))
        .and(query_param("results_per_page", "2"))
        .and(query_param("sort_by", "balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "campaigns": [
                { "id": 3, "title": "Third" },
                { "id": 4, "title": "Fourth" }
            ],
            "current_page": 2,
            "results": 5,
            "results_per_page": 2
        })))
        .mount(&server)
        .await;

    let query = CampaignListQuery {
        sort_by: Some("balance".to_string()),
        sort_order: None,
    };
    let page = Campaign::list_page(&client_for(&server), &query, 2, 2)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].title, "Third");
    assert_eq!(page.results, Some(5));
    assert_eq!(page.total_pages(), Some(3));
    assert_eq!(page.next_page().map(|p| p.current_page), Some(3));
}

#[tokio::test]
async fn test_get_campaign_with_empty_expiry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/campaigns/details/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"id":7,"title":"Launch","expires_at":""}"#),
        )
        .mount(&server)
        .await;

    let campaign = Campaign::get(&client_for(&server), 7).await.unwrap();

    assert_eq!(campaign.title, "Launch");
    assert!(campaign.expires_at.is_empty());
    assert!(!campaign.is_expired());
}

#[tokio::test]
async fn test_delete_goal_uses_query_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/goals"))
        .and(query_param("id", "12"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Goal::delete(&client_for(&server), 12).await.unwrap();
}

// ============================================================================
// Conversions, rates and sessions
// ============================================================================

#[tokio::test]
async fn test_cancel_conversion_sends_reason() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/conversions/cancel"))
        .and(body_json(serde_json::json!({ "id": 31, "reason": "refund" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ID": 31,
            "status": "canceled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conversion = cancel_conversion(&client_for(&server), 31, "refund")
        .await
        .unwrap();

    assert_eq!(conversion.id, 31);
    assert_eq!(conversion.status, "canceled");
}

#[tokio::test]
async fn test_current_rate_lowercases_currency() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rates/usd"))
        .and(query_param("amount", "2.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "currency": "usd",
            "currency_amount": 2.5,
            "price": 50.0,
            "price_in_satoshis": 5000000
        })))
        .mount(&server)
        .await;

    let rate = get_current_rate(&client_for(&server), "USD", 2.5)
        .await
        .unwrap();

    assert_eq!(rate.price_in_satoshis, 5_000_000);
    assert_eq!(rate.currency_amount, 2.5);
}

#[tokio::test]
async fn test_get_visitor_session_by_guid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/visitors/sessions/details/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tncpw_session": "abc123",
            "link_id": 4,
            "campaign_id": 10
        })))
        .mount(&server)
        .await;

    let session = VisitorSession::get(&client_for(&server), "abc123".to_string())
        .await
        .unwrap();

    assert_eq!(session.link_id, 4);
    assert_eq!(session.campaign_id, 10);
}
