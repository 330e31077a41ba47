//! TonicPow API client.
//!
//! Low-level client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::sync::Arc;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT,
};
use serde::Serialize;

use crate::config::{self, ClientBuilder, ClientOptions, API_KEY_HEADER};
use crate::error::{Result, TonicPowError};
use crate::response::{ApiError, StandardResponse};
use crate::transport::{HttpMethod, HttpTransport, TransportRequest};

/// Low-level TonicPow API client.
///
/// Holds a frozen [`ClientOptions`] snapshot and the HTTP transport.
/// Entity-specific operations are implemented via the `Get`, `Create`,
/// `Update`, `Delete` and `List` traits on model types.
///
/// This struct is cheaply cloneable; clones share the options and the
/// underlying transport, and may be used from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use tonicpow::TonicPowClient;
///
/// # fn example() -> tonicpow::Result<()> {
/// // Create from environment variables
/// let client = TonicPowClient::from_env()?;
///
/// // Or configure manually
/// let client = TonicPowClient::builder()
///     .api_key("your-api-key")
///     .environment_name("staging")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TonicPowClient {
    options: Arc<ClientOptions>,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for TonicPowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TonicPowClient")
            .field("api_url", &self.options.api_url)
            .field("environment", &self.options.environment)
            .finish_non_exhaustive()
    }
}

impl TonicPowClient {
    /// Start configuring a new client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a live-environment client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_key` is empty.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from environment variables.
    ///
    /// Uses `TONICPOW_API_KEY` for authentication and optionally
    /// `TONICPOW_ENVIRONMENT` to pick the environment (defaults to live).
    ///
    /// # Errors
    ///
    /// Returns an error if `TONICPOW_API_KEY` is not set or empty.
    pub fn from_env() -> Result<Self> {
        config::builder_from_env()?.build()
    }

    pub(crate) fn from_parts(options: Arc<ClientOptions>, http: Arc<dyn HttpTransport>) -> Self {
        Self { options, http }
    }

    /// Replace the HTTP transport.
    ///
    /// The options (including timeout and retry count) are left untouched;
    /// the new transport is used as-is.
    #[must_use]
    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http = transport;
        self
    }

    /// The options this client was built with.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Base URL of the active environment.
    pub fn api_url(&self) -> &str {
        &self.options.api_url
    }

    /// Name of the active environment.
    pub fn environment(&self) -> &str {
        &self.options.environment
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.options.user_agent
    }

    /// Make a GET request.
    pub async fn get(&self, endpoint: &str, expected_status: u16) -> Result<StandardResponse> {
        self.request::<()>(HttpMethod::Get, endpoint, None, expected_status)
            .await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, endpoint: &str, expected_status: u16) -> Result<StandardResponse> {
        self.request::<()>(HttpMethod::Delete, endpoint, None, expected_status)
            .await
    }

    /// Make a POST request with JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        expected_status: u16,
    ) -> Result<StandardResponse> {
        self.request(HttpMethod::Post, endpoint, Some(body), expected_status)
            .await
    }

    /// Make a PUT request with JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        expected_status: u16,
    ) -> Result<StandardResponse> {
        self.request(HttpMethod::Put, endpoint, Some(body), expected_status)
            .await
    }

    /// Send a request and classify the response.
    ///
    /// `endpoint` is appended verbatim to the environment's base URL.
    /// `data` is only sent for POST and PUT; a `None` payload on those
    /// methods is sent as the JSON literal `null`.
    ///
    /// When `expected_status` is non-zero and the response status differs,
    /// the body is decoded as an [`ApiError`] and returned as
    /// [`TonicPowError::Api`]. A zero `expected_status` accepts any status.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload or headers cannot be encoded, the
    /// transport fails, or the status does not match.
    #[tracing::instrument(skip(self, data), fields(environment = %self.options.environment))]
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        data: Option<&B>,
        expected_status: u16,
    ) -> Result<StandardResponse> {
        let request = self.build_request(method, endpoint, data)?;
        tracing::debug!(url = %request.url, "Sending request");

        let response = self.http.send(request).await?;
        tracing::debug!(status = response.status, "Received response");

        let mut standard = StandardResponse {
            body: response.body,
            error: None,
            status_code: response.status,
            tracing: None,
        };
        if self.options.request_tracing {
            standard.tracing = response.trace;
        }

        if expected_status > 0 && standard.status_code != expected_status {
            return Err(Self::unexpected_status(standard));
        }

        Ok(standard)
    }

    /// Assemble headers and body for an outgoing request.
    ///
    /// Custom headers are applied last and overwrite any computed header
    /// of the same name.
    fn build_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        data: Option<&B>,
    ) -> Result<TransportRequest> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            header_value(USER_AGENT.as_str(), &self.options.user_agent)?,
        );

        let mut body = None;
        if method.has_body() {
            let bytes = serde_json::to_vec(&data).map_err(TonicPowError::Serialize)?;
            headers.insert(CONTENT_LENGTH, HeaderValue::from(bytes.len()));
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            body = Some(bytes);
        }

        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(API_KEY_HEADER, &self.options.api_key)?,
        );

        for (name, values) in &self.options.custom_headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| TonicPowError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            for value in values {
                headers.insert(header_name.clone(), header_value(name, value)?);
            }
        }

        Ok(TransportRequest {
            method,
            url: format!("{}{}", self.options.api_url, endpoint),
            headers,
            body,
            trace: self.options.request_tracing,
        })
    }

    /// Convert a response with an unexpected status into an error.
    fn unexpected_status(mut response: StandardResponse) -> TonicPowError {
        match serde_json::from_slice::<ApiError>(&response.body) {
            Ok(api_error) => {
                tracing::debug!(
                    status = response.status_code,
                    code = api_error.code,
                    request_guid = %api_error.request_guid,
                    "API returned an error"
                );
                let message = api_error.message.clone();
                response.error = Some(api_error);
                TonicPowError::Api {
                    message,
                    response: Box::new(response),
                }
            }
            Err(source) => TonicPowError::ErrorResponse {
                source,
                response: Box::new(response),
            },
        }
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| TonicPowError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
