//! HTTP transport abstraction.
//!
//! The dispatcher only depends on [`HttpTransport`]: send a method, URL,
//! headers and optional body, get back a status, headers and body.
//! [`ReqwestTransport`] is the default implementation and owns the retry
//! policy configured on the client.

use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::error::{Result, TonicPowError};
use crate::response::TraceInfo;

/// Initial wait between retries.
const RETRY_WAIT: Duration = Duration::from_millis(100);

/// Upper bound for the wait between retries.
const RETRY_MAX_WAIT: Duration = Duration::from_secs(2);

/// HTTP methods supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully built outgoing request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Record timing information for this request.
    pub trace: bool,
}

/// A response as returned by the transport.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Timing information, when the request asked for it.
    pub trace: Option<TraceInfo>,
}

/// Sends requests on behalf of a [`TonicPowClient`](crate::TonicPowClient).
///
/// Implementations must be safe to share between concurrent callers.
/// Returning `Err` means no usable response was received; HTTP error
/// statuses are regular responses.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Default transport backed by `reqwest`.
///
/// Retries transport-level failures (connect errors, timeouts) up to
/// `retry_count` extra times with exponential backoff. Responses are never
/// retried, whatever their status.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    retry_count: u32,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout and retry count.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration, retry_count: u32) -> Result<Self> {
        let http = Client::builder()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(TonicPowError::HttpError)?;

        Ok(Self::from_client(http, retry_count))
    }

    /// Wrap an already configured `reqwest` client.
    pub fn from_client(http: Client, retry_count: u32) -> Self {
        Self { http, retry_count }
    }

    /// Number of extra attempts made after a transport failure.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    fn backoff(attempt: u32) -> Duration {
        RETRY_WAIT
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
            .min(RETRY_MAX_WAIT)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let started = Instant::now();
        let mut attempt: u32 = 1;

        loop {
            let mut builder = self
                .http
                .request(request.method.into(), &request.url)
                .headers(request.headers.clone());
            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            let attempt_started = Instant::now();
            let response = match builder.send().await {
                Ok(response) => response,
                Err(err) if attempt <= self.retry_count && !err.is_builder() => {
                    let wait = Self::backoff(attempt);
                    tracing::warn!(
                        url = %request.url,
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        error = %err,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    continue;
                }
                Err(err) => return Err(TonicPowError::HttpError(err)),
            };

            let headers_received = Instant::now();
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let remote_addr = response.remote_addr();
            let body = response.bytes().await?.to_vec();

            let trace = request.trace.then(|| {
                let done = Instant::now();
                TraceInfo {
                    server_time: headers_received - attempt_started,
                    response_time: done - headers_received,
                    total_time: done - started,
                    request_attempt: attempt,
                    remote_addr,
                }
            });

            return Ok(TransportResponse {
                status,
                headers,
                body,
                trace,
            });
        }
    }
}
