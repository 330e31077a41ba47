//! Client configuration.
//!
//! A [`ClientBuilder`] starts from the default [`ClientOptions`] and applies
//! overrides in call order; the last override touching a field wins.
//! The resulting options are frozen inside the client.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::client::TonicPowClient;
use crate::error::{Result, TonicPowError};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Current version segment for all endpoints.
pub const API_VERSION: &str = "v1";

/// Default request timeout.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of retries for failed transport attempts.
pub const DEFAULT_RETRY_COUNT: u32 = 2;

/// Default user agent for all requests.
pub const DEFAULT_USER_AGENT: &str = concat!("tonicpow/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Cookie carrying a logged-in user's session.
pub const SESSION_COOKIE: &str = "session_token";

const LIVE_URL: &str = "https://api.tonicpow.com/v1/";
const STAGING_URL: &str = "https://apistaging.tonicpow.com/v1/";
const DEVELOPMENT_URL: &str = "http://localhost:3000/v1/";

/// Custom headers: header name to its ordered values.
pub type CustomHeaders = BTreeMap<String, Vec<String>>;

/// An API environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Production.
    #[default]
    Live,
    /// Production-like testing.
    Staging,
    /// A locally running API instance.
    Development,
    /// Any other deployment.
    Custom { name: String, api_url: String },
}

impl Environment {
    /// A custom environment with its own base URL.
    ///
    /// The URL is used verbatim as the prefix of every endpoint, so it
    /// should end with the version segment and a trailing slash.
    pub fn custom(name: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self::Custom {
            name: name.into(),
            api_url: api_url.into(),
        }
    }

    /// Resolve an environment from free text.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything unrecognized resolves to [`Environment::Live`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "staging" | "beta" => Self::Staging,
            "development" | "local" | "dev" => Self::Development,
            _ => Self::Live,
        }
    }

    /// The environment label.
    pub fn name(&self) -> &str {
        match self {
            Self::Live => "live",
            Self::Staging => "staging",
            Self::Development => "development",
            Self::Custom { name, .. } => name,
        }
    }

    /// The base URL every endpoint is appended to.
    pub fn api_url(&self) -> &str {
        match self {
            Self::Live => LIVE_URL,
            Self::Staging => STAGING_URL,
            Self::Development => DEVELOPMENT_URL,
            Self::Custom { api_url, .. } => api_url,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings used for every request made by a client.
#[derive(Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub api_url: String,
    pub environment: String,
    pub custom_headers: CustomHeaders,
    pub http_timeout: Duration,
    pub request_tracing: bool,
    pub retry_count: u32,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        let environment = Environment::Live;
        Self {
            api_key: String::new(),
            api_url: environment.api_url().to_string(),
            environment: environment.name().to_string(),
            custom_headers: CustomHeaders::new(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            request_tracing: false,
            retry_count: DEFAULT_RETRY_COUNT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_url", &self.api_url)
            .field("environment", &self.environment)
            .field("custom_headers", &self.custom_headers.keys().collect::<Vec<_>>())
            .field("http_timeout", &self.http_timeout)
            .field("request_tracing", &self.request_tracing)
            .field("retry_count", &self.retry_count)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TonicPowClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use tonicpow::{Environment, TonicPowClient};
///
/// # fn example() -> tonicpow::Result<()> {
/// let client = TonicPowClient::builder()
///     .api_key("your-api-key")
///     .environment(Environment::Staging)
///     .http_timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    options: ClientOptions,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    /// Start from the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.options.api_key = api_key.into();
        self
    }

    /// Select an environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.options.api_url = environment.api_url().to_string();
        self.options.environment = environment.name().to_string();
        self
    }

    /// Select an environment by name (see [`Environment::from_name`]).
    pub fn environment_name(self, name: &str) -> Self {
        self.environment(Environment::from_name(name))
    }

    /// Set the request timeout. Default is 10 seconds.
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.options.http_timeout = timeout;
        self
    }

    /// Record timing information on every response. Disabled by default.
    pub fn request_tracing(mut self) -> Self {
        self.options.request_tracing = true;
        self
    }

    /// Set the retry count for failed transport attempts. Default is 2.
    pub fn retry_count(mut self, retries: u32) -> Self {
        self.options.retry_count = retries;
        self
    }

    /// Override the user agent. Default is the crate name and version.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    /// Set headers added to every outgoing request.
    ///
    /// Replaces any previously configured custom headers.
    pub fn custom_headers(mut self, headers: CustomHeaders) -> Self {
        self.options.custom_headers = headers;
        self
    }

    /// Send a user session as the `session_token` cookie on every request.
    ///
    /// Stored as the custom `cookie` header, so a later
    /// [`custom_headers`](Self::custom_headers) call drops it.
    pub fn session_token(mut self, token: &str) -> Self {
        self.options
            .custom_headers
            .insert("cookie".to_string(), vec![format!("{SESSION_COOKIE}={token}")]);
        self
    }

    /// Apply an arbitrary override to the options.
    pub fn configure(mut self, f: impl FnOnce(&mut ClientOptions)) -> Self {
        f(&mut self.options);
        self
    }

    /// Use the given transport instead of building the default one.
    pub fn http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the options and build the client.
    ///
    /// # Errors
    ///
    /// Returns [`TonicPowError::ConfigMissing`] if no API key was set, or an
    /// HTTP error if the default transport cannot be built.
    pub fn build(self) -> Result<TonicPowClient> {
        let Self { options, transport } = self;

        if options.api_key.is_empty() {
            return Err(TonicPowError::ConfigMissing(
                "missing an API Key".to_string(),
            ));
        }

        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                options.http_timeout,
                options.retry_count,
            )?),
        };

        tracing::debug!(
            environment = %options.environment,
            api_url = %options.api_url,
            "Built TonicPow client"
        );

        Ok(TonicPowClient::from_parts(Arc::new(options), transport))
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("options", &self.options)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

/// Read the API key and environment from the process environment.
pub(crate) fn builder_from_env() -> Result<ClientBuilder> {
    let api_key = env::var("TONICPOW_API_KEY").map_err(|_| {
        TonicPowError::ConfigMissing("TONICPOW_API_KEY environment variable not set".to_string())
    })?;

    let mut builder = ClientBuilder::new().api_key(api_key);
    if let Ok(name) = env::var("TONICPOW_ENVIRONMENT") {
        builder = builder.environment_name(&name);
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.api_url, "https://api.tonicpow.com/v1/");
        assert_eq!(options.environment, "live");
        assert_eq!(options.http_timeout, DEFAULT_HTTP_TIMEOUT);
        assert_eq!(options.retry_count, DEFAULT_RETRY_COUNT);
        assert!(!options.request_tracing);
        assert!(options.custom_headers.is_empty());
        assert!(options.user_agent.starts_with("tonicpow/"));
    }

    #[test]
    fn test_environment_aliases() {
        let cases = [
            ("live", Environment::Live),
            ("production", Environment::Live),
            ("PROD", Environment::Live),
            ("staging", Environment::Staging),
            ("  Beta ", Environment::Staging),
            ("STAGING", Environment::Staging),
            ("development", Environment::Development),
            ("Local", Environment::Development),
            ("\tdev\n", Environment::Development),
        ];
        for (input, expected) in cases {
            assert_eq!(Environment::from_name(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_unknown_environment_is_live() {
        for input in ["", "test", "stagingx", "mainnet"] {
            assert_eq!(Environment::from_name(input), Environment::Live);
        }
    }

    #[test]
    fn test_environment_urls_end_with_version() {
        for env in [
            Environment::Live,
            Environment::Staging,
            Environment::Development,
        ] {
            assert!(env.api_url().ends_with(&format!("/{API_VERSION}/")));
        }
    }

    #[test]
    fn test_custom_environment() {
        let env = Environment::custom("mock", "http://127.0.0.1:8080/v1/");
        assert_eq!(env.name(), "mock");
        assert_eq!(env.api_url(), "http://127.0.0.1:8080/v1/");
        assert_eq!(env.to_string(), "mock");
    }

    #[test]
    fn test_options_debug_hides_api_key() {
        let options = ClientOptions {
            api_key: "secret-key".to_string(),
            ..Default::default()
        };
        let debug = format!("{options:?}");
        assert!(debug.contains("api_url"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_session_token_is_cookie_header() {
        let builder = ClientBuilder::new()
            .custom_headers(CustomHeaders::from([(
                "x-partner".to_string(),
                vec!["acme".to_string()],
            )]))
            .session_token("abc");
        assert_eq!(
            builder.options.custom_headers["cookie"],
            vec!["session_token=abc".to_string()]
        );
        assert!(builder.options.custom_headers.contains_key("x-partner"));

        let replaced = builder.custom_headers(CustomHeaders::new());
        assert!(replaced.options.custom_headers.is_empty());
    }
}
