//! HTTP client utilities and the shared request dispatcher.
//!
//! [`ServiceClient`] is the single POST-and-decode path used by every RsnChat
//! endpoint. It is generic over the decode target, so text and image calls
//! share one status mapping and one set of default headers.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Default request timeout in seconds (image generation can be slow).
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client configuration.
///
/// Configures transport behaviour for the underlying HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection establishment timeout
    pub connect_timeout: Duration,

    /// Enable per-request logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a base URL and make sure relative endpoint paths are appended to it.
///
/// `https://host/api/v1/user` becomes `https://host/api/v1/user/` so that
/// joining `gpt` yields `https://host/api/v1/user/gpt`.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if the URL cannot be parsed or is not http(s).
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|err| Error::ConfigError(format!("Invalid base URL `{raw}`: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::ConfigError(format!(
            "Base URL `{raw}` must be an absolute http(s) URL"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Builder for [`ServiceClient`].
#[derive(Debug, Clone)]
pub struct ServiceClientBuilder {
    base_url: Url,
    http_config: ClientConfig,
    user_agent: Option<String>,
    bearer_token: Option<SecretString>,
}

impl ServiceClientBuilder {
    /// Create a builder for the specified base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url.as_ref())?,
            http_config: ClientConfig::new(),
            user_agent: None,
            bearer_token: None,
        })
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: SecretString) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the token is not a valid header value
    /// or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ServiceClient> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.bearer_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| {
                    Error::ConfigError("API key contains invalid header characters".to_string())
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = ClientBuilder::new()
            .default_headers(headers)
            .timeout(self.http_config.timeout)
            .connect_timeout(self.http_config.connect_timeout)
            .gzip(self.http_config.enable_compression);

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(ServiceClient {
            http,
            base_url: self.base_url,
            enable_logging: self.http_config.enable_logging,
        })
    }
}

/// Raw response from a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

/// HTTP dispatcher bound to one base URL.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: Url,
    enable_logging: bool,
}

impl ServiceClient {
    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the path cannot be joined.
    pub fn build_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| Error::ConfigError(format!("Invalid endpoint path `{path}`: {err}")))
    }

    /// POST a JSON body and return the status and body text without
    /// interpreting either.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportError`] if the request cannot be sent or the
    /// body cannot be read.
    pub async fn post_raw<B>(&self, path: &str, body: &B) -> Result<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path)?;

        if self.enable_logging {
            info!(endpoint = %path, "Sending RsnChat request");
        }

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(endpoint = %path, status = status.as_u16(), bytes = body.len(), "Received RsnChat response");

        Ok(RawResponse { status, body })
    }

    /// POST a JSON body and decode a 200 response into `R`.
    ///
    /// Any other status is mapped through [`Error::from_status`].
    ///
    /// # Errors
    ///
    /// Returns a transport, decode or status-derived error.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let RawResponse { status, body } = self.post_raw(path, body).await?;

        if status != StatusCode::OK {
            if self.enable_logging {
                warn!(endpoint = %path, status = status.as_u16(), "RsnChat request failed");
            }
            return Err(Error::from_status(status, path, body));
        }

        serde_json::from_str::<R>(&body).map_err(|err| {
            Error::DecodeError(format!("Failed to parse response for `{path}`: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        success: String,
        message: String,
    }

    fn test_client(server: &MockServer) -> ServiceClient {
        ServiceClientBuilder::new(server.uri())
            .unwrap()
            .with_bearer_token(SecretString::from("test-key"))
            .with_user_agent("rsnchat-core-tests")
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(
            config.connect_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
        );
        assert!(config.enable_logging);
        assert!(config.enable_compression);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2))
            .with_logging(false)
            .with_compression(false);

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(!config.enable_logging);
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_parse_base_url_appends_slash() {
        let url = parse_base_url("https://api.rsnai.org/api/v1/user").unwrap();
        assert_eq!(url.as_str(), "https://api.rsnai.org/api/v1/user/");

        let url = parse_base_url("http://localhost:8080").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            parse_base_url("mailto:someone@example.com"),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        let client = ServiceClientBuilder::new("https://api.rsnai.org/api/v1/user")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            client.build_url("/gpt").unwrap().as_str(),
            "https://api.rsnai.org/api/v1/user/gpt"
        );
        assert_eq!(
            client.build_url("validate").unwrap().as_str(),
            "https://api.rsnai.org/api/v1/user/validate"
        );
    }

    #[test]
    fn test_build_rejects_unprintable_token() {
        let result = ServiceClientBuilder::new("http://localhost:8080")
            .unwrap()
            .with_bearer_token(SecretString::from("bad\nkey"))
            .build();
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[tokio::test]
    async fn post_json_decodes_ok_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gpt"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"prompt": "hello"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": "true", "message": "hi"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let echo: Echo = client
            .post_json("/gpt", &json!({"prompt": "hello"}))
            .await
            .unwrap();

        assert_eq!(
            echo,
            Echo {
                success: "true".to_string(),
                message: "hi".to_string()
            }
        );
    }

    #[tokio::test]
    async fn post_json_maps_status_codes() {
        let server = MockServer::start().await;
        for (route, status) in [("/a", 401), ("/b", 403), ("/c", 404), ("/d", 500)] {
            Mock::given(method("POST"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
                .mount(&server)
                .await;
        }

        let client = test_client(&server);
        let body = json!({"prompt": "x"});

        let err = client.post_json::<_, Echo>("/a", &body).await.unwrap_err();
        assert!(matches!(err, Error::AuthenticationError(_)));

        let err = client.post_json::<_, Echo>("/b", &body).await.unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));

        let err = client.post_json::<_, Echo>("/c", &body).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = client.post_json::<_, Echo>("/d", &body).await.unwrap_err();
        assert_eq!(
            err,
            Error::RequestFailed {
                status: 500,
                message: "nope".to_string()
            }
        );
    }

    #[tokio::test]
    async fn post_json_treats_other_success_codes_as_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gpt"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"success": "true", "message": "hi"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .post_json::<_, Echo>("/gpt", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[tokio::test]
    async fn post_json_reports_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gpt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .post_json::<_, Echo>("/gpt", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }

    #[tokio::test]
    async fn post_raw_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/validate"))
            .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let raw = client.post_raw("/validate", &json!({})).await.unwrap();
        assert_eq!(raw.status, StatusCode::IM_A_TEAPOT);
        assert_eq!(raw.body, "teapot");
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        // Nothing listens on port 1.
        let client = ServiceClientBuilder::new("http://127.0.0.1:1")
            .unwrap()
            .with_http_config(ClientConfig::new().with_connect_timeout(Duration::from_secs(1)))
            .build()
            .unwrap();

        let err = client
            .post_json::<_, Echo>("/gpt", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::TransportError(_)));
    }
}
