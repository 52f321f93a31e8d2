//! Asynchronous RsnChat client implementation.

use crate::models::{ImageRequest, ImageResult, TextResult};
use crate::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use rsnchat_core::client::{ClientConfig, RawResponse, ServiceClient, ServiceClientBuilder};
use rsnchat_core::config::RsnChatConfig;
use rsnchat_core::payload::Payload;
use rsnchat_core::types::{ImageModel, TextModel, DEFAULT_BASE_URL, VALIDATE_PATH};
use rsnchat_core::Error;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("rsnchat/", env!("CARGO_PKG_VERSION"));

/// Text the validation endpoint returns for an accepted key.
pub const VALIDATION_MARKER: &str = "API key validated";

/// Capability to generate text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Send `prompt` to a text endpoint.
    async fn generate_text(&self, model: TextModel, prompt: &str) -> Result<TextResult>;
}

/// Capability to generate images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Send an image request to an image endpoint.
    async fn generate_image(&self, model: ImageModel, request: &ImageRequest)
        -> Result<ImageResult>;
}

/// Builder for [`RsnChatClient`].
#[derive(Debug, Clone)]
pub struct RsnChatClientBuilder {
    api_key: String,
    default_base_url: String,
    base_urls: Vec<String>,
    timeout_secs: Option<u64>,
    http_config: ClientConfig,
}

impl RsnChatClientBuilder {
    /// Create a builder for the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_base_url: DEFAULT_BASE_URL.to_string(),
            base_urls: Vec::new(),
            timeout_secs: None,
            http_config: ClientConfig::new(),
        }
    }

    /// Start from a loaded [`RsnChatConfig`].
    ///
    /// The configured request timeout takes precedence over the one in
    /// [`with_http_config`](Self::with_http_config).
    #[must_use]
    pub fn from_config(config: &RsnChatConfig) -> Self {
        Self {
            api_key: config.api_key().expose_secret().to_string(),
            default_base_url: config.base_url.clone(),
            base_urls: Vec::new(),
            timeout_secs: Some(config.request_timeout_secs),
            http_config: ClientConfig::new(),
        }
    }

    /// Override the service base URL.
    ///
    /// At most one override is accepted; supplying a second one makes
    /// [`connect`](Self::connect) fail rather than silently picking one.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_urls.push(base_url.into());
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    fn into_config(self) -> Result<(RsnChatConfig, ClientConfig)> {
        if self.base_urls.len() > 1 {
            return Err(Error::ConfigError(format!(
                "too many base URL overrides: expected at most one, got {}",
                self.base_urls.len()
            )));
        }

        let base_url = self
            .base_urls
            .into_iter()
            .next()
            .unwrap_or(self.default_base_url);
        let mut config = RsnChatConfig::new(self.api_key)?.with_base_url(base_url);

        let mut http_config = self.http_config;
        if let Some(seconds) = self.timeout_secs {
            config = config.with_timeout(seconds);
            http_config.timeout = config.timeout();
        }

        config.check()?;
        Ok((config, http_config))
    }

    /// Build the client and validate the API key against the service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for an empty key or conflicting base URLs
    /// and [`Error::AuthenticationError`] if the service does not accept the key.
    pub async fn connect(self) -> Result<RsnChatClient> {
        let (config, http_config) = self.into_config()?;

        let inner = ServiceClientBuilder::new(&config.base_url)?
            .with_http_config(http_config)
            .with_user_agent(USER_AGENT)
            .with_bearer_token(config.api_key().clone())
            .build()?;

        let client = RsnChatClient {
            inner,
            api_key: config.api_key().clone(),
        };

        client.validate_key().await?;
        info!(base_url = %client.base_url(), "RsnChat API key validated");

        Ok(client)
    }
}

/// Asynchronous RsnChat client.
///
/// Immutable after construction and cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct RsnChatClient {
    inner: ServiceClient,
    api_key: SecretString,
}

impl std::fmt::Debug for RsnChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsnChatClient")
            .field("base_url", &self.inner.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl RsnChatClient {
    /// Connect to the default service origin and validate `api_key`.
    ///
    /// # Errors
    ///
    /// See [`RsnChatClientBuilder::connect`].
    pub async fn connect(api_key: impl Into<String>) -> Result<Self> {
        RsnChatClientBuilder::new(api_key).connect().await
    }

    /// Start a builder for `api_key`.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> RsnChatClientBuilder {
        RsnChatClientBuilder::new(api_key)
    }

    /// Connect using `RSNCHAT_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`RsnChatConfig::from_env`] and [`RsnChatClientBuilder::connect`].
    pub async fn from_env() -> Result<Self> {
        let config = RsnChatConfig::from_env()?;
        RsnChatClientBuilder::from_config(&config).connect().await
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// The API key this client authenticates with.
    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    // Accepts the key only on a 200 whose body contains VALIDATION_MARKER.
    async fn validate_key(&self) -> Result<()> {
        let mut payload = Payload::new();
        payload.push("key", self.api_key.expose_secret());

        let RawResponse { status, body } = self
            .inner
            .post_raw(VALIDATE_PATH, &payload)
            .await
            .map_err(|err| {
                warn!(error = %err, "RsnChat key validation request failed");
                Error::AuthenticationError(format!("could not validate API key: {err}"))
            })?;

        if !body.contains(VALIDATION_MARKER) {
            return Err(Error::AuthenticationError(format!(
                "API key was not validated (status {status})"
            )));
        }

        if status != StatusCode::OK {
            return Err(Error::AuthenticationError(format!(
                "invalid API key (status {status})"
            )));
        }

        Ok(())
    }

    async fn dispatch<R>(&self, path: &str, payload: &Payload) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        debug!(endpoint = %path, fields = payload.len(), "Dispatching RsnChat request");
        self.inner.post_json(path, payload).await
    }

    /// Send `prompt` to any text endpoint.
    ///
    /// # Errors
    ///
    /// Returns a transport, decode or status-derived error.
    pub async fn text(&self, model: TextModel, prompt: &str) -> Result<TextResult> {
        self.dispatch(model.path(), &Payload::prompt(prompt)).await
    }

    /// Send a request to any image endpoint.
    ///
    /// # Errors
    ///
    /// Returns a transport, decode or status-derived error.
    pub async fn image(&self, model: ImageModel, request: &ImageRequest) -> Result<ImageResult> {
        self.dispatch(model.path(), &request.to_payload(model)).await
    }

    /// Generate text with GPT.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn gpt(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Gpt, prompt).await
    }

    /// Generate text with OpenChat.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn openchat(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Openchat, prompt).await
    }

    /// Generate text with Bard.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn bard(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Bard, prompt).await
    }

    /// Generate text with Gemini.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn gemini(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Gemini, prompt).await
    }

    /// Generate text with Bing.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn bing(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Bing, prompt).await
    }

    /// Generate text with Llama.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn llama(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Llama, prompt).await
    }

    /// Generate text with Mixtral.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn mixtral(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Mixtral, prompt).await
    }

    /// Generate text with Claude.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn claude(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Claude, prompt).await
    }

    /// Generate code with Code Llama.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::text`].
    pub async fn codellama(&self, prompt: &str) -> Result<TextResult> {
        self.text(TextModel::Codellama, prompt).await
    }

    /// Generate an image with a Prodia checkpoint.
    ///
    /// `model` is usually a [`ProdiaModel`](crate::ProdiaModel) constant but
    /// any checkpoint token is accepted.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::image`].
    pub async fn prodia(
        &self,
        prompt: &str,
        negative_prompt: &str,
        model: impl AsRef<str>,
    ) -> Result<ImageResult> {
        let request = ImageRequest::new(prompt)
            .with_negative_prompt(negative_prompt)
            .with_model(model);
        self.image(ImageModel::Prodia, &request).await
    }

    /// Generate an image with Kandinsky.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::image`].
    pub async fn kandinsky(&self, prompt: &str, negative_prompt: &str) -> Result<ImageResult> {
        let request = ImageRequest::new(prompt).with_negative_prompt(negative_prompt);
        self.image(ImageModel::Kandinsky, &request).await
    }

    /// Generate an image with AbsoluteBeauty.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::image`].
    pub async fn absolutebeauty(
        &self,
        prompt: &str,
        negative_prompt: &str,
    ) -> Result<ImageResult> {
        let request = ImageRequest::new(prompt).with_negative_prompt(negative_prompt);
        self.image(ImageModel::Absolutebeauty, &request).await
    }

    /// Generate an image with Stable Diffusion XL.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::image`].
    pub async fn sdxl(&self, prompt: &str, negative_prompt: &str) -> Result<ImageResult> {
        let request = ImageRequest::new(prompt).with_negative_prompt(negative_prompt);
        self.image(ImageModel::Sdxl, &request).await
    }

    /// Generate an image with DALL-E.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::image`].
    pub async fn dalle(&self, prompt: &str) -> Result<ImageResult> {
        self.image(ImageModel::Dalle, &ImageRequest::new(prompt))
            .await
    }

    /// Generate an icon.
    ///
    /// # Errors
    ///
    /// Same as [`RsnChatClient::image`].
    pub async fn icon(&self, prompt: &str) -> Result<ImageResult> {
        self.image(ImageModel::Icon, &ImageRequest::new(prompt))
            .await
    }
}

#[async_trait]
impl TextGeneration for RsnChatClient {
    async fn generate_text(&self, model: TextModel, prompt: &str) -> Result<TextResult> {
        self.text(model, prompt).await
    }
}

#[async_trait]
impl ImageGeneration for RsnChatClient {
    async fn generate_image(
        &self,
        model: ImageModel,
        request: &ImageRequest,
    ) -> Result<ImageResult> {
        self.image(model, request).await
    }
}
