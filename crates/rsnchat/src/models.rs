//! RsnChat request and response models.

use rsnchat_core::payload::Payload;
use rsnchat_core::types::ImageModel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Response returned by the text generation endpoints.
///
/// Fields the service leaves out decode as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextResult {
    /// Success flag as reported by the service (`"true"` on success).
    #[serde(default)]
    pub success: String,
    /// Generated text.
    #[serde(default)]
    pub message: String,
}

impl TextResult {
    /// Whether the service reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success.eq_ignore_ascii_case("true")
    }
}

/// Response returned by the image generation endpoints.
///
/// Most endpoints fill `image`. Prodia answers with `imageUrl` and `base64`
/// instead, so every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageResult {
    /// Success flag as reported by the service (`"true"` on success).
    #[serde(default)]
    pub success: String,
    /// Image payload; base64 data or a URL depending on the endpoint.
    /// Empty when the service did not send one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Hosted image URL (Prodia).
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    /// Base64 encoded image (Prodia).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

impl ImageResult {
    /// Whether the service reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success.eq_ignore_ascii_case("true")
    }

    /// The image location: `image` when present, else the Prodia `imageUrl`.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        if self.image.is_empty() {
            self.image_url.as_deref()
        } else {
            Some(self.image.as_str())
        }
    }
}

/// Input for an image generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRequest {
    /// What to draw.
    pub prompt: String,
    /// What to avoid. Sent as an empty string when the endpoint takes one and
    /// none was given.
    pub negative_prompt: Option<String>,
    /// Checkpoint token; only used by Prodia.
    pub model: Option<String>,
}

impl ImageRequest {
    /// Create a request with only a prompt.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Set the negative prompt.
    #[must_use]
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    /// Set the Prodia checkpoint.
    #[must_use]
    pub fn with_model(mut self, model: impl AsRef<str>) -> Self {
        self.model = Some(model.as_ref().to_string());
        self
    }

    /// Build the request body for `endpoint`, keeping only the fields it accepts.
    #[must_use]
    pub fn to_payload(&self, endpoint: ImageModel) -> Payload {
        let mut payload = Payload::prompt(&self.prompt);

        if endpoint.accepts_negative_prompt() {
            payload.push(
                "negative_prompt",
                self.negative_prompt.as_deref().unwrap_or_default(),
            );
        } else if self.negative_prompt.is_some() {
            debug!(endpoint = %endpoint, "negative_prompt is not supported, dropping it");
        }

        if endpoint.accepts_model() {
            payload.push_opt("model", self.model.as_deref());
        } else if self.model.is_some() {
            debug!(endpoint = %endpoint, "model is not supported, dropping it");
        }

        payload
    }
}
