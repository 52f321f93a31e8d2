//! Core RsnChat domain types.
//!
//! This module enumerates the generation endpoints exposed by the RsnChat API.
//! Text endpoints always decode into a text result and image endpoints into an
//! image result; the split is carried by the type, not by the response.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default RsnChat service origin.
pub const DEFAULT_BASE_URL: &str = "https://api.rsnai.org/api/v1/user";

/// Path used to validate an API key.
pub const VALIDATE_PATH: &str = "/validate";

/// Text generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextModel {
    /// OpenAI GPT
    Gpt,
    /// OpenChat
    Openchat,
    /// Google Bard
    Bard,
    /// Google Gemini
    Gemini,
    /// Microsoft Bing
    Bing,
    /// Meta Llama
    Llama,
    /// Mistral Mixtral
    Mixtral,
    /// Anthropic Claude
    Claude,
    /// Meta Code Llama
    Codellama,
}

impl TextModel {
    /// Returns the endpoint name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gpt => "gpt",
            Self::Openchat => "openchat",
            Self::Bard => "bard",
            Self::Gemini => "gemini",
            Self::Bing => "bing",
            Self::Llama => "llama",
            Self::Mixtral => "mixtral",
            Self::Claude => "claude",
            Self::Codellama => "codellama",
        }
    }

    /// Returns the endpoint path relative to the base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Gpt => "/gpt",
            Self::Openchat => "/openchat",
            Self::Bard => "/bard",
            Self::Gemini => "/gemini",
            Self::Bing => "/bing",
            Self::Llama => "/llama",
            Self::Mixtral => "/mixtral",
            Self::Claude => "/claude",
            Self::Codellama => "/codellama",
        }
    }

    /// Returns all text endpoints.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Gpt,
            Self::Openchat,
            Self::Bard,
            Self::Gemini,
            Self::Bing,
            Self::Llama,
            Self::Mixtral,
            Self::Claude,
            Self::Codellama,
        ]
    }
}

impl FromStr for TextModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim_start_matches('/').to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|model| model.name() == name)
            .ok_or_else(|| Error::ConfigError(format!("Unknown text endpoint: {s}")))
    }
}

impl std::fmt::Display for TextModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Image generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageModel {
    /// Prodia (Stable Diffusion checkpoints, model selectable)
    Prodia,
    /// Kandinsky
    Kandinsky,
    /// AbsoluteBeauty
    Absolutebeauty,
    /// Stable Diffusion XL
    Sdxl,
    /// OpenAI DALL-E
    Dalle,
    /// Icon generator
    Icon,
}

impl ImageModel {
    /// Returns the endpoint name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Prodia => "prodia",
            Self::Kandinsky => "kandinsky",
            Self::Absolutebeauty => "absolutebeauty",
            Self::Sdxl => "sdxl",
            Self::Dalle => "dalle",
            Self::Icon => "icon",
        }
    }

    /// Returns the endpoint path relative to the base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Prodia => "/prodia",
            Self::Kandinsky => "/kandinsky",
            Self::Absolutebeauty => "/absolutebeauty",
            Self::Sdxl => "/sdxl",
            Self::Dalle => "/dalle",
            Self::Icon => "/icon",
        }
    }

    /// Whether the endpoint takes a `negative_prompt` field.
    #[must_use]
    pub const fn accepts_negative_prompt(&self) -> bool {
        matches!(
            self,
            Self::Prodia | Self::Kandinsky | Self::Absolutebeauty | Self::Sdxl
        )
    }

    /// Whether the endpoint takes a `model` field.
    #[must_use]
    pub const fn accepts_model(&self) -> bool {
        matches!(self, Self::Prodia)
    }

    /// Returns all image endpoints.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Prodia,
            Self::Kandinsky,
            Self::Absolutebeauty,
            Self::Sdxl,
            Self::Dalle,
            Self::Icon,
        ]
    }
}

impl FromStr for ImageModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim_start_matches('/').to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|model| model.name() == name)
            .ok_or_else(|| Error::ConfigError(format!("Unknown image endpoint: {s}")))
    }
}

impl std::fmt::Display for ImageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
