//! Async client for the RsnChat text and image generation API.
//!
//! Provides a validating client constructor, one method per generation
//! endpoint and typed results for the text and image response envelopes.
//!
//! ```no_run
//! # async fn run() -> rsnchat::Result<()> {
//! let client = rsnchat::RsnChatClient::connect("my-api-key").await?;
//! let reply = client.gpt("Write a haiku about rust").await?;
//! println!("{}", reply.message);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod prodia;

pub use client::{
    ImageGeneration, RsnChatClient, RsnChatClientBuilder, TextGeneration, VALIDATION_MARKER,
};
pub use models::{ImageRequest, ImageResult, TextResult};
pub use prodia::ProdiaModel;
pub use rsnchat_core::client::ClientConfig;
pub use rsnchat_core::config::RsnChatConfig;
pub use rsnchat_core::types::{ImageModel, TextModel};
pub use rsnchat_core::Error;

/// Convenient result alias that reuses the shared RsnChat error type.
pub type Result<T> = rsnchat_core::Result<T>;
