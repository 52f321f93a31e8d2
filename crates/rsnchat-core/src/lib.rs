//! # rsnchat-core
//!
//! Core types and utilities for working with the RsnChat generation API.
//!
//! This crate provides the error taxonomy, endpoint enumeration, request
//! payloads and the shared HTTP dispatcher used by the `rsnchat` client.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status code mapping
//! - [`types`] - Text and image endpoint enumeration
//! - [`payload`] - Flat JSON request bodies
//! - [`config`] - Validated client configuration
//! - [`client`] - HTTP client configuration and the generic dispatcher

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
