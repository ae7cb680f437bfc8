//! molmo_client: streaming client for hosted Molmo and OLMo model endpoints
//!
//! This library provides:
//! - `client`: HTTP query surface for multimodal and text-only endpoints
//! - `payload`: request body construction for both wire formats
//! - `image`: image reference resolution (URL, local path, inline base64)
//! - `error`: typed error taxonomy for status, transport, and parse failures
//!
//! Endpoints reply with a streaming body of newline-delimited JSON records;
//! the client concatenates the per-record text fragments into one string.
//!
//! # Example
//!
//! ```no_run
//! use molmo_client::{Client, ClientConfig, ImageSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new(ClientConfig::new("secret"));
//!
//!     let answer = client
//!         .query_multimodal(
//!             "https://ai2-reviz--uber-model-v4-synthetic.modal.run/completion_stream",
//!             "point to the trees",
//!             ImageSource::detect("wildlands-trees.jpg"),
//!         )
//!         .await;
//!
//!     println!("{:?}", answer);
//! }
//! ```

// Core modules
pub mod error;

// Configuration
pub mod config;

// Request construction
pub mod image;
pub mod payload;

// HTTP query surface
pub mod client;
mod stream;

// Re-export commonly used types
pub use error::{ApiError, Result};

pub use client::Client;
pub use config::ClientConfig;
pub use image::ImageSource;
pub use payload::{model_version_id, CompletionPayload, MultimodalPayload};
