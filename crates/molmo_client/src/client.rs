//! Query client for hosted model endpoints

use serde::Serialize;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::image::ImageSource;
use crate::payload::{CompletionPayload, MultimodalPayload};
use crate::stream::collect_stream;

/// Client for the hosted multimodal and text-only endpoints.
///
/// Each call builds its own payload and accumulator; the client holds
/// no per-call state and the connection is scoped to the call.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Create a new Client
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Query a multimodal endpoint with an instruction and an image.
    ///
    /// Local image paths are re-encoded as PNG and base64-encoded
    /// before transmission; URLs and inline data pass through.
    pub async fn query_multimodal(
        &self,
        api_url: &str,
        instruction: &str,
        image: ImageSource,
    ) -> Result<String> {
        let image_data = image.resolve()?;
        let payload = MultimodalPayload::new(instruction, image_data);

        debug!(endpoint = api_url, "sending multimodal query");
        self.post_stream(api_url, &payload).await
    }

    /// Query a text-only completion endpoint.
    ///
    /// The model identifier is derived from the endpoint URL.
    pub async fn query_completion(&self, api_url: &str, instruction: &str) -> Result<String> {
        let payload = CompletionPayload::new(api_url, instruction);

        debug!(
            endpoint = api_url,
            model = %payload.model_version_id,
            "sending completion query"
        );
        self.post_stream(api_url, &payload).await
    }

    /// POST the payload with bearer auth and accumulate the streamed reply
    async fn post_stream<T: Serialize + ?Sized>(
        &self,
        api_url: &str,
        payload: &T,
    ) -> Result<String> {
        let response = self
            .http
            .post(api_url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "endpoint returned an error");
            return Err(ApiError::Status { status, body });
        }

        collect_stream(response.bytes_stream()).await
    }
}
