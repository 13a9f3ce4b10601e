//! Document Generate - Model (generation API client)

use async_trait::async_trait;
use contracts::domain::a001_document::generation::{
    GenerationRequest, GenerationRequestFailed, GenerationResponse,
};
use gloo_net::http::Request;

use crate::shared::config::AppConfig;

/// Network side of the generate flow, behind a trait so the submit path can
/// run against an in-memory double in tests.
#[async_trait(?Send)]
pub trait GenerationBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationRequestFailed>;
}

/// HTTP client for the generation endpoint. The endpoint is fixed at
/// construction from the application configuration.
pub struct GenerationApi {
    endpoint: String,
}

impl GenerationApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.api_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl GenerationBackend for GenerationApi {
    /// One POST, one JSON body back. No retries, no timeout: the exchange
    /// stays pending until the server answers or the connection drops.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationRequestFailed> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| GenerationRequestFailed::new(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| GenerationRequestFailed::new(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(GenerationRequestFailed::new(format!(
                "Generation failed: {}",
                response.status()
            )));
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|e| GenerationRequestFailed::new(format!("Failed to parse response: {}", e)))
    }
}
