//! HTTP Service Client
//!
//! JSON-over-HTTP implementation of both service traits on top of one
//! `reqwest::Client` (which uses `fetch` when compiled to wasm32).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::service::{AnalysisService, ScoringService, ServiceResult};
use crate::wire::{AnalysisRequest, AnalysisResponse, ScoreRequest, ScoreResponse};

#[derive(Debug, Clone)]
pub struct HttpServices {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpServices {
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        let builder = reqwest::Client::builder();

        // fetch has no client-level timeout
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };

        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Use a preconfigured client
    pub fn with_client(client: reqwest::Client, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> ServiceResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status { code: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ScoringService for HttpServices {
    async fn compute(&self, request: &ScoreRequest) -> ServiceResult<ScoreResponse> {
        self.post_json(&self.config.scoring_url, request).await
    }
}

#[async_trait(?Send)]
impl AnalysisService for HttpServices {
    async fn analyze(&self, request: &AnalysisRequest) -> ServiceResult<AnalysisResponse> {
        self.post_json(&self.config.analysis_url, request).await
    }
}
