use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use super::types::{EngineInfo, GenerateRequest, GeneratedSequence};
use crate::{
    Error, Result,
    config::{EngineConfig, GenerationConfig},
};

#[async_trait]
pub trait GenerationEngine: Send + Sync {
    /// Identify the model the engine is serving.
    async fn info(&self) -> Result<EngineInfo>;

    /// Generate completions for a batch of prompts. The outer list matches
    /// the input prompts one-to-one and in order; each inner list holds
    /// `num_return_sequences` sequences.
    async fn generate(
        &self,
        prompts: &[String],
        options: &GenerationConfig,
    ) -> Result<Vec<Vec<GeneratedSequence>>>;
}

pub struct HttpEngineClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl HttpEngineClient {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl GenerationEngine for HttpEngineClient {
    async fn info(&self) -> Result<EngineInfo> {
        let response = self
            .http
            .get(format!("{}/info", self.base_url))
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(engine_error(status, &body));
        }

        Ok(response.json().await?)
    }

    async fn generate(
        &self,
        prompts: &[String],
        options: &GenerationConfig,
    ) -> Result<Vec<Vec<GeneratedSequence>>> {
        debug!("Submitting {} prompts for generation", prompts.len());

        let request = GenerateRequest {
            inputs: prompts,
            parameters: options.into(),
        };

        let response = self
            .http
            .post(format!("{}/generate", self.base_url))
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(engine_error(status, &body));
        }

        let batches: Vec<Vec<GeneratedSequence>> = response.json().await?;

        debug!("Engine returned {} completion batches", batches.len());

        if batches.len() != prompts.len() {
            return Err(Error::engine(format!(
                "engine returned {} batches for {} prompts",
                batches.len(),
                prompts.len()
            )));
        }

        Ok(batches)
    }
}

fn engine_error(status: StatusCode, body: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::authorization(format!(
            "engine rejected credentials ({}): {}",
            status, body
        )),
        StatusCode::NOT_FOUND => {
            Error::retrieval(format!("model weights unreachable ({}): {}", status, body))
        }
        StatusCode::SERVICE_UNAVAILABLE => Error::resource(format!(
            "engine reports no accelerator capacity ({}): {}",
            status, body
        )),
        _ => Error::engine(format!("engine request failed ({}): {}", status, body)),
    }
}
