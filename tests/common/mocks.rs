use async_trait::async_trait;
use retell::{
    Error, Result,
    config::GenerationConfig,
    engine::{EngineInfo, GeneratedSequence, GenerationEngine},
};
use std::sync::{Arc, Mutex};

/// Mock generation engine for testing.
///
/// Queued batches are returned in order; when the queue is empty an echoing
/// mock derives a deterministic completion from each prompt instead, which
/// keeps order-preservation tests honest without canned data.
pub struct MockEngine {
    pub model_id: String,
    pub batches: Arc<Mutex<Vec<Vec<Vec<GeneratedSequence>>>>>,
    pub requests: Arc<Mutex<Vec<Vec<String>>>>,
    pub error: Option<String>,
    pub info_error: Option<String>,
    pub echo: bool,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            model_id: "test-model".to_string(),
            batches: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
            info_error: None,
            echo: false,
        }
    }

    /// Mock that answers every prompt with `Answer: <prompt>`.
    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Self::new()
        }
    }

    pub fn with_model(mut self, model_id: &str) -> Self {
        self.model_id = model_id.to_string();
        self
    }

    pub fn with_batches(self, batches: Vec<Vec<Vec<GeneratedSequence>>>) -> Self {
        *self.batches.lock().unwrap() = batches;
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_info_error(mut self, error: &str) -> Self {
        self.info_error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationEngine for MockEngine {
    async fn info(&self) -> Result<EngineInfo> {
        if let Some(ref error) = self.info_error {
            return Err(Error::resource(error.clone()));
        }
        Ok(EngineInfo {
            model_id: self.model_id.clone(),
        })
    }

    async fn generate(
        &self,
        prompts: &[String],
        _options: &GenerationConfig,
    ) -> Result<Vec<Vec<GeneratedSequence>>> {
        self.requests.lock().unwrap().push(prompts.to_vec());

        if let Some(ref error) = self.error {
            return Err(Error::engine(error.clone()));
        }

        let mut batches = self.batches.lock().unwrap();
        if !batches.is_empty() {
            return Ok(batches.remove(0));
        }

        if self.echo {
            return Ok(prompts
                .iter()
                .map(|prompt| {
                    vec![GeneratedSequence {
                        generated_text: format!("Answer: {}", prompt),
                    }]
                })
                .collect());
        }

        Err(Error::engine("No more mock batches available"))
    }
}

// Helper functions for creating test data

pub fn single_sequence_batch(texts: &[&str]) -> Vec<Vec<GeneratedSequence>> {
    texts
        .iter()
        .map(|text| {
            vec![GeneratedSequence {
                generated_text: text.to_string(),
            }]
        })
        .collect()
}
