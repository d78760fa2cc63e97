use tracing::info;

use crate::{
    Error, Result,
    config::{EngineConfig, GenerationConfig},
    engine::{GeneratedSequence, GenerationEngine, HttpEngineClient},
};

/// An initialized binding to one pretrained model on the generation engine.
///
/// Constructed once, used for the lifetime of the process, and released
/// explicitly with [`close`](ModelSession::close). The engine holds the model
/// weights exclusively; callers that share a session across tasks must
/// serialize access to it.
pub struct ModelSession {
    engine: Box<dyn GenerationEngine>,
    model: String,
    generation: GenerationConfig,
}

impl ModelSession {
    /// Connect to the configured engine and verify it serves the requested
    /// model. The engine side loads and pins the weights, so the first call
    /// of a cold engine can take minutes.
    pub async fn connect(config: &EngineConfig, generation: GenerationConfig) -> Result<Self> {
        let engine = Box::new(HttpEngineClient::new(config));
        Self::initialize(engine, &config.model, generation).await
    }

    pub async fn initialize(
        engine: Box<dyn GenerationEngine>,
        model: &str,
        generation: GenerationConfig,
    ) -> Result<Self> {
        info!("Initializing model session for {}", model);

        let engine_info = engine.info().await?;
        if engine_info.model_id != model {
            return Err(Error::retrieval(format!(
                "engine serves model '{}', expected '{}'",
                engine_info.model_id, model
            )));
        }

        info!("Model session ready for {}", model);

        Ok(Self {
            engine,
            model: model.to_string(),
            generation,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    /// Blocking-style single call into the engine: one batch in, one batch
    /// out, with the session's configured sampling options.
    pub async fn generate(&self, prompts: &[String]) -> Result<Vec<Vec<GeneratedSequence>>> {
        self.engine.generate(prompts, &self.generation).await
    }

    /// Release the session's handle on the engine.
    pub fn close(self) {
        info!("Closing model session for {}", self.model);
    }
}
