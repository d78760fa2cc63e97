use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;

/// One generated completion. The engine returns, per input prompt, a list of
/// these with `num_return_sequences` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSequence {
    pub generated_text: String,
}

/// What the engine reports about itself before any generation happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineInfo {
    pub model_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub inputs: &'a [String],
    pub parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateParameters {
    pub do_sample: bool,
    pub top_k: u32,
    pub num_return_sequences: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eos_token_id: Option<u32>,
    pub max_length: u32,
}

impl From<&GenerationConfig> for GenerateParameters {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            do_sample: config.do_sample,
            top_k: config.top_k,
            num_return_sequences: config.num_return_sequences,
            eos_token_id: config.eos_token_id,
            max_length: config.max_length,
        }
    }
}
