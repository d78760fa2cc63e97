use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub base_url: String,
    pub api_token: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_base_url")]
    pub base_url: String,
    pub name: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Sampling options forwarded to the generation engine on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_do_sample")]
    pub do_sample: bool,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_num_return_sequences")]
    pub num_return_sequences: u32,
    #[serde(default)]
    pub eos_token_id: Option<u32>,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            do_sample: default_do_sample(),
            top_k: default_top_k(),
            num_return_sequences: default_num_return_sequences(),
            eos_token_id: None,
            max_length: default_max_length(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_corpus_base_url() -> String {
    "https://datasets-server.huggingface.co".to_string()
}

fn default_page_size() -> usize {
    100
}

fn default_do_sample() -> bool {
    true
}

fn default_top_k() -> u32 {
    10
}

fn default_num_return_sequences() -> u32 {
    1
}

fn default_max_length() -> u32 {
    256
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
