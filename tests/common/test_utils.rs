use retell::{
    config::{Config, CorpusConfig, EngineConfig, GenerationConfig, LogsConfig, ServerConfig},
    corpus::{Corpus, DialogueRecord, Split},
};
use tempfile::TempDir;
use tokio::fs;

/// The worked example from the samsum corpus card.
pub fn cookie_record() -> DialogueRecord {
    DialogueRecord {
        id: "13818513".to_string(),
        dialogue: "Amanda: I baked cookies. Do you want some?\nJerry: Sure!\nAmanda: I'll bring you tomorrow :-)".to_string(),
        summary: "Amanda baked cookies and will bring Jerry some tomorrow.".to_string(),
    }
}

pub fn hannah_record() -> DialogueRecord {
    DialogueRecord {
        id: "13728867".to_string(),
        dialogue: "Hannah: Hey, do you have Betty's number?\nBetty: Ask Larry, he called her last time we were at the park together.".to_string(),
        summary: "Hannah needs Betty's number but Amanda doesn't have it.".to_string(),
    }
}

/// A three-split corpus small enough for handler tests.
pub fn sample_corpus() -> Corpus {
    Corpus {
        train: Split::new("train", vec![cookie_record(), hannah_record()]),
        test: Split::new("test", vec![hannah_record()]),
        validation: Split::new("validation", vec![cookie_record()]),
    }
}

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        engine: EngineConfig {
            base_url: "http://localhost:3000".to_string(),
            api_token: "test-token".to_string(),
            model: "test-model".to_string(),
        },
        corpus: CorpusConfig {
            base_url: "http://localhost:3001".to_string(),
            name: "samsum".to_string(),
            page_size: 100,
        },
        generation: GenerationConfig::default(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> std::io::Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
engine:
  base_url: "http://localhost:3000"
  api_token: "test-token"
  model: "meta-llama/Llama-2-7b-chat-hf"

corpus:
  name: "samsum"

generation:
  do_sample: true
  top_k: 10
  num_return_sequences: 1
  eos_token_id: 2
  max_length: 256

server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
"#;
