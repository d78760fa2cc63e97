use pretty_assertions::assert_eq;
use retell::config::Config;

mod common;

use common::test_utils::{SAMPLE_CONFIG_YAML, create_temp_dir, create_test_config_file};

#[tokio::test]
async fn sample_config_file_round_trips() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, SAMPLE_CONFIG_YAML)
        .await
        .unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let config: Config = serde_yaml::from_str(&content).unwrap();

    assert_eq!(config.engine.model, "meta-llama/Llama-2-7b-chat-hf");
    assert_eq!(config.engine.base_url, "http://localhost:3000");
    assert_eq!(config.corpus.name, "samsum");
    assert_eq!(config.generation.top_k, 10);
    assert_eq!(config.generation.eos_token_id, Some(2));
    assert_eq!(config.generation.max_length, 256);
    assert_eq!(config.server.logs.level, "debug");
}

#[tokio::test]
async fn garbage_config_file_fails_to_parse() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, "engine: [not, a, mapping]")
        .await
        .unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let result: Result<Config, _> = serde_yaml::from_str(&content);

    assert!(result.is_err());
}
