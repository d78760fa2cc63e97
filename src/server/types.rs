use serde::{Deserialize, Serialize};

use crate::corpus::DialogueRecord;

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    pub prompts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub request_id: String,
    pub completions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SampleRewriteRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    pub split: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct SampleRewriteResponse {
    pub request_id: String,
    pub record: DialogueRecord,
    pub prompt: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
