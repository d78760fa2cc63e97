use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

use super::types::{
    ErrorResponse, RewriteRequest, RewriteResponse, SampleRewriteRequest, SampleRewriteResponse,
};
use crate::{
    Error,
    corpus::{Corpus, DialogueRecord},
    pipeline,
    session::ModelSession,
};

#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    // The engine session is an exclusively owned resource; the mutex
    // serializes all generation calls through it.
    pub session: Arc<Mutex<ModelSession>>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, HandlerError> {
    let request_id = request
        .request_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    info!(
        "Received rewrite request {} with {} prompts",
        request_id,
        request.prompts.len()
    );

    let session = state.session.lock().await;
    match pipeline::complete(&session, &request.prompts).await {
        Ok(completions) => {
            info!("Completed rewrite request {}", request_id);
            Ok(Json(RewriteResponse {
                request_id,
                completions,
            }))
        }
        Err(e) => {
            error!("Failed rewrite request {}: {}", request_id, e);
            Err(reject(e))
        }
    }
}

pub async fn rewrite_sample(
    State(state): State<AppState>,
    Json(request): Json<SampleRewriteRequest>,
) -> Result<Json<SampleRewriteResponse>, HandlerError> {
    let request_id = request
        .request_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    info!(
        "Received sample rewrite request {} for {}[{}]",
        request_id, request.split, request.index
    );

    let record = lookup_record(&state.corpus, &request.split, request.index)
        .map_err(reject)?
        .clone();

    let prompt_request = pipeline::PromptRequest::for_record(&record).map_err(reject)?;
    let prompt = prompt_request.render();

    let session = state.session.lock().await;
    match pipeline::rewrite(&session, &prompt_request).await {
        Ok(answer) => {
            info!("Completed sample rewrite request {}", request_id);
            Ok(Json(SampleRewriteResponse {
                request_id,
                record,
                prompt,
                answer,
            }))
        }
        Err(e) => {
            error!("Failed sample rewrite request {}: {}", request_id, e);
            Err(reject(e))
        }
    }
}

pub async fn record(
    State(state): State<AppState>,
    Path((split, index)): Path<(String, usize)>,
) -> Result<Json<DialogueRecord>, HandlerError> {
    lookup_record(&state.corpus, &split, index)
        .map(|record| Json(record.clone()))
        .map_err(reject)
}

fn lookup_record<'a>(
    corpus: &'a Corpus,
    split: &str,
    index: usize,
) -> crate::Result<&'a DialogueRecord> {
    corpus
        .split(split)?
        .get(index)
        .ok_or_else(|| Error::RecordNotFound {
            split: split.to_string(),
            index,
        })
}

fn reject(error: Error) -> HandlerError {
    let status = match &error {
        Error::Authorization(_) => StatusCode::UNAUTHORIZED,
        Error::SplitNotFound { .. } | Error::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        Error::Retrieval(_) => StatusCode::BAD_GATEWAY,
        Error::Resource(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
