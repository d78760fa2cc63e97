use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

use super::types::{Corpus, DialogueRecord, Split};
use crate::{Error, Result, config::CorpusConfig};

const SPLIT_NAMES: [&str; 3] = ["train", "test", "validation"];

#[derive(Debug, Deserialize)]
struct RowsPage {
    rows: Vec<RowEntry>,
}

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: DialogueRecord,
}

/// Fetches a named corpus from a rows API, one split at a time, paging until
/// a short page signals the end of the split.
pub struct CorpusLoader {
    http: reqwest::Client,
    base_url: String,
    page_size: usize,
}

impl CorpusLoader {
    pub fn new(config: &CorpusConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
        }
    }

    pub async fn load(&self, name: &str) -> Result<Corpus> {
        info!("Loading corpus '{}'", name);

        let [train, test, validation] = SPLIT_NAMES;
        let corpus = Corpus {
            train: self.fetch_split(name, train).await?,
            test: self.fetch_split(name, test).await?,
            validation: self.fetch_split(name, validation).await?,
        };

        info!(
            "Corpus '{}' loaded: {} train / {} test / {} validation records",
            name,
            corpus.train.len(),
            corpus.test.len(),
            corpus.validation.len()
        );

        Ok(corpus)
    }

    async fn fetch_split(&self, dataset: &str, split: &str) -> Result<Split> {
        let mut records: Vec<DialogueRecord> = Vec::new();
        let mut offset = 0usize;

        loop {
            debug!(
                "Fetching rows for {}/{} at offset {}",
                dataset, split, offset
            );

            let offset_param = offset.to_string();
            let length_param = self.page_size.to_string();
            let response = self
                .http
                .get(format!("{}/rows", self.base_url))
                .query(&[
                    ("dataset", dataset),
                    // The rows API namespaces splits under a config; this
                    // corpus uses its own name as the sole config.
                    ("config", dataset),
                    ("split", split),
                    ("offset", offset_param.as_str()),
                    ("length", length_param.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(retrieval_error(dataset, split, status, &body));
            }

            let page: RowsPage = response.json().await?;
            let fetched = page.rows.len();
            records.extend(page.rows.into_iter().map(|entry| entry.row));

            if fetched < self.page_size {
                break;
            }
            offset += fetched;
        }

        Ok(Split::new(split, records))
    }
}

fn retrieval_error(dataset: &str, split: &str, status: StatusCode, body: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::authorization(format!(
            "access to corpus '{}' denied ({}): {}",
            dataset, status, body
        )),
        _ => Error::retrieval(format!(
            "failed to fetch {}/{} ({}): {}",
            dataset, split, status, body
        )),
    }
}
