use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::{Error, Result};

/// One labeled example from the corpus: a multi-turn, speaker-prefixed
/// dialogue and its third-person reference summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub id: String,
    pub dialogue: String,
    pub summary: String,
}

impl DialogueRecord {
    /// Distinct speaker names in order of first appearance. A speaker is the
    /// prefix before the first `:` on a dialogue line.
    pub fn speakers(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for line in self.dialogue.lines() {
            if let Some((name, _)) = line.split_once(':') {
                let name = name.trim();
                if !name.is_empty() && !seen.iter().any(|s| s == name) {
                    seen.push(name.to_string());
                }
            }
        }
        seen
    }
}

/// A named, finite, read-only partition of the corpus.
#[derive(Debug, Clone)]
pub struct Split {
    name: String,
    records: Vec<DialogueRecord>,
}

impl Split {
    pub fn new(name: impl Into<String>, records: Vec<DialogueRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DialogueRecord> {
        self.records.get(index)
    }

    /// Iterate over a range of records, clamped to the split bounds. The
    /// iterator borrows the split, so selection is restartable.
    pub fn select(&self, range: Range<usize>) -> impl Iterator<Item = &DialogueRecord> {
        let start = range.start.min(self.records.len());
        let end = range.end.min(self.records.len()).max(start);
        self.records[start..end].iter()
    }
}

/// The three canonical splits of a dialogue-summarization corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub train: Split,
    pub test: Split,
    pub validation: Split,
}

impl Corpus {
    pub fn split(&self, name: &str) -> Result<&Split> {
        match name {
            "train" => Ok(&self.train),
            "test" => Ok(&self.test),
            "validation" => Ok(&self.validation),
            _ => Err(Error::SplitNotFound {
                split: name.to_string(),
            }),
        }
    }
}
