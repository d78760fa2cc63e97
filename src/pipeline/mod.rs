use tracing::debug;

use crate::{Error, Result, corpus::DialogueRecord, session::ModelSession};

/// Literal marker the rewrite instruction asks the model to start its reply
/// with. Generation is stochastic, so callers must not assume the marker is
/// actually present; it is a convention, not a guarantee.
pub const ANSWER_MARKER: &str = "Answer:";

/// One perspective-rewriting request: turn a third-person summary into mixed
/// first-/second-person form, speaking as `first_person` to `second_person`.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub first_person: String,
    pub second_person: String,
    pub subject_summary: String,
}

impl PromptRequest {
    /// Derive a request from a corpus record: the first named speaker becomes
    /// the narrator, the second becomes the addressee.
    pub fn for_record(record: &DialogueRecord) -> Result<Self> {
        let mut speakers = record.speakers();
        if speakers.len() < 2 {
            return Err(Error::internal(format!(
                "dialogue {} names fewer than two speakers",
                record.id
            )));
        }

        let second_person = speakers.remove(1);
        let first_person = speakers.remove(0);
        Ok(Self {
            first_person,
            second_person,
            subject_summary: record.summary.clone(),
        })
    }

    /// Render the fixed rewrite instruction. The template is hand-authored;
    /// the only variability is the two speaker names and the summary text.
    pub fn render(&self) -> String {
        format!(
            "Rewrite the following third-person summary as if {a} is speaking directly to {b}.\n\
             Replace every reference to {a} with first-person forms (I, me, my) and every \
             reference to {b} with second-person forms (you, your), adjusting verb agreement \
             to match.\n\
             Keep all other details unchanged and begin your reply with \"{marker}\".\n\
             \n\
             Summary: {summary}",
            a = self.first_person,
            b = self.second_person,
            marker = ANSWER_MARKER,
            summary = self.subject_summary,
        )
    }
}

/// Run a batch of prompts through the session and extract the generated text
/// of the first sequence per prompt, preserving input order.
pub async fn complete(session: &ModelSession, prompts: &[String]) -> Result<Vec<String>> {
    debug!("Running pipeline over {} prompts", prompts.len());

    let batches = session.generate(prompts).await?;

    let mut completions = Vec::with_capacity(batches.len());
    for (index, sequences) in batches.into_iter().enumerate() {
        let first = sequences.into_iter().next().ok_or_else(|| {
            Error::engine(format!("engine returned no sequences for prompt {}", index))
        })?;
        completions.push(first.generated_text);
    }

    Ok(completions)
}

/// Single-request convenience over [`complete`].
pub async fn rewrite(session: &ModelSession, request: &PromptRequest) -> Result<String> {
    let prompts = [request.render()];
    let mut completions = complete(session, &prompts).await?;
    completions
        .pop()
        .ok_or_else(|| Error::engine("engine returned an empty completion batch"))
}
