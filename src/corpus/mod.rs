mod loader;
mod types;

pub use loader::CorpusLoader;
pub use types::{Corpus, DialogueRecord, Split};
