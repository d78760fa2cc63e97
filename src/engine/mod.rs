mod client;
mod types;

pub use client::{GenerationEngine, HttpEngineClient};
pub use types::{EngineInfo, GeneratedSequence};
