pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod server;
pub mod session;

pub use error::{Error, Result};
