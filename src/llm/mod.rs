mod client;
mod types;

pub use client::{CompletionClient, GeminiClient};
pub use types::ModelInfo;
