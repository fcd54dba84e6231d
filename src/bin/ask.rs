//! Sends a single prompt to the configured model and prints the reply.
//!
//! Run with: cargo run --bin ask -- "your question"

use anyhow::Result;
use recruitbot::{
    config,
    llm::{CompletionClient, GeminiClient},
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load().await?;

    let question = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let question = if question.is_empty() {
        "Introduce yourself briefly.".to_string()
    } else {
        question
    };

    let client = GeminiClient::new(config.llm);
    let answer = client.complete(&question).await?;

    println!("{}", answer);

    Ok(())
}
