//! Lists the catalog models that can serve chat generation.
//!
//! Run with: cargo run --bin list-models

use anyhow::Result;
use recruitbot::{config, llm::GeminiClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load().await?;
    let client = GeminiClient::new(config.llm);

    let models = client.list_models().await?;

    println!("=== Models available for generation ===");
    let mut count = 0;
    for model in &models {
        if model.supports_generation() {
            println!("- {}: {}", model.name, model.description);
            count += 1;
        }
    }

    if count == 0 {
        println!("No generation-capable models found. The API key may not be enabled.");
    } else {
        println!("\n{} models support generateContent.", count);
    }

    Ok(())
}
