use std::process;

use relnotes::ai::LlmClient;
use relnotes::config::AppConfig;
use relnotes::summarize::summarize;

#[tokio::main]
async fn main() {
    relnotes::setup_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let client = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_org_id.clone(),
        config.openai_model.clone(),
    );

    let summary = summarize(&client, &config.release_notes).await;
    println!("{summary}");
}
