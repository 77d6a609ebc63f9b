use std::time::Duration;

use indicatif::ProgressBar;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::ollama;

use crate::prelude::*;

fn create_client(ollama_url: &str) -> Result<ollama::Client> {
    use rig::client::Nothing;

    ollama::Client::builder()
        .api_key(Nothing)
        .base_url(ollama_url)
        .build()
        .map_err(|e| eyre!("Failed to create Ollama client: {}", e))
}

/// Send one prompt to the configured model and return its raw text
/// response, showing a spinner while the model works.
pub async fn prompt_model(global: &crate::Global, preamble: &str, prompt: &str) -> Result<String> {
    let client = create_client(&global.ollama_url)?;
    let agent = client.agent(&global.model).preamble(preamble).build();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Waiting for model response...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let response = agent
        .prompt(prompt)
        .await
        .map_err(|e| eyre!("Model generation failed: {}", e));

    spinner.finish_and_clear();
    response
}
