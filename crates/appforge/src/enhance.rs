use crate::prelude::*;
use crate::prelude::{eprintln, println};
use appforge_core::prompt::{build_enhance_prompt, ENHANCE_PROMPT_RULES};

#[derive(Debug, clap::Parser)]
pub struct EnhanceOptions {
    /// The requirement description to enhance
    pub prompt: String,
}

pub async fn run(options: EnhanceOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Ollama URL: {}", global.ollama_url);
        eprintln!("Model: {}", global.model);
    }

    let prompt = build_enhance_prompt(&options.prompt);
    let response = crate::llm::prompt_model(&global, ENHANCE_PROMPT_RULES, &prompt).await?;

    println!("{}", response.trim());

    Ok(())
}
