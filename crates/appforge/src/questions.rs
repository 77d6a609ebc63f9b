use colored::Colorize;

use crate::prelude::*;
use crate::prelude::{eprintln, println};
use appforge_core::questions::{
    build_follow_up_prompt, default_follow_up_questions, try_parse_follow_up_questions,
};

const QUESTIONS_PREAMBLE: &str = "\
You are a requirements analyst for app development.
You output ONLY a single valid JSON object. No markdown fences.
No explanations. No commentary.";

#[derive(Debug, clap::Parser)]
pub struct QuestionsOptions {
    /// The requirement description to ask follow-up questions about
    pub prompt: String,
}

pub async fn run(options: QuestionsOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Ollama URL: {}", global.ollama_url);
        eprintln!("Model: {}", global.model);
    }

    let prompt = build_follow_up_prompt(&options.prompt);
    let response = crate::llm::prompt_model(&global, QUESTIONS_PREAMBLE, &prompt).await?;

    let questions = match try_parse_follow_up_questions(&response) {
        Some(questions) => questions,
        None => {
            eprintln!(
                "{} model response was not valid JSON; serving the default question set",
                "warning:".yellow().bold()
            );
            default_follow_up_questions()
        }
    };

    println!("{}", serde_json::to_string_pretty(&questions)?);

    Ok(())
}
