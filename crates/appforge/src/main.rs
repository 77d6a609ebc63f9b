#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod enhance;
mod generate;
mod llm;
mod prelude;
mod questions;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "AI-assisted application scaffold generation using a local Ollama model"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Ollama base URL
    #[clap(
        long,
        env = "OLLAMA_URL",
        global = true,
        default_value = "http://localhost:11434"
    )]
    ollama_url: String,

    /// Model name used for generation
    #[clap(
        long,
        env = "APPFORGE_MODEL",
        global = true,
        default_value = "qwen2.5-coder"
    )]
    model: String,

    /// Whether to display additional information.
    #[clap(long, env = "APPFORGE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generate an application scaffold from a requirement description
    Generate(crate::generate::GenerateOptions),

    /// Enhance a vague requirement description into an actionable prompt
    Enhance(crate::enhance::EnhanceOptions),

    /// Ask clarifying follow-up questions about a requirement description
    Questions(crate::questions::QuestionsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
        SubCommands::Enhance(options) => crate::enhance::run(options, app.global).await,
        SubCommands::Questions(options) => crate::questions::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
