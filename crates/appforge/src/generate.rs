use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::prelude::*;
use crate::prelude::{eprintln, println};
use appforge_core::normalize::{normalize_response, Outcome};
use appforge_core::project::{Flavor, GeneratedProject};
use appforge_core::prompt::{build_generation_prompt, GenerationRequest};

const GENERATION_PREAMBLE: &str = "\
You are an application scaffold generator. You receive a requirement
description and an instruction template.
You output ONLY a single valid JSON object matching the schema in the
instruction. No markdown fences. No explanations. No commentary.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FlavorArg {
    Web,
    Flutter,
    ReactNative,
    Combined,
}

impl From<FlavorArg> for Flavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::Web => Flavor::Web,
            FlavorArg::Flutter => Flavor::Flutter,
            FlavorArg::ReactNative => Flavor::ReactNative,
            FlavorArg::Combined => Flavor::Combined,
        }
    }
}

#[derive(Debug, clap::Parser)]
pub struct GenerateOptions {
    /// The requirement description for the app to generate
    pub prompt: Option<String>,

    /// Read the requirement description from a file instead
    #[clap(long)]
    pub prompt_file: Option<PathBuf>,

    /// Answer to a follow-up question, as `id=answer` (repeatable)
    #[clap(long = "answer")]
    pub answers: Vec<String>,

    /// Target platform for the generated file set
    #[clap(long, value_enum, default_value = "web")]
    pub flavor: FlavorArg,

    /// Export the generated project into this directory instead of
    /// printing it as JSON
    #[clap(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let description = match (options.prompt, options.prompt_file) {
        (Some(prompt), _) => prompt,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| eyre!("Failed to read prompt file '{}': {}", path.display(), e))?,
        (None, None) => {
            return Err(eyre!(
                "A requirement description is required: pass it as an argument or use --prompt-file"
            ))
        }
    };

    let answers = parse_answers(&options.answers)?;
    let flavor = Flavor::from(options.flavor);

    let request = GenerationRequest {
        description,
        answers,
        flavor,
    };
    let prompt = build_generation_prompt(&request);

    if global.verbose {
        eprintln!("Ollama URL: {}", global.ollama_url);
        eprintln!("Model: {}", global.model);
        eprintln!("Flavor: {}", flavor);
        eprintln!("Prompt length: {} chars", prompt.len());
    }

    let response = crate::llm::prompt_model(&global, GENERATION_PREAMBLE, &prompt).await?;

    if global.verbose {
        eprintln!("Model response length: {} chars", response.len());
    }

    let normalized = normalize_response(&response, flavor);
    match normalized.outcome {
        Outcome::Recovered(stage) => {
            if global.verbose {
                eprintln!("Response recovered via {}", stage);
            }
        }
        Outcome::Fallback(failure) => {
            eprintln!(
                "{} {failure}; serving the {flavor} fallback project",
                "warning:".yellow().bold()
            );
        }
    }

    match options.out {
        Some(dir) => export_project(&dir, &normalized.project).await,
        None => {
            let json = serde_json::to_string_pretty(&normalized.project)?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn parse_answers(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut answers = BTreeMap::new();
    for entry in raw {
        let (id, answer) = entry
            .split_once('=')
            .ok_or_eyre(f!("Invalid --answer '{entry}': expected id=answer"))?;
        answers.insert(id.trim().to_string(), answer.trim().to_string());
    }
    Ok(answers)
}

/// Write the project as a plain file tree under `dir`.
///
/// Leading `/` path prefixes are stripped, parent directories are created,
/// and a README.md carrying the title, explanation, and file list is added.
async fn export_project(dir: &Path, project: &GeneratedProject) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| eyre!("Failed to create '{}': {}", dir.display(), e))?;

    for (files, _) in project.file_sets() {
        for (path, file) in files {
            let target = dir.join(path.trim_start_matches('/'));
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| eyre!("Failed to create '{}': {}", parent.display(), e))?;
            }
            tokio::fs::write(&target, &file.code)
                .await
                .map_err(|e| eyre!("Failed to write '{}': {}", target.display(), e))?;
            println!("{} {}", "✓".green(), target.display());
        }
    }

    let readme_path = dir.join("README.md");
    tokio::fs::write(&readme_path, render_readme(project))
        .await
        .map_err(|e| eyre!("Failed to write '{}': {}", readme_path.display(), e))?;
    println!("{} {}", "✓".green(), readme_path.display());

    Ok(())
}

fn render_readme(project: &GeneratedProject) -> String {
    let mut readme = f!(
        "# {}\n\n{}\n\n## Files\n\n",
        project.project_title,
        project.explanation
    );
    for (_, paths) in project.file_sets() {
        for path in paths {
            readme.push_str(&f!("- `{}`\n", path));
        }
    }
    readme
}

#[cfg(test)]
mod tests {
    use super::*;
    use appforge_core::project::ProjectFile;

    #[test]
    fn test_parse_answers() {
        let raw = vec!["1=Dark theme".to_string(), "2 = Both".to_string()];
        let answers = parse_answers(&raw).unwrap();
        assert_eq!(answers["1"], "Dark theme");
        assert_eq!(answers["2"], "Both");
    }

    #[test]
    fn test_parse_answers_rejects_missing_separator() {
        let raw = vec!["no separator".to_string()];
        assert!(parse_answers(&raw).is_err());
    }

    #[test]
    fn test_render_readme_lists_all_files() {
        let mut project = GeneratedProject {
            project_title: "Todo".to_string(),
            explanation: "A todo app".to_string(),
            ..Default::default()
        };
        project
            .files
            .insert("/App.js".to_string(), ProjectFile::new("x"));
        project
            .files
            .insert("/package.json".to_string(), ProjectFile::new("{}"));
        project.rebuild_file_lists();

        let readme = render_readme(&project);
        assert!(readme.starts_with("# Todo\n\nA todo app\n"));
        assert!(readme.contains("- `/App.js`"));
        assert!(readme.contains("- `/package.json`"));
    }
}
