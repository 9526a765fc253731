//! Implementation of the `apiprobe prompt` command.

use anyhow::{anyhow, Context, Result};
use clap::Args;

use crate::cli::output::CommandOutput;
use crate::domain::models::Config;
use crate::infrastructure::gemini::GeminiClient;

#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Prompt text to send
    pub text: String,

    /// Model to use (defaults to the configured model)
    #[arg(short, long)]
    pub model: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct PromptOutput {
    pub model: String,
    pub response: String,
}

impl CommandOutput for PromptOutput {
    fn to_human(&self) -> String {
        self.response.clone()
    }
}

pub async fn execute(args: PromptArgs, config: &Config, json_mode: bool) -> Result<()> {
    let mut gemini_config = config.gemini.clone();
    if let Some(model) = args.model {
        gemini_config.model = model;
    }
    let model = gemini_config.model.clone();

    let client = GeminiClient::new(gemini_config).map_err(|e| anyhow!(e))?;
    let response = client
        .generate(&args.text)
        .await
        .with_context(|| format!("prompting model {model}"))?;

    PromptOutput { model, response }.print(json_mode);
    Ok(())
}
