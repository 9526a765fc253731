//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::fetch::FetchArgs;
use super::commands::prompt::PromptArgs;

#[derive(Parser)]
#[command(name = "apiprobe")]
#[command(about = "Probe a JSON REST endpoint with timeout and error classification", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `fetch` against the configured endpoint when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a config file (overrides apiprobe.yaml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the endpoint once and print the JSON payload
    Fetch(FetchArgs),

    /// Send a prompt to Gemini and print the response
    Prompt(PromptArgs),
}
