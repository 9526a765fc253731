//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

/// Print a failure and terminate with a nonzero exit code.
///
/// Keeps the error path clean: one line (or one JSON object) instead
/// of an unhandled panic with a stack trace.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    // Failures before logger init have no subscriber yet; for them the
    // printed line below is the only trace.
    tracing::error!(error = %format!("{err:#}"), "command failed");

    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
