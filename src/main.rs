//! Apiprobe CLI entry point.

use clap::Parser;

use apiprobe::cli::{self, commands, Cli, Commands};
use apiprobe::infrastructure::config::ConfigLoader;
use apiprobe::infrastructure::logging::Logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config_result = match cli.config.as_ref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config_result {
        Ok(config) => config,
        Err(err) => cli::handle_error(&err, cli.json),
    };

    // The guard keeps the non-blocking file writer alive until exit.
    let _log_guard = match Logger::init(&config.logging) {
        Ok(guard) => guard,
        Err(err) => cli::handle_error(&err, cli.json),
    };

    let result = match cli.command {
        Some(Commands::Fetch(args)) => commands::fetch::execute(args, &config, cli.json).await,
        Some(Commands::Prompt(args)) => commands::prompt::execute(args, &config, cli.json).await,
        // Bare invocation probes the configured endpoint.
        None => {
            commands::fetch::execute(commands::fetch::FetchArgs::default(), &config, cli.json)
                .await
        }
    };

    if let Err(err) = result {
        cli::handle_error(&err, cli.json);
    }
}
