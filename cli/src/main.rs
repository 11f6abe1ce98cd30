//! CLI entrypoint for Agentic Gemini
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agentic_application::RunTurnUseCase;
use agentic_domain::Model;
use agentic_infrastructure::{
    ConfigLoader, FileConfig, GeminiConfig, GeminiGateway, ToolRegistry, init_logging,
};
use agentic_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputConfig, ReplConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is not an error
    let dotenv = dotenvy::dotenv().ok();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        print!("{}", ConfigLoader::render(&config)?);
        return Ok(());
    }

    let _log_guard = init_logging(
        cli.verbose,
        config.logging.directory.as_deref().map(std::path::Path::new),
    );

    info!("Starting Agentic Gemini");
    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let output_config = OutputConfig {
        color: config.output.color,
    };
    if !output_config.color {
        ConsoleFormatter::set_color(false);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(gemini_config(&cli, &config)));
    let tools = Arc::new(ToolRegistry::with_builtin_tools());
    let use_case = RunTurnUseCase::new(gateway, tools);

    let repl = ChatRepl::new(use_case)
        .with_config(repl_config(&config))
        .with_progress(config.repl.show_progress && !cli.quiet);

    repl.run().await?;

    Ok(())
}

fn gemini_config(cli: &Cli, config: &FileConfig) -> GeminiConfig {
    let model = match &cli.model {
        Some(name) => {
            let Ok(model) = name.parse::<Model>();
            model
        }
        None => config.model.model(),
    };

    GeminiConfig::new(model)
        .with_api_base(&config.model.api_base)
        .with_api_key_from_env(&config.model.api_key_env)
}

fn repl_config(config: &FileConfig) -> ReplConfig {
    let history_file = config
        .repl
        .history_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(ConfigLoader::default_history_path);

    ReplConfig {
        show_progress: config.repl.show_progress,
        history_file,
    }
}
