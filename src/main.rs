use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use forge::bootstrap::{self, InitOptions};
use forge::runner::{self, RunPolicy};
use forge::toolkit::Toolkit;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("forge")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("forge.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let Some(command) = &cli.command else {
        // No subcommand: print usage and exit cleanly
        Cli::command().print_help()?;
        return Ok(());
    };

    let project_root =
        std::env::current_dir().context("Failed to determine working directory")?;
    let toolkit = Toolkit::resolve(config.toolkit.root.as_deref())
        .context("Failed to resolve toolkit installation")?;

    match command {
        Commands::Init { skip_hooks } => {
            bootstrap::initialize(
                &project_root,
                &toolkit,
                InitOptions {
                    skip_hooks: *skip_hooks,
                },
            )
            .await
            .context("Initialization failed")?;
            println!("\n{}", "forge initialized successfully".green().bold());
        }
        Commands::Check { no_parallel } => {
            let policy = if *no_parallel || !config.check.parallel {
                RunPolicy::Sequential
            } else {
                RunPolicy::Parallel
            };
            runner::run_checks(&project_root, &toolkit, policy)
                .await
                .context("Checks failed")?;
            println!("\n{}", "All checks passed".green().bold());
        }
        Commands::Fix => {
            runner::run_fix(&project_root, &toolkit)
                .await
                .context("Auto-fix failed")?;
            println!("\n{}", "Auto-fix completed".green().bold());
        }
        Commands::Staged { tool, files } => {
            runner::run_staged(*tool, files, &project_root, &toolkit)
                .await
                .context("Staged check failed")?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).await
}
