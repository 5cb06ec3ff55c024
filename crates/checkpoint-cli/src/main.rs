//! Checkpoint CLI application.
//!
//! Command-line interface for tracking test plans and their progress.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use checkpoint_core::PlannerBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Using database {}", planner.database_path().display());

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));

    match command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Case { command }) => cli.handle_case_command(command).await,
        None => cli.list_plans().await,
    }
}
