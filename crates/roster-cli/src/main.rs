//! Roster CLI Application
//!
//! Command-line interface for the roster resource scheduling planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ViewArgs};
use log::info;
use renderer::TerminalRenderer;
use roster_core::RepositoryBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let repository = RepositoryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner database")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Roster started");

    let cli = Cli::new(repository, renderer);
    match command {
        Some(Resource { command }) => cli.handle_resource_command(command).await,
        Some(Appointment { command }) => cli.handle_appointment_command(command).await,
        Some(View(args)) => cli.show_view(args).await,
        Some(Move(args)) => cli.move_appointment(args).await,
        None => cli.show_view(ViewArgs::default()).await,
    }
}
