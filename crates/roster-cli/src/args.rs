use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AppointmentCommands, MoveArgs, ResourceCommands, ViewArgs};

/// Resource scheduling planner for the terminal
///
/// Roster keeps a list of resources (rooms, people, equipment) and the
/// appointments booked on them, and shows them as a grid of resources
/// against time slots. The slot size follows the selected date range: hours
/// for a day, days for a week, weeks for a month and months for a year.
#[derive(Parser)]
#[command(version, about, name = "roster")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roster/roster.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Roster CLI
///
/// Without a command, today's day view is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage resources
    #[command(alias = "r")]
    Resource {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Manage appointments
    #[command(alias = "a")]
    Appointment {
        #[command(subcommand)]
        command: AppointmentCommands,
    },
    /// Show the planner grid for a date range
    #[command(alias = "v")]
    View(ViewArgs),
    /// Drag an appointment from one slot to another
    #[command(alias = "m")]
    Move(MoveArgs),
}
