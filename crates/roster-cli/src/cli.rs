//! Command definitions and the command runner.
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Repository
//! ```
//!
//! Every command opens a planner from the repository, applies one operation
//! and saves the snapshot back when something changed.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::{civil::DateTime, Zoned};
use log::debug;
use roster_core::{
    display::{Appointments, OperationStatus, Resources},
    models::{Appointment, DetailValue, Details, Resource, ResourceType},
    params::{CreateAppointment, CreateResource, UpdateAppointment, UpdateResource},
    reschedule::{DragEvent, DragSource, DropTarget},
    view::{calendar::parse_datetime, DateRange},
    Outcome, Planner, Repository,
};
use ulid::Ulid;

use crate::renderer::TerminalRenderer;

/// Parses a `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD` argument.
fn datetime_arg(input: &str) -> std::result::Result<DateTime, String> {
    parse_datetime(input).map_err(|e| e.to_string())
}

/// Parses a `key=value` detail argument.
fn detail_arg(input: &str) -> std::result::Result<(String, DetailValue), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{input}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("detail key is empty in '{input}'"));
    }
    Ok((key.to_string(), DetailValue::from_input(value)))
}

fn collect_details(pairs: Vec<(String, DetailValue)>) -> Details {
    pairs.into_iter().collect()
}

/// Add a new resource
#[derive(Args)]
pub struct AddResourceArgs {
    /// Display name of the resource
    pub name: String,
    /// Kind of resource: room, person, equipment, service or other
    #[arg(short = 't', long = "type", default_value = "other")]
    pub kind: ResourceType,
    /// Extension value as key=value, repeatable
    #[arg(short, long = "detail", value_parser = detail_arg)]
    pub details: Vec<(String, DetailValue)>,
}

impl From<AddResourceArgs> for CreateResource {
    fn from(val: AddResourceArgs) -> Self {
        CreateResource {
            name: val.name,
            kind: val.kind,
            details: collect_details(val.details),
        }
    }
}

/// Update an existing resource
#[derive(Args)]
pub struct UpdateResourceArgs {
    /// ID of the resource to update
    pub id: Ulid,
    /// New display name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New kind of resource
    #[arg(short = 't', long = "type")]
    pub kind: Option<ResourceType>,
    /// Replacement extension values as key=value; replaces all details
    #[arg(short, long = "detail", value_parser = detail_arg)]
    pub details: Vec<(String, DetailValue)>,
}

impl From<UpdateResourceArgs> for UpdateResource {
    fn from(val: UpdateResourceArgs) -> Self {
        UpdateResource {
            id: val.id,
            name: val.name,
            kind: val.kind,
            details: (!val.details.is_empty()).then(|| collect_details(val.details)),
        }
    }
}

/// Remove a resource by id
#[derive(Args)]
pub struct RemoveArgs {
    /// ID of the record to remove
    pub id: Ulid,
}

#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Add a new resource
    #[command(alias = "a")]
    Add(AddResourceArgs),
    /// List all resources
    #[command(aliases = ["l", "ls"])]
    List,
    /// Update a resource
    #[command(alias = "u")]
    Update(UpdateResourceArgs),
    /// Remove a resource; its appointments are kept
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveArgs),
}

/// Book a new appointment on a resource
#[derive(Args)]
pub struct AddAppointmentArgs {
    /// Title of the appointment (1 to 50 characters)
    pub title: String,
    /// ID of the resource the appointment is booked on
    #[arg(short, long)]
    pub resource: Ulid,
    /// Start, e.g. 2024-01-01T14:00
    #[arg(short, long, value_parser = datetime_arg)]
    pub start: DateTime,
    /// End, e.g. 2024-01-01T15:00
    #[arg(short, long, value_parser = datetime_arg)]
    pub end: DateTime,
    /// Tie-breaker within a cell
    #[arg(short, long, default_value_t = 0)]
    pub order: i32,
    /// Extension value as key=value, repeatable
    #[arg(short, long = "detail", value_parser = detail_arg)]
    pub details: Vec<(String, DetailValue)>,
}

impl From<AddAppointmentArgs> for CreateAppointment {
    fn from(val: AddAppointmentArgs) -> Self {
        CreateAppointment {
            title: val.title,
            start: val.start,
            end: val.end,
            resource_id: val.resource,
            order: val.order,
            details: collect_details(val.details),
        }
    }
}

/// List appointments
#[derive(Args)]
pub struct ListAppointmentsArgs {
    /// Only show appointments booked on this resource
    #[arg(short, long)]
    pub resource: Option<Ulid>,
}

/// Update an existing appointment
#[derive(Args)]
pub struct UpdateAppointmentArgs {
    /// ID of the appointment to update
    pub id: Ulid,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New start
    #[arg(short, long, value_parser = datetime_arg)]
    pub start: Option<DateTime>,
    /// New end
    #[arg(short, long, value_parser = datetime_arg)]
    pub end: Option<DateTime>,
    /// Move to another resource
    #[arg(short, long)]
    pub resource: Option<Ulid>,
    /// New tie-breaker within a cell
    #[arg(short, long)]
    pub order: Option<i32>,
    /// Replacement extension values as key=value; replaces all details
    #[arg(short, long = "detail", value_parser = detail_arg)]
    pub details: Vec<(String, DetailValue)>,
}

impl From<UpdateAppointmentArgs> for UpdateAppointment {
    fn from(val: UpdateAppointmentArgs) -> Self {
        UpdateAppointment {
            id: val.id,
            title: val.title,
            start: val.start,
            end: val.end,
            resource_id: val.resource,
            order: val.order,
            details: (!val.details.is_empty()).then(|| collect_details(val.details)),
        }
    }
}

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// Book a new appointment
    #[command(alias = "a")]
    Add(AddAppointmentArgs),
    /// List appointments, earliest first
    #[command(aliases = ["l", "ls"])]
    List(ListAppointmentsArgs),
    /// Update an appointment
    #[command(alias = "u")]
    Update(UpdateAppointmentArgs),
    /// Delete an appointment
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveArgs),
}

/// Select the date window shown by the grid
///
/// The window length picks the slot size: under a day shows hours, up to a
/// week shows days, up to 31 days shows weeks, anything longer shows months.
#[derive(Args, Default)]
pub struct ViewArgs {
    /// Start of the window; defaults to the start of today
    #[arg(short, long, value_parser = datetime_arg)]
    pub from: Option<DateTime>,
    /// End of the window; defaults to the end of the start day
    #[arg(short, long, value_parser = datetime_arg)]
    pub to: Option<DateTime>,
}

impl ViewArgs {
    fn range(&self) -> Result<DateRange> {
        let today = DateRange::today(Zoned::now().datetime());
        match (self.from, self.to) {
            (None, None) => Ok(today),
            (from, to) => DateRange::new(from.unwrap_or(today.from), to)
                .context("Invalid date window"),
        }
    }
}

/// Drop an appointment onto another slot of a view
#[derive(Args)]
pub struct MoveArgs {
    /// ID of the appointment to move
    pub id: Ulid,
    /// Slot the appointment is dragged from
    #[arg(long)]
    pub from_slot: usize,
    /// Slot the appointment is dropped on
    #[arg(long)]
    pub to_slot: usize,
    /// Resource row the appointment is dropped on; defaults to its current one
    #[arg(long)]
    pub to_resource: Option<Ulid>,
    #[command(flatten)]
    pub window: MoveWindow,
}

/// Date window the slot numbers refer to
#[derive(Args)]
pub struct MoveWindow {
    /// Start of the window
    #[arg(short, long, value_parser = datetime_arg)]
    pub from: DateTime,
    /// End of the window; defaults to the end of the start day
    #[arg(short, long, value_parser = datetime_arg)]
    pub to: Option<DateTime>,
}

/// Runs parsed commands against the repository and renders the result.
pub struct Cli {
    repository: Repository,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(repository: Repository, renderer: TerminalRenderer) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    async fn open(&self, range: DateRange) -> Result<Planner> {
        self.repository
            .open_planner(range)
            .await
            .context("Failed to load planner")
    }

    async fn save(&self, planner: &Planner) -> Result<()> {
        self.repository
            .save(planner)
            .await
            .context("Failed to save planner")
    }

    async fn open_today(&self) -> Result<Planner> {
        self.open(DateRange::today(Zoned::now().datetime())).await
    }

    pub async fn handle_resource_command(&self, command: ResourceCommands) -> Result<()> {
        let mut planner = self.open_today().await?;
        let output = match command {
            ResourceCommands::Add(args) => {
                let resource = Resource::from(CreateResource::from(args));
                planner.resources_mut().create(resource.clone())?;
                self.save(&planner).await?;
                format!("# Resource Created\n\n{resource}")
            }
            ResourceCommands::List => {
                format!("# Resources\n\n{}", Resources(planner.resources().list()))
            }
            ResourceCommands::Update(args) => {
                let update = UpdateResource::from(args);
                let id = update.id;
                let outcome = planner.resources_mut().update(update)?;
                if outcome.is_applied() {
                    self.save(&planner).await?;
                }
                let mut output =
                    OperationStatus::from_outcome(outcome, &format!("Resource {id}")).to_string();
                if let Some(resource) = planner.resources().get(id) {
                    output.push_str(&format!("\n{resource}"));
                }
                output
            }
            ResourceCommands::Remove(RemoveArgs { id }) => {
                let outcome = planner.resources_mut().remove(id);
                self.removal_status(&planner, outcome, &format!("Resource {id}"))
                    .await?
            }
        };
        self.renderer.render(&output)
    }

    pub async fn handle_appointment_command(&self, command: AppointmentCommands) -> Result<()> {
        let mut planner = self.open_today().await?;
        let output = match command {
            AppointmentCommands::Add(args) => {
                let appointment = Appointment::new(args.into())?;
                planner.appointments_mut().create(appointment.clone())?;
                self.save(&planner).await?;
                format!("# Appointment Created\n\n{appointment}")
            }
            AppointmentCommands::List(ListAppointmentsArgs { resource }) => {
                let appointments = planner
                    .appointments()
                    .list()
                    .into_iter()
                    .filter(|a| resource.map_or(true, |id| a.resource_id == id))
                    .collect();
                format!("# Appointments\n\n{}", Appointments::by_start(appointments))
            }
            AppointmentCommands::Update(args) => {
                let update = UpdateAppointment::from(args);
                let id = update.id;
                let outcome = planner.appointments_mut().update(update)?;
                if outcome.is_applied() {
                    self.save(&planner).await?;
                }
                let mut output =
                    OperationStatus::from_outcome(outcome, &format!("Appointment {id}"))
                        .to_string();
                if let Some(appointment) = planner.appointments().get(id) {
                    output.push_str(&format!("\n{appointment}"));
                }
                output
            }
            AppointmentCommands::Remove(RemoveArgs { id }) => {
                let outcome = planner.appointments_mut().remove(id);
                self.removal_status(&planner, outcome, &format!("Appointment {id}"))
                    .await?
            }
        };
        self.renderer.render(&output)
    }

    async fn removal_status(&self, planner: &Planner, outcome: Outcome, what: &str) -> Result<String> {
        let status = match outcome {
            Outcome::Applied => {
                self.save(planner).await?;
                OperationStatus::success(format!("{what} removed"))
            }
            Outcome::NotFound => OperationStatus::from_outcome(outcome, what),
        };
        Ok(status.to_string())
    }

    pub async fn show_view(&self, args: ViewArgs) -> Result<()> {
        let planner = self.open(args.range()?).await?;
        self.renderer.render(&planner.grid().to_string())
    }

    pub async fn move_appointment(&self, args: MoveArgs) -> Result<()> {
        let range = DateRange::new(args.window.from, args.window.to)
            .context("Invalid date window")?;
        let mut planner = self.open(range).await?;

        let Some(appointment) = planner.appointments().get(args.id) else {
            let status = OperationStatus::from_outcome(
                Outcome::NotFound,
                &format!("Appointment {}", args.id),
            );
            return self.renderer.render(&status.to_string());
        };

        let source = DragSource {
            appointment_id: appointment.id,
            resource_id: appointment.resource_id,
            slot: args.from_slot,
        };
        let target = DropTarget {
            resource_id: args.to_resource.unwrap_or(appointment.resource_id),
            slot: args.to_slot,
        };
        debug!("Dropping {source:?} on {target:?} in the {} view", planner.mode());

        let outcome = planner.handle_drag(DragEvent::Drop { source, target })?;
        let status = match outcome {
            Outcome::Applied => {
                self.save(&planner).await?;
                OperationStatus::success(format!(
                    "Moved appointment {} to slot {} ({})",
                    appointment.id,
                    target.slot,
                    planner
                        .labels()
                        .get(target.slot)
                        .map_or("outside the view", String::as_str)
                ))
            }
            Outcome::NotFound => {
                OperationStatus::from_outcome(outcome, &format!("Resource {}", target.resource_id))
            }
        };

        self.renderer
            .render(&format!("{status}\n{}", planner.grid()))
    }
}
