//! Command definitions and execution.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use warikan_core::{
    DEFAULT_COUNT, DEFAULT_WEIGHT, JsonFileStore, ScheduleView, SplitError, SplitResult,
    SplitSession, people, roster_view, schedule_view,
};
use warikan_types::{RoleEdit, RoleId, SplitConfig};

use crate::clipboard::ClipboardSink;
use crate::config::CliConfig;

/// Weighted bill splitting from the command line.
#[derive(Debug, Parser)]
#[command(name = "warikan")]
#[command(about = "Split a bill across weighted roles, rounding up to a chosen unit")]
#[command(version)]
pub struct WarikanCli {
    #[command(subcommand)]
    pub command: WarikanCommand,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands operating on the persistent roster and the last result.
#[derive(Debug, Subcommand)]
pub enum WarikanCommand {
    /// Add a role to the roster
    Add {
        /// Role name; a placeholder like "role3" is synthesized when omitted
        name: Option<String>,

        /// Relative payment weight
        #[arg(short, long, default_value_t = DEFAULT_WEIGHT)]
        weight: f64,

        /// Number of people paying this role's amount
        #[arg(short, long, default_value_t = DEFAULT_COUNT)]
        count: u32,
    },

    /// Remove a role by id
    Remove {
        /// Id shown by the list command
        id: RoleId,
    },

    /// Edit fields of an existing role
    Set {
        /// Id shown by the list command
        id: RoleId,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// Show the current roster
    List,

    /// Compute the payment schedule for a total amount
    #[command(visible_alias = "calc")]
    Calculate {
        /// Total amount to split
        #[arg(short, long)]
        total: f64,

        /// Unit each per-person payment is rounded up to
        #[arg(short, long, default_value_t = 1)]
        unit: i64,

        /// Print the raw result as JSON instead of the schedule
        #[arg(long)]
        json: bool,
    },

    /// Copy the last payment schedule to the clipboard
    Copy,

    /// Re-print the last payment schedule
    Show {
        /// Print the raw result as JSON instead of the schedule
        #[arg(long)]
        json: bool,
    },

    /// Restore the default single-role roster and drop the last result
    Reset,
}

/// Field edits for the set command. At least one must be given.
#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub struct EditArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New relative payment weight
    #[arg(long)]
    pub weight: Option<f64>,

    /// New participant count
    #[arg(long)]
    pub count: Option<u32>,
}

impl WarikanCli {
    /// Executes the parsed command against the configured store.
    pub async fn execute(
        &self,
        config: &CliConfig,
        clipboard: &dyn ClipboardSink,
    ) -> SplitResult<()> {
        debug!(command = ?self.command, "Executing command");
        let store = JsonFileStore::open(&config.storage.data_dir)?;
        let mut session = SplitSession::open(Arc::new(store))?;
        let style = config.report_style();

        match &self.command {
            WarikanCommand::Add {
                name,
                weight,
                count,
            } => {
                let id = session.add_role(name.as_deref(), *weight, *count)?;
                if let Some(role) = session.role(id) {
                    println!("Added role #{id} '{}'", role.name);
                }
                print!("{}", roster_view(session.roles()));
            }
            WarikanCommand::Remove { id } => {
                let removed = session.remove_role(*id)?;
                println!("Removed role #{id} '{}'", removed.name);
                print!("{}", roster_view(session.roles()));
            }
            WarikanCommand::Set { id, edits } => {
                if let Some(name) = &edits.name {
                    session.update_role(*id, RoleEdit::Name(name.clone()))?;
                }
                if let Some(weight) = edits.weight {
                    session.update_role(*id, RoleEdit::Weight(weight))?;
                }
                if let Some(count) = edits.count {
                    session.update_role(*id, RoleEdit::Count(count))?;
                }
                print!("{}", roster_view(session.roles()));
            }
            WarikanCommand::List => {
                print!("{}", roster_view(session.roles()));
            }
            WarikanCommand::Calculate { total, unit, json } => {
                let result = session.calculate(&SplitConfig::new(*total, *unit))?;
                if *json {
                    let encoded = serde_json::to_string_pretty(&result)
                        .map_err(|err| SplitError::storage("result", "encode", err))?;
                    println!("{encoded}");
                } else {
                    print_schedule(&schedule_view(&result, &style));
                }
            }
            WarikanCommand::Copy => {
                let text = session.export_text(&style)?;
                clipboard.write_text(&text).await?;
                println!("Copied the payment schedule to the clipboard.");
            }
            WarikanCommand::Show { json } => {
                let result = session
                    .last_result()?
                    .ok_or(SplitError::NoResultAvailable)?;
                if *json {
                    let encoded = serde_json::to_string_pretty(&result)
                        .map_err(|err| SplitError::storage("result", "encode", err))?;
                    println!("{encoded}");
                } else {
                    print_schedule(&schedule_view(&result, &style));
                }
            }
            WarikanCommand::Reset => {
                session.reset()?;
                println!("Roster reset to the default role.");
                print!("{}", roster_view(session.roles()));
            }
        }
        Ok(())
    }
}

fn print_schedule(view: &ScheduleView) {
    println!(
        "Split of {} among {}",
        view.original_total,
        people(view.head_count)
    );
    println!();
    for line in &view.lines {
        println!(
            "{} ({}): {} each  [group {}]",
            line.name,
            people(line.count),
            line.individual,
            line.group
        );
    }
    println!();
    println!("Collected total: {}", view.collected_total);
    println!("Original total:  {}", view.original_total);
    println!("Collector keeps: {}", view.excess);
}
