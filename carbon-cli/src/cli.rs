use carbon_core::{Offset, Unit};
use clap::{Parser, Subcommand};

/// Carbon calendar toolbox.
#[derive(Parser)]
#[command(name = "carbon", version, about = "Format, parse and shift calendar values")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current time.
    Now(NowArgs),
    /// Parse a value with a layout pattern.
    Parse(ParseArgs),
    /// Describe a timestamp relative to now or to a reference.
    Diff(DiffArgs),
    /// Add a number of units to a timestamp.
    Add(ShiftArgs),
    /// Subtract a number of units from a timestamp.
    Sub(ShiftArgs),
    /// Print the calendar fields of a timestamp as JSON.
    Map(TimestampArgs),
    /// Print the quarter of a timestamp with its neighbours.
    Quarter(TimestampArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Layout pattern, e.g. "YYYY-MM-DD HH:mm:ss" (default: ISO 8601).
    #[arg(short, long)]
    pub layout: Option<String>,

    /// UTC offset such as +08:00 (default: CARBON_UTC_OFFSET or UTC).
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<Offset>,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Layout pattern the value is written in.
    pub layout: String,

    /// Text to parse.
    pub value: String,

    /// Offset applied when the layout has no Z token (default: UTC).
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<Offset>,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Seconds since the Unix epoch.
    #[arg(allow_hyphen_values = true)]
    pub timestamp: i64,

    /// Reference timestamp (default: now).
    #[arg(short, long, allow_hyphen_values = true)]
    pub reference: Option<i64>,
}

/// Arguments for the `add` and `sub` subcommands.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Seconds since the Unix epoch.
    #[arg(allow_hyphen_values = true)]
    pub timestamp: i64,

    /// Number of units.
    #[arg(allow_hyphen_values = true)]
    pub count: i64,

    /// Unit name: year, month, week, day, hour, minute, second, ms, us, ns.
    pub unit: Unit,

    /// Offset the result is shown in (default: CARBON_UTC_OFFSET or UTC).
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<Offset>,
}

/// Arguments for subcommands that inspect one timestamp.
#[derive(clap::Args)]
pub struct TimestampArgs {
    /// Seconds since the Unix epoch.
    #[arg(allow_hyphen_values = true)]
    pub timestamp: i64,

    /// Offset the timestamp is viewed in (default: CARBON_UTC_OFFSET or UTC).
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<Offset>,
}
