//! Carbon command line
//!
//! Subcommands:
//! - now: current time, optionally in a layout and offset
//! - parse: read a value with a layout pattern
//! - diff: human readable difference ("3 days ago")
//! - add / sub: shift a timestamp by a number of units
//! - map: calendar fields as JSON
//! - quarter: quarter of a timestamp with its neighbours

mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use carbon_core::{Calendar, Carbon, Offset};
use clap::Parser;
use serde_json::json;

use crate::cli::{Cli, Command, DiffArgs, NowArgs, ParseArgs, ShiftArgs, TimestampArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Now(args) => now(args),
        Command::Parse(args) => parse(args),
        Command::Diff(args) => diff(args),
        Command::Add(args) => shift(args, false),
        Command::Sub(args) => shift(args, true),
        Command::Map(args) => map(args),
        Command::Quarter(args) => quarter(args),
    }
}

fn at(timestamp: i64, offset: Option<Offset>) -> Carbon {
    Carbon::create_from_timestamp(timestamp, offset.unwrap_or_else(Offset::local))
}

fn now(args: NowArgs) -> Result<()> {
    let calendar = match args.offset {
        Some(offset) => Calendar::system(offset),
        None => Calendar::local(),
    };
    let now = calendar.now();
    tracing::info!(offset = %calendar.offset(), "reading system clock");

    println!("{}", now.timestamp());
    match args.layout {
        Some(layout) => println!("{}", now.format(&layout)),
        None => println!("{}", now.to_iso_string()),
    }
    Ok(())
}

fn parse(args: ParseArgs) -> Result<()> {
    let offset = args.offset.unwrap_or(Offset::UTC);
    let value = Carbon::parse_in(&args.layout, &args.value, offset)
        .with_context(|| format!("cannot parse '{}' with layout '{}'", args.value, args.layout))?;

    println!("{}", value.to_iso_string());
    println!("{}", value.timestamp());
    Ok(())
}

fn diff(args: DiffArgs) -> Result<()> {
    let value = at(args.timestamp, None);
    let reference = args.reference.map(|ts| at(ts, None));
    println!("{}", value.diff_for_humans(reference.as_ref()));
    Ok(())
}

fn shift(args: ShiftArgs, subtract: bool) -> Result<()> {
    let mut value = at(args.timestamp, args.offset);
    let result = if subtract {
        value.checked_sub(args.unit, args.count)
    } else {
        value.checked_add(args.unit, args.count)
    };
    result.with_context(|| format!("cannot shift {} by {} {}", args.timestamp, args.count, args.unit))?;

    println!("{}", value.to_iso_string());
    println!("{}", value.timestamp());
    Ok(())
}

fn map(args: TimestampArgs) -> Result<()> {
    let value = at(args.timestamp, args.offset);
    let text = serde_json::to_string_pretty(&value.to_map()).context("cannot render fields")?;
    println!("{text}");
    Ok(())
}

fn quarter(args: TimestampArgs) -> Result<()> {
    let value = at(args.timestamp, args.offset);
    let quarter = value.current_quarter();
    let report = json!({
        "date": value,
        "quarter": quarter.number(),
        "next": quarter.next().number(),
        "last": quarter.last().number(),
        "start": value.start_of_quarter(),
        "end": value.end_of_quarter(),
    });
    let text = serde_json::to_string_pretty(&report).context("cannot render quarter")?;
    println!("{text}");
    Ok(())
}
