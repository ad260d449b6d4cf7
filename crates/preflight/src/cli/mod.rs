//! Command-line interface for preflight.
//!
//! This module provides the CLI structure and input helpers for the
//! `wxbrief` binary.

mod commands;
mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{parse_time, BriefCommand, CategoryCommand, ConfigCommand, FormatArg};
pub use input::{forecast_from_json, observation_from_json, read_input};

/// wxbrief - Preflight weather briefings
///
/// Turns METAR and TAF data into a go/no-go recommendation with an
/// itemized list of hazards.
#[derive(Debug, Parser)]
#[command(name = "wxbrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Brief a station from METAR and optional TAF data
    Brief(BriefCommand),

    /// Resolve the flight category for a ceiling and visibility
    Category(CategoryCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.verbose, self.quiet)
    }
}
