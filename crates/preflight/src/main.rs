//! `wxbrief` - CLI for preflight
//!
//! This binary reads METAR and TAF data, runs the briefing engine, and prints
//! a go/no-go briefing.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

use preflight::cli::{
    forecast_from_json, observation_from_json, read_input, BriefCommand, CategoryCommand, Cli,
    Command, ConfigCommand,
};
use preflight::normalizer::{flight_category, parse_visibility};
use preflight::render::BriefingReport;
use preflight::{init_logging, BriefingEngine, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    // Execute the command
    match cli.command {
        Command::Brief(brief_cmd) => handle_brief(&config, &brief_cmd),
        Command::Category(category_cmd) => {
            handle_category(&category_cmd);
            Ok(())
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_brief(config: &Config, cmd: &BriefCommand) -> Result<()> {
    let mut config = config.clone();
    if let Some(hours) = cmd.window {
        config.briefing.forecast_window_hours = hours;
        config.validate()?;
    }
    if let Some(format) = cmd.format {
        config.output.format = format.into();
    }

    let metar_json = read_input(&cmd.metar)?;
    let observation = observation_from_json(&metar_json, cmd.station.as_deref(), cmd.normalized)
        .with_context(|| format!("failed to load observation from {}", cmd.metar.display()))?;

    let forecast = match &cmd.taf {
        Some(path) => {
            let taf_json = read_input(path)?;
            forecast_from_json(&taf_json, &observation.station, cmd.normalized)
                .with_context(|| format!("failed to load forecast from {}", path.display()))?
        }
        None => None,
    };

    let engine = BriefingEngine::from_config(&config.briefing);
    let briefing = match cmd.at {
        Some(now) => engine.evaluate_at(&observation, forecast.as_ref(), now),
        None => engine.evaluate(&observation, forecast.as_ref()),
    };

    let report = BriefingReport::new(&observation, &briefing);
    print!("{}", report.render(&config.output)?);
    Ok(())
}

fn handle_category(cmd: &CategoryCommand) {
    let visibility = parse_visibility(&cmd.visibility);
    println!("{}", flight_category(cmd.ceiling, visibility));
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Briefing]");
                println!(
                    "  Forecast window:    {} hours",
                    config.briefing.forecast_window_hours
                );
                println!();
                println!("[Output]");
                println!("  Format:             {:?}", config.output.format);
                println!("  Show raw METAR:     {}", config.output.show_raw);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
