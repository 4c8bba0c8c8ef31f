// ABOUTME: Calorie CLI - command-line front end for the calorie goal engine
// ABOUTME: Profile setup and updates, daily goal management, staleness checks, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create the profile (unspecified fields use the setup defaults)
//! calorie-cli profile setup --height 182 --weight 78 --age 34 --gender male
//!
//! # Re-confirm measurements and recompute the goal
//! calorie-cli profile update --weight 76.5
//!
//! # Show the stored and recommended daily goal
//! calorie-cli goal show
//!
//! # Override the daily goal
//! calorie-cli goal set 2200
//!
//! # Exit 0 when the profile is current, 2 when it should be re-confirmed
//! calorie-cli check
//!
//! # Progress against the goal
//! calorie-cli progress --consumed 1450
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use calorie_goal_engine::config::AppConfig;
use calorie_goal_engine::errors::AppError;
use calorie_goal_engine::logging::LoggingConfig;
use calorie_goal_engine::models::{ActivityLevel, Gender, ProfileUpdate};
use calorie_goal_engine::services::ProfileService;
use calorie_goal_engine::storage::JsonFileStore;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "calorie-cli",
    about = "Daily calorie goal and profile management",
    long_about = "Computes a daily calorie goal from your biometric profile and tells you when the profile needs to be re-confirmed."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to CALORIE_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (takes precedence over RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Daily goal commands
    Goal {
        #[command(subcommand)]
        action: GoalCommand,
    },

    /// Check whether the profile should be re-confirmed today
    Check,

    /// Show progress against the daily goal
    Progress {
        /// Calories eaten so far today
        #[arg(long)]
        consumed: u32,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the stored profile
    Show,

    /// Create the profile and compute the daily goal
    Setup(MeasurementArgs),

    /// Re-confirm measurements and recompute the daily goal
    Update(MeasurementArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalCommand {
    /// Show the stored goal and the recommendation from the profile
    Show,

    /// Override the daily goal
    Set {
        /// Daily goal in kcal
        kcal: u32,
    },
}

#[derive(Args)]
struct MeasurementArgs {
    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Gender: male, female, or other
    #[arg(long)]
    gender: Option<Gender>,

    /// Activity level: sedentary, light, moderate, active, or very-active
    #[arg(long)]
    activity_level: Option<ActivityLevel>,
}

impl From<MeasurementArgs> for ProfileUpdate {
    fn from(args: MeasurementArgs) -> Self {
        Self {
            height_cm: args.height,
            weight_kg: args.weight,
            age: args.age,
            gender: args.gender,
            activity_level: args.activity_level,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            let format = LoggingConfig::from_env().format;
            eprintln!("{}", helpers::display::format_error(&error, format));
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::from_env().map_err(AppError::from)?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else if env::var_os("RUST_LOG").is_none() {
        config.logging.clone().with_level("warn")
    } else {
        config.logging.clone()
    };
    logging.init()?;

    info!(environment = %config.environment, "calorie CLI starting");
    debug!(data_dir = %config.data_dir.display(), "using data directory");

    let service = ProfileService::new(JsonFileStore::new(&config.data_dir));
    let now = Local::now();

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&service, &now)?,
            ProfileCommand::Setup(args) => commands::profile::setup(&service, &args.into(), &now)?,
            ProfileCommand::Update(args) => {
                commands::profile::update(&service, &args.into(), &now)?;
            }
        },
        Command::Goal { action } => match action {
            GoalCommand::Show => commands::goal::show(&service)?,
            GoalCommand::Set { kcal } => commands::goal::set(&service, kcal)?,
        },
        Command::Check => return Ok(commands::status::check(&service, &now)?),
        Command::Progress { consumed } => commands::status::progress(&service, consumed)?,
    }

    Ok(ExitCode::SUCCESS)
}
