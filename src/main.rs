// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker CLI
//!
//! Logs runs and rides to a local JSON store and lists, selects or erases
//! them.

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use workout_tracker::{
    config::Config,
    db::{FileStore, WorkoutDb},
    models::{Coordinates, WorkoutForm},
    services::{FixedLocation, TracingMap, Tracker, WorkoutService},
    time_utils::format_utc_rfc3339,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "workout-tracker")]
#[command(about = "Log runs and rides on a map")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log a new workout
    Add {
        #[command(subcommand)]
        workout: AddWorkout,
    },
    /// List workouts, most recent first
    List,
    /// Show one workout in detail
    Show { id: String },
    /// Select a workout and center the map on it
    Select { id: String },
    /// Erase all workouts
    Reset,
}

#[derive(Subcommand)]
enum AddWorkout {
    Running {
        #[command(flatten)]
        common: CommonArgs,
        /// Steps per minute
        #[arg(long, allow_hyphen_values = true)]
        cadence: String,
    },
    Cycling {
        #[command(flatten)]
        common: CommonArgs,
        /// Elevation gain in meters
        #[arg(long, allow_hyphen_values = true)]
        elevation: String,
    },
}

#[derive(Args)]
struct CommonArgs {
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,
    /// Distance in km
    #[arg(long, allow_hyphen_values = true)]
    distance: String,
    /// Duration in minutes
    #[arg(long, allow_hyphen_values = true)]
    duration: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(path = %config.store_path.display(), "Using workout store");
    let db = WorkoutDb::with_key(FileStore::new(&config.store_path), config.store_key.clone());

    match cli.command {
        // Does not load first, so a corrupt store can still be cleared.
        Command::Reset => {
            WorkoutService::new(db).reset()?;
            println!("All workouts removed.");
        }
        Command::Add { workout } => {
            let mut tracker = open_tracker(db, &config)?;
            let (common, form) = match workout {
                AddWorkout::Running { common, cadence } => {
                    let form = WorkoutForm {
                        kind: "running".to_string(),
                        distance: common.distance.clone(),
                        duration: common.duration.clone(),
                        cadence,
                        ..WorkoutForm::default()
                    };
                    (common, form)
                }
                AddWorkout::Cycling { common, elevation } => {
                    let form = WorkoutForm {
                        kind: "cycling".to_string(),
                        distance: common.distance.clone(),
                        duration: common.duration.clone(),
                        elevation,
                        ..WorkoutForm::default()
                    };
                    (common, form)
                }
            };

            tracker.on_map_click(Coordinates::new(common.lat, common.lng));
            let workout = tracker
                .submit(&form)
                .map_err(|e| anyhow!("{} ({})", e.user_notice(), e))?;
            println!("{}  {}", workout.id(), workout);
        }
        Command::List => {
            let tracker = open_tracker(db, &config)?;
            if tracker.workouts().is_empty() {
                println!("No workouts yet.");
            }
            for workout in tracker.workouts().workouts().iter().rev() {
                println!("{}  {}", workout.id(), workout);
            }
        }
        Command::Show { id } => {
            let tracker = open_tracker(db, &config)?;
            let workout = tracker
                .workouts()
                .find_by_id(&id)
                .ok_or_else(|| anyhow!("Workout not found: {}", id))?;
            println!("id:       {}", workout.id());
            println!("created:  {}", format_utc_rfc3339(workout.created_at()));
            println!("position: {}", workout.coords());
            println!("selected: {} times", workout.clicks());
            println!("{}", workout);
        }
        Command::Select { id } => {
            let mut tracker = open_tracker(db, &config)?;
            let selection = tracker.focus(&id)?;
            println!(
                "{} at {} (selected {} times)",
                selection.workout.popup_label(),
                selection.coords,
                selection.workout.clicks()
            );
        }
    }

    Ok(())
}

/// Load the stored workouts, reporting unreadable records, and show the map
/// when a home position is configured.
fn open_tracker(
    db: WorkoutDb<FileStore>,
    config: &Config,
) -> anyhow::Result<Tracker<FileStore, TracingMap>> {
    let (service, report) = WorkoutService::open(db)?;
    for failure in &report.failures {
        eprintln!(
            "warning: skipped stored workout #{} ({}): {}",
            failure.index,
            failure.id.as_deref().unwrap_or("no id"),
            failure.error
        );
    }

    let mut tracker = Tracker::with_zoom(service, TracingMap, config.map_zoom);
    if config.home.is_some() {
        if let Err(err) = tracker.start(&mut FixedLocation::new(config.home)) {
            eprintln!("{}", err.user_notice());
        }
    }
    Ok(tracker)
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workout_tracker=warn"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
