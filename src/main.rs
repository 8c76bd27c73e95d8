mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use timetable_core::Subject;
use timetable_core::config::TimetableConfig;
use timetable_core::date::parse_reference_date;
use timetable_core::subject::{add_subject, remove_subject};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Generate a weekly school timetable and export it to your calendar")]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use these subjects instead of the configured ones (repeatable, in order)
    #[arg(long = "subject", value_name = "NAME", global = true)]
    subjects: Vec<String>,

    /// Leave out the subject with this id (repeatable)
    #[arg(long, value_name = "ID", global = true)]
    without: Vec<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weekly timetable
    Show {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },
    /// Write the timetable as an .ics calendar
    Export {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,

        /// Output file (defaults to the configured output)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the calendar to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
    /// List subjects in timetable order
    Subjects,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = TimetableConfig::load()?;
    let subjects = resolve_subjects(&config, &cli.subjects, &cli.without)?;
    debug!(count = subjects.len(), "resolved subjects");

    match cli.command {
        Commands::Show { today } => {
            let now = reference_date(today.as_deref())?;
            commands::show::run(&subjects, now)
        }
        Commands::Export {
            today,
            output,
            stdout,
        } => {
            let now = reference_date(today.as_deref())?;
            commands::export::run(&subjects, &config, now, output, stdout)
        }
        Commands::Subjects => commands::subjects::run(&subjects),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Subjects from `--subject` flags if given, otherwise from the config,
/// minus any `--without` ids.
fn resolve_subjects(config: &TimetableConfig, names: &[String], without: &[u64]) -> Result<Vec<Subject>> {
    let mut subjects = if names.is_empty() {
        config.subjects()?
    } else {
        let mut subjects = Vec::with_capacity(names.len());
        for name in names {
            add_subject(&mut subjects, name)?;
        }
        subjects
    };

    for &id in without {
        if remove_subject(&mut subjects, id).is_none() {
            let available: Vec<_> = subjects.iter().map(|s| s.id.to_string()).collect();
            anyhow::bail!(
                "Subject {} not found. Available: {}",
                id,
                available.join(", ")
            );
        }
    }

    Ok(subjects)
}

/// The date classes are projected from. The clock is read at most once.
fn reference_date(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => Ok(parse_reference_date(s)?),
        None => {
            let today = chrono::Local::now().date_naive();
            debug!(%today, "using local date as reference");
            Ok(today)
        }
    }
}
