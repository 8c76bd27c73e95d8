use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use timetable_core::Subject;
use timetable_core::config::TimetableConfig;
use timetable_core::ics::export_with;
use timetable_core::schedule::regenerate;
use tracing::debug;

pub fn run(
    subjects: &[Subject],
    config: &TimetableConfig,
    now: NaiveDate,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let schedule = regenerate(subjects);
    let ics = export_with(&schedule, now, &config.export_options())?;

    if stdout {
        print!("{}", ics);
        return Ok(());
    }

    let path = output.unwrap_or_else(|| config.output_path());
    debug!(path = %path.display(), bytes = ics.len(), "writing calendar");
    std::fs::write(&path, &ics)
        .with_context(|| format!("Could not write calendar to {}", path.display()))?;

    println!(
        "{}",
        format!(
            "Exported {} classes to {}",
            schedule.class_count(),
            path.display()
        )
        .green()
    );

    Ok(())
}
