use anyhow::Result;
use owo_colors::OwoColorize;
use timetable_core::Subject;

use crate::render::Render;

pub fn run(subjects: &[Subject]) -> Result<()> {
    if subjects.is_empty() {
        println!("{}", "No subjects".dimmed());
        return Ok(());
    }

    for subject in subjects {
        let id = format!("{:>3}", subject.id);
        println!("{} {}", id.dimmed(), subject.render(20));
    }

    Ok(())
}
