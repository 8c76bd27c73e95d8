use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use timetable_core::Subject;
use timetable_core::date::next_date_for;
use timetable_core::schedule::regenerate;
use timetable_core::slots::{days, time_slots};

use crate::render::Render;

const TIME_WIDTH: usize = 9;
const CELL_WIDTH: usize = 13;

pub fn run(subjects: &[Subject], now: NaiveDate) -> Result<()> {
    let schedule = regenerate(subjects);

    if subjects.is_empty() {
        println!("{}", "No subjects configured, only breaks are scheduled".dimmed());
        println!();
    }

    // Header: day names, then the date each day's classes next fall on
    let mut names = format!("{:<TIME_WIDTH$}", "");
    let mut dates = format!("{:<TIME_WIDTH$}", "");
    for &day in days() {
        let next = next_date_for(day, now)?;
        names.push_str(&format!(" {:<CELL_WIDTH$}", day.name()));
        dates.push_str(&format!(" {:<CELL_WIDTH$}", next.format("%b %-d").to_string()));
    }
    println!("{}", names.bold());
    println!("{}", dates.dimmed());

    for &slot in time_slots() {
        let mut row = format!("{:<TIME_WIDTH$}", slot.label()).dimmed().to_string();
        for &day in days() {
            row.push(' ');
            match schedule.get(day, slot) {
                Some(cell) => row.push_str(&cell.render(CELL_WIDTH)),
                None => row.push_str(&format!("{:<CELL_WIDTH$}", "")),
            }
        }
        println!("{}", row);
    }

    println!();
    println!(
        "{}",
        format!("{} classes a week", schedule.class_count()).dimmed()
    );

    Ok(())
}
