//! Round-robin timetable generation.
//!
//! Subjects are laid onto the weekly grid day by day, slot by slot, with a
//! single cursor that keeps counting across day boundaries. The lunch slot
//! is always a [`BreakMarker`] and does not advance the cursor.

use std::collections::HashMap;

use tracing::debug;

use crate::slots::{BreakMarker, Day, TimeSlot, days, is_break, time_slots};
use crate::subject::Subject;

/// What occupies a single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Class(Subject),
    Break(BreakMarker),
}

impl Cell {
    pub fn name(&self) -> &str {
        match self {
            Cell::Class(subject) => &subject.name,
            Cell::Break(_) => BreakMarker::NAME,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Cell::Class(subject) => &subject.color,
            Cell::Break(_) => BreakMarker::COLOR,
        }
    }

    pub fn subject(&self) -> Option<&Subject> {
        match self {
            Cell::Class(subject) => Some(subject),
            Cell::Break(_) => None,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Cell::Break(_))
    }
}

/// A generated timetable: `(Day, TimeSlot)` to cell. Unassigned cells are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    cells: HashMap<(Day, TimeSlot), Cell>,
}

impl Schedule {
    pub fn get(&self, day: Day, slot: TimeSlot) -> Option<&Cell> {
        self.cells.get(&(day, slot))
    }

    /// Present cells in Day-then-TimeSlot order.
    pub fn cells(&self) -> impl Iterator<Item = (Day, TimeSlot, &Cell)> + '_ {
        days().iter().flat_map(move |&day| self.day(day))
    }

    /// Present cells of one day in slot order.
    pub fn day(&self, day: Day) -> impl Iterator<Item = (Day, TimeSlot, &Cell)> + '_ {
        time_slots()
            .iter()
            .filter_map(move |&slot| self.get(day, slot).map(|cell| (day, slot, cell)))
    }

    /// Number of present cells, breaks included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells holding a subject.
    pub fn class_count(&self) -> usize {
        self.cells.values().filter(|c| !c.is_break()).count()
    }
}

/// Build a fresh schedule from `subjects`.
pub fn generate(subjects: &[Subject]) -> Schedule {
    let mut cells = HashMap::new();
    let mut cursor = 0usize;

    for &day in days() {
        for &slot in time_slots() {
            if is_break(slot) {
                cells.insert((day, slot), Cell::Break(BreakMarker));
            } else if !subjects.is_empty() {
                let subject = &subjects[cursor % subjects.len()];
                cells.insert((day, slot), Cell::Class(subject.clone()));
                cursor += 1;
            }
        }
    }

    debug!(
        subjects = subjects.len(),
        assigned = cursor,
        "generated timetable"
    );

    Schedule { cells }
}

/// Recompute the schedule after the subject list changed.
///
/// Schedules are never patched in place; this is [`generate`] under the name
/// callers use after adding or removing a subject.
pub fn regenerate(subjects: &[Subject]) -> Schedule {
    generate(subjects)
}
