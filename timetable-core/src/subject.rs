//! Subjects and the helpers callers use to manage a subject list.

use serde::{Deserialize, Serialize};

use crate::error::{TimetableError, TimetableResult};

/// Colors handed out to new subjects, in order.
pub const PALETTE: [&str; 7] = [
    "#3B82F6", "#10B981", "#F59E0B", "#8B5CF6", "#EF4444", "#06B6D4", "#84CC16",
];

/// A class subject. Identity is `id`; `color` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: u64,
    pub name: String,
    pub color: String,
}

impl Subject {
    pub fn new(id: u64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Subject {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// The built-in subject list used when nothing is configured.
pub fn default_subjects() -> Vec<Subject> {
    vec![
        Subject::new(1, "Mathematics", "#3B82F6"),
        Subject::new(2, "Science", "#10B981"),
        Subject::new(3, "English", "#F59E0B"),
        Subject::new(4, "History", "#8B5CF6"),
        Subject::new(5, "ICT", "#EF4444"),
    ]
}

/// Next free id: one past the largest id in use, starting at 1.
pub fn next_id(subjects: &[Subject]) -> TimetableResult<u64> {
    let max = subjects.iter().map(|s| s.id).max().unwrap_or(0);
    max.checked_add(1).ok_or(TimetableError::SubjectIdOverflow(max))
}

/// Append a subject named `name` (trimmed), picking its id and palette color.
pub fn add_subject<'a>(subjects: &'a mut Vec<Subject>, name: &str) -> TimetableResult<&'a Subject> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TimetableError::BlankSubjectName);
    }

    let color = PALETTE[subjects.len() % PALETTE.len()];
    let subject = Subject::new(next_id(subjects)?, name, color);
    subjects.push(subject);

    Ok(&subjects[subjects.len() - 1])
}

/// Remove the subject with `id`, returning it if it was present.
pub fn remove_subject(subjects: &mut Vec<Subject>, id: u64) -> Option<Subject> {
    let index = subjects.iter().position(|s| s.id == id)?;
    Some(subjects.remove(index))
}
