//! User configuration at ~/.config/timetable/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{TimetableError, TimetableResult};
use crate::ics::ExportOptions;
use crate::subject::{PALETTE, Subject, default_subjects, next_id};

static DEFAULT_OUTPUT: &str = "school-timetable.ics";

fn default_calendar_name() -> String {
    ExportOptions::default().calendar_name
}

fn default_product_id() -> String {
    ExportOptions::default().product_id
}

fn default_uid_domain() -> String {
    ExportOptions::default().uid_domain
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// A subject as written in the config file. Ids are assigned in file order.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SubjectEntry {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimetableConfig {
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    #[serde(default = "default_product_id")]
    pub product_id: String,

    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,

    /// Where `export` writes the .ics file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Subjects in timetable order; the built-in list when absent
    pub subjects: Option<Vec<SubjectEntry>>,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        TimetableConfig {
            calendar_name: default_calendar_name(),
            product_id: default_product_id(),
            uid_domain: default_uid_domain(),
            output: default_output(),
            subjects: None,
        }
    }
}

impl TimetableConfig {
    pub fn config_path() -> TimetableResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimetableError::Config("Could not determine config directory".into()))?
            .join("timetable");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented template on first run.
    pub fn load() -> TimetableResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> TimetableResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| TimetableError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimetableError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimetableResult<()> {
        let defaults = ExportOptions::default();
        let contents = format!(
            "\
# timetable configuration

# Calendar name shown by calendar apps:
# calendar_name = \"{}\"

# PRODID written to exported calendars:
# product_id = \"{}\"

# Domain part of event UIDs:
# uid_domain = \"{}\"

# Where `timetable export` writes the calendar:
# output = \"{}\"

# Subjects in timetable order (color is optional):
# [[subjects]]
# name = \"Mathematics\"
# color = \"#3B82F6\"
",
            defaults.calendar_name, defaults.product_id, defaults.uid_domain, DEFAULT_OUTPUT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimetableError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimetableError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Configured subjects with ids 1..n, or the built-in list.
    pub fn subjects(&self) -> TimetableResult<Vec<Subject>> {
        let Some(entries) = &self.subjects else {
            return Ok(default_subjects());
        };

        let mut subjects = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(TimetableError::BlankSubjectName);
            }
            let color = entry
                .color
                .clone()
                .unwrap_or_else(|| PALETTE[subjects.len() % PALETTE.len()].to_string());
            subjects.push(Subject::new(next_id(&subjects)?, name, color));
        }

        Ok(subjects)
    }

    /// Output path with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output.to_string_lossy()).into_owned())
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            calendar_name: self.calendar_name.clone(),
            product_id: self.product_id.clone(),
            uid_domain: self.uid_domain.clone(),
        }
    }
}
