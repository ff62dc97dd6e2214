//! Export Module
//!
//! - 'e' key triggers export for the current section
//! - Workers, Projects, Payments (filtered rows) → CSV
//! - Reports → JSON
//! - Files saved to the configured export directory with a timestamped name

mod csv_export;
mod json_export;

use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Payment, Project, Worker};

pub use csv_export::{write_payments, write_projects, write_workers};
pub use json_export::write_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Workers,
    Projects,
    Payments,
    Report,
}

impl ExportKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ExportKind::Workers => "workers",
            ExportKind::Projects => "projects",
            ExportKind::Payments => "payments",
            ExportKind::Report => "report",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Report => "json",
            _ => "csv",
        }
    }

    /// Noun used in the toast ("Exported 3 workers ...")
    pub fn noun(&self) -> &'static str {
        match self {
            ExportKind::Report => "report sections",
            other => other.prefix(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create export directory {path}: {source}")]
    Dir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV write failed: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("JSON encode failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Nothing to export")]
    Empty,
}

/// Written file and number of exported rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub count: usize,
}

/// Create the export directory if needed
fn ensure_dir(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Dir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Generate a timestamped filename
pub fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

fn target(dir: &Path, kind: ExportKind) -> Result<PathBuf, ExportError> {
    ensure_dir(dir)?;
    Ok(dir.join(generate_filename(kind.prefix(), kind.extension())))
}

pub fn export_workers(dir: &Path, workers: &[&Worker]) -> Result<ExportReport, ExportError> {
    if workers.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = target(dir, ExportKind::Workers)?;
    let count = write_workers(&path, workers)?;
    Ok(ExportReport { path, count })
}

pub fn export_projects(dir: &Path, projects: &[&Project]) -> Result<ExportReport, ExportError> {
    if projects.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = target(dir, ExportKind::Projects)?;
    let count = write_projects(&path, projects)?;
    Ok(ExportReport { path, count })
}

pub fn export_payments(dir: &Path, payments: &[&Payment]) -> Result<ExportReport, ExportError> {
    if payments.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = target(dir, ExportKind::Payments)?;
    let count = write_payments(&path, payments)?;
    Ok(ExportReport { path, count })
}

pub fn export_report<T: Serialize>(
    dir: &Path,
    report: &T,
    sections: usize,
) -> Result<ExportReport, ExportError> {
    let path = target(dir, ExportKind::Report)?;
    write_json(&path, report)?;
    Ok(ExportReport {
        path,
        count: sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Roster;

    #[test]
    fn filename_has_prefix_and_extension() {
        let name = generate_filename("payments", "csv");
        assert!(name.starts_with("payments-"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn export_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("exports");
        let roster = Roster::seeded();
        let workers: Vec<&Worker> = roster.workers.iter().collect();

        let report = export_workers(&dir, &workers).unwrap();
        assert_eq!(report.count, 4);
        assert!(report.path.starts_with(&dir));
        assert!(report.path.exists());
    }

    #[test]
    fn empty_selection_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let err = export_payments(tmp.path(), &[]).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert_eq!(err.to_string(), "Nothing to export");
    }

    #[test]
    fn kinds_map_to_file_types() {
        assert_eq!(ExportKind::Workers.extension(), "csv");
        assert_eq!(ExportKind::Report.extension(), "json");
        assert_eq!(ExportKind::Payments.noun(), "payments");
    }
}
