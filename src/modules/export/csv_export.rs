//! CSV Export
//!
//! Writes workers, projects, and payments to CSV files.

use std::path::Path;

use super::ExportError;
use crate::domain::{Payment, Project, Worker};

/// Write workers to CSV file
pub fn write_workers(path: &Path, workers: &[&Worker]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "phone",
        "daily_wage",
        "skills",
        "location",
        "rating",
        "status",
        "experience",
    ])?;

    for worker in workers {
        wtr.write_record([
            worker.id.to_string(),
            worker.name.clone(),
            worker.phone.clone(),
            worker.daily_wage.to_string(),
            worker.skills.join("; "),
            worker.location.clone(),
            format!("{:.1}", worker.rating),
            worker.status.label().to_string(),
            worker.experience.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(workers.len())
}

/// Write projects to CSV file
pub fn write_projects(path: &Path, projects: &[&Project]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "location",
        "start_date",
        "end_date",
        "progress",
        "status",
        "priority",
        "assigned_workers",
        "budget",
        "spent",
    ])?;

    for project in projects {
        wtr.write_record([
            project.id.to_string(),
            project.name.clone(),
            project.location.clone(),
            project.start_date.to_string(),
            project.end_date.to_string(),
            project.progress.to_string(),
            project.status.label().to_string(),
            project.priority.label().to_string(),
            project.assigned_workers.to_string(),
            project.budget.to_string(),
            project.spent.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(projects.len())
}

/// Write payments to CSV file
pub fn write_payments(path: &Path, payments: &[&Payment]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "worker",
        "amount",
        "date",
        "status",
        "method",
        "description",
        "project",
    ])?;

    for payment in payments {
        wtr.write_record([
            payment.id.to_string(),
            payment.worker_name.clone(),
            payment.amount.to_string(),
            payment.date.to_string(),
            payment.status.label().to_string(),
            payment.payment_method.clone(),
            payment.work_description.clone(),
            payment.project.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(payments.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentStatus;
    use crate::store::Roster;

    #[test]
    fn payments_csv_has_header_and_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("payments.csv");
        let roster = Roster::seeded();
        let pending: Vec<&Payment> = roster
            .payments
            .iter()
            .filter(|p| p.status != PaymentStatus::Paid)
            .collect();

        let count = write_payments(&path, &pending).unwrap();
        assert_eq!(count, 2);

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,worker,amount,date,status,method,description,project")
        );
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Ravi Sharma"));
        assert!(text.contains("Mohit Gupta"));
        assert!(text.contains("2024-01-18"));
    }

    #[test]
    fn worker_skills_share_one_column() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("workers.csv");
        let roster = Roster::seeded();
        let workers: Vec<&Worker> = roster.workers.iter().take(1).collect();

        write_workers(&path, &workers).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[1], "Rajesh Kumar");
        assert_eq!(&row[4], "Masonry; Painting");
        assert_eq!(&row[7], "Available");
    }

    #[test]
    fn projects_csv_keeps_overspend() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("projects.csv");
        let roster = Roster::seeded();
        let projects: Vec<&Project> = roster.projects.iter().collect();

        assert_eq!(write_projects(&path, &projects).unwrap(), 4);
        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 4);
    }
}
