//! In-memory record store
//!
//! Records are seeded fresh on every launch and never written anywhere.
//! The only mutations are removals and flipping a payment to paid.

mod seed;

use tracing::info;

use crate::domain::{Payment, PaymentStatus, Project, Worker};

/// Result of asking the roster to mark a payment as paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkPaid {
    Updated,
    AlreadyPaid,
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub workers: Vec<Worker>,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
}

impl Roster {
    /// The demo dataset every session starts from.
    pub fn seeded() -> Self {
        Self {
            workers: seed::workers(),
            projects: seed::projects(),
            payments: seed::payments(),
        }
    }

    pub fn remove_worker(&mut self, id: u32) -> Option<Worker> {
        let idx = self.workers.iter().position(|worker| worker.id == id)?;
        let removed = self.workers.remove(idx);
        info!(id, name = %removed.name, "worker removed");
        Some(removed)
    }

    pub fn remove_project(&mut self, id: u32) -> Option<Project> {
        let idx = self.projects.iter().position(|project| project.id == id)?;
        let removed = self.projects.remove(idx);
        info!(id, name = %removed.name, "project removed");
        Some(removed)
    }

    pub fn mark_paid(&mut self, id: u32) -> MarkPaid {
        let Some(payment) = self.payments.iter_mut().find(|payment| payment.id == id) else {
            return MarkPaid::NotFound;
        };
        if payment.status == PaymentStatus::Paid {
            return MarkPaid::AlreadyPaid;
        }
        payment.status = PaymentStatus::Paid;
        info!(id, worker = %payment.worker_name, "payment marked paid");
        MarkPaid::Updated
    }

    pub fn worker_names(&self) -> Vec<String> {
        self.workers.iter().map(|worker| worker.name.clone()).collect()
    }

    pub fn project_names(&self) -> Vec<String> {
        self.projects
            .iter()
            .map(|project| project.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contents() {
        let roster = Roster::seeded();
        assert_eq!(roster.workers.len(), 4);
        assert_eq!(roster.projects.len(), 4);
        assert_eq!(roster.payments.len(), 5);
        assert_eq!(roster.workers[0].name, "Rajesh Kumar");
        assert_eq!(roster.payments[4].worker_name, "Mohit Gupta");
    }

    #[test]
    fn test_remove_worker_removes_exactly_one() {
        let mut roster = Roster::seeded();
        let before = roster.workers.len();
        let removed = roster.remove_worker(2).map(|worker| worker.name);
        assert_eq!(removed.as_deref(), Some("Amit Singh"));
        assert_eq!(roster.workers.len(), before - 1);
        assert!(roster.workers.iter().all(|worker| worker.id != 2));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut roster = Roster::seeded();
        assert!(roster.remove_worker(99).is_none());
        assert!(roster.remove_project(99).is_none());
        assert_eq!(roster.workers.len(), 4);
        assert_eq!(roster.projects.len(), 4);
    }

    #[test]
    fn test_remove_project_keeps_payments() {
        let mut roster = Roster::seeded();
        roster.remove_project(1);
        assert_eq!(roster.projects.len(), 3);
        assert!(roster
            .payments
            .iter()
            .any(|payment| payment.project == "Construction Site A"));
    }

    #[test]
    fn test_mark_paid_transitions() {
        let mut roster = Roster::seeded();
        assert_eq!(roster.mark_paid(4), MarkPaid::Updated);
        assert_eq!(roster.payments[3].status, PaymentStatus::Paid);
        assert_eq!(roster.mark_paid(4), MarkPaid::AlreadyPaid);
        assert_eq!(roster.mark_paid(1), MarkPaid::AlreadyPaid);
        assert_eq!(roster.mark_paid(42), MarkPaid::NotFound);
    }
}
