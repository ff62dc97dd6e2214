use chrono::NaiveDate;
use serde::Serialize;

use super::filter::Searchable;
use super::tone::{payment_status_tone, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub const FILTERS: [&'static str; 4] = ["all", "paid", "pending", "overdue"];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "✔",
            PaymentStatus::Pending => "◷",
            PaymentStatus::Overdue => "!",
        }
    }

    pub fn tone(&self) -> Tone {
        payment_status_tone(self.label())
    }
}

/// `worker_name` and `project` are free text; nothing ties them to the
/// worker or project collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: u32,
    pub worker_name: String,
    pub amount: u64,
    pub date: NaiveDate,
    pub status: PaymentStatus,
    pub payment_method: String,
    pub work_description: String,
    pub project: String,
}

impl Searchable for Payment {
    fn name(&self) -> &str {
        &self.worker_name
    }

    fn tags(&self) -> &[String] {
        std::slice::from_ref(&self.project)
    }

    fn status_label(&self) -> &str {
        self.status.label()
    }
}
