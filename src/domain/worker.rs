use serde::Serialize;

use super::filter::Searchable;
use super::tone::{worker_status_tone, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkerStatus {
    Available,
    Working,
}

impl WorkerStatus {
    /// Status filter options offered by the labour view.
    pub const FILTERS: [&'static str; 3] = ["all", "available", "working"];

    pub fn label(&self) -> &'static str {
        match self {
            WorkerStatus::Available => "Available",
            WorkerStatus::Working => "Working",
        }
    }

    pub fn tone(&self) -> Tone {
        worker_status_tone(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worker {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub daily_wage: u64,
    pub skills: Vec<String>,
    pub location: String,
    pub rating: f32,
    pub status: WorkerStatus,
    pub experience: String,
}

impl Searchable for Worker {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.skills
    }

    fn status_label(&self) -> &str {
        self.status.label()
    }
}
