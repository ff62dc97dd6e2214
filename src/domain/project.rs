use chrono::NaiveDate;
use serde::Serialize;

use super::filter::Searchable;
use super::tone::{priority_tone, project_status_tone, spend_tone, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    InProgress,
    Delayed,
    AlmostDone,
    Started,
}

impl ProjectStatus {
    pub const FILTERS: [&'static str; 5] = ["all", "inprogress", "delayed", "almostdone", "started"];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Delayed => "Delayed",
            ProjectStatus::AlmostDone => "Almost Done",
            ProjectStatus::Started => "Started",
        }
    }

    pub fn tone(&self) -> Tone {
        project_status_tone(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn tone(&self) -> Tone {
        priority_tone(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 0-100
    pub progress: u8,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub assigned_workers: u32,
    pub budget: u64,
    pub spent: u64,
}

impl Project {
    /// Spent as a share of budget, unclamped. Zero budget reads as 0.
    pub fn spend_ratio(&self) -> f64 {
        if self.budget == 0 {
            return 0.0;
        }
        self.spent as f64 / self.budget as f64
    }

    pub fn spend_tone(&self) -> Tone {
        spend_tone(self.spent, self.budget)
    }
}

impl Searchable for Project {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        std::slice::from_ref(&self.location)
    }

    fn status_label(&self) -> &str {
        self.status.label()
    }
}
