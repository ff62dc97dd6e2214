//! Record types and the pure logic that runs over them
//!
//! Nothing in here touches the terminal. Views in `modules` render these
//! records; `store` owns the live collections.

mod filter;
mod format;
mod payment;
mod project;
mod tone;
mod worker;

pub use filter::{
    filter_records, matching_indices, status_key, SearchQuery, Searchable, StatusFilter,
};
pub use format::{Currency, DateFormat};
pub use payment::{Payment, PaymentStatus};
pub use project::{Priority, Project, ProjectStatus};
pub use tone::{
    payment_status_tone, priority_tone, project_health_tone, project_status_tone, spend_tone,
    usage_tone, worker_status_tone, Tone,
};
pub use worker::{Worker, WorkerStatus};
