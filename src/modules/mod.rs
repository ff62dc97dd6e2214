//! Section views
//!
//! Each view implements the Module trait and owns its local UI state:
//! - Key input processing
//! - Rendering of the section body
//!
//! Views:
//! - dashboard: headline figures, recent activity, quick actions
//! - labour: worker roster
//! - work: projects
//! - payments: payment records and mark-paid
//! - reports: analytics and JSON export
//! - help: support contacts and FAQs

pub mod dashboard;
pub mod export;
pub mod forms;
pub mod help;
pub mod labour;
pub mod listing;
pub mod payments;
pub mod reports;
pub mod work;
