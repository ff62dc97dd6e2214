//! LabourDesk: a terminal dashboard for managing daily-wage workers,
//! projects and payments.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod logging;
pub mod modules;
pub mod store;
pub mod ui;
