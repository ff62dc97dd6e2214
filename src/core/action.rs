//! Actions that modules return to communicate with the app

use crate::modules::export::ExportKind;
use crate::modules::forms::DialogKind;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Show a toast on the command line
    Notify(Notice),

    /// Open a form dialog (switches to the dialog's section first)
    OpenDialog(DialogKind),

    /// Copy text to the system clipboard
    Copy(String),

    /// Write the current data to an export file
    Export(ExportKind),
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}

/// A titled toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub level: NotifyLevel,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>, level: NotifyLevel) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, NotifyLevel::Info)
    }

    pub fn warn(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, NotifyLevel::Warn)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, NotifyLevel::Error)
    }
}

impl Action {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Action::Notify(Notice::info(title, body))
    }

    pub fn warn(title: impl Into<String>, body: impl Into<String>) -> Self {
        Action::Notify(Notice::warn(title, body))
    }
}
