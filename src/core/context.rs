//! Shared context passed to modules

use crate::domain::{Currency, DateFormat};
use crate::store::Roster;

/// Shared context available to all modules
#[derive(Debug, Default)]
pub struct Context {
    /// Live record collections
    pub roster: Roster,

    /// Display currency
    pub currency: Currency,

    /// Display date format
    pub date_format: DateFormat,

    /// Last text copied to the clipboard
    pub clipboard: Option<String>,
}

impl Context {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    pub fn money(&self, amount: u64) -> String {
        self.currency.format(amount)
    }

    pub fn date(&self, date: chrono::NaiveDate) -> String {
        self.date_format.format(date)
    }

    /// Set clipboard content
    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }
}
