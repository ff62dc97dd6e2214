//! Currency and date display formatting

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Inr => "Indian Rupee (₹)",
            Currency::Usd => "US Dollar ($)",
            Currency::Eur => "Euro (€)",
        }
    }

    /// Full amount with digit grouping: `₹2,45,680` or `$245,680`.
    pub fn format(&self, amount: u64) -> String {
        let grouped = match self {
            Currency::Inr => group_indian(amount),
            Currency::Usd | Currency::Eur => group_western(amount),
        };
        format!("{}{}", self.symbol(), grouped)
    }

    /// Rounded thousands: `₹246K`.
    pub fn format_thousands(&self, amount: u64) -> String {
        format!("{}{:.0}K", self.symbol(), amount as f64 / 1_000.0)
    }

    /// Large amounts: lakhs for rupees (`₹21.3L`), millions otherwise.
    pub fn format_large(&self, amount: u64) -> String {
        match self {
            Currency::Inr => format!("{}{:.1}L", self.symbol(), amount as f64 / 100_000.0),
            Currency::Usd | Currency::Eur => {
                format!("{}{:.2}M", self.symbol(), amount as f64 / 1_000_000.0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "dd-mm-yyyy")]
    DayFirst,
    #[serde(rename = "mm-dd-yyyy")]
    MonthFirst,
    #[serde(rename = "yyyy-mm-dd")]
    Iso,
}

impl DateFormat {
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::DayFirst => "DD-MM-YYYY",
            DateFormat::MonthFirst => "MM-DD-YYYY",
            DateFormat::Iso => "YYYY-MM-DD",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        let pattern = match self {
            DateFormat::DayFirst => "%d-%m-%Y",
            DateFormat::MonthFirst => "%m-%d-%Y",
            DateFormat::Iso => "%Y-%m-%d",
        };
        date.format(pattern).to_string()
    }
}

/// Lakh grouping: last three digits, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + head.len() / 2 + 1);
    for (idx, ch) in head.chars().enumerate() {
        if idx > 0 && (head.len() - idx) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

fn group_western(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
