//! Add-record dialogs
//!
//! A dialog only collects input for display. Submitting never turns the
//! field values into a record; it raises the kind's success notice and
//! closes.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::Section;
use crate::core::Notice;
use crate::store::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Worker,
    Project,
    Payment,
}

impl DialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::Worker => "Add New Worker",
            DialogKind::Project => "Create New Project",
            DialogKind::Payment => "Record New Payment",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            DialogKind::Worker => "Add Worker",
            DialogKind::Project => "Create Project",
            DialogKind::Payment => "Record Payment",
        }
    }

    /// Section that owns the dialog
    pub fn section(&self) -> Section {
        match self {
            DialogKind::Worker => Section::Labour,
            DialogKind::Project => Section::Work,
            DialogKind::Payment => Section::Payments,
        }
    }

    pub fn success_notice(&self) -> Notice {
        match self {
            DialogKind::Worker => {
                Notice::info("Worker Added", "New worker has been added successfully.")
            }
            DialogKind::Project => {
                Notice::info("Project Added", "New project has been created successfully.")
            }
            DialogKind::Payment => {
                Notice::info("Payment Recorded", "Payment has been recorded successfully.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text {
        value: String,
        placeholder: &'static str,
    },
    Select {
        options: Vec<String>,
        selected: Option<usize>,
        placeholder: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub input: FieldInput,
}

impl FormField {
    fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            input: FieldInput::Text {
                value: String::new(),
                placeholder,
            },
        }
    }

    fn select<S: Into<String>>(
        label: &'static str,
        placeholder: &'static str,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            label,
            input: FieldInput::Select {
                options: options.into_iter().map(Into::into).collect(),
                selected: None,
                placeholder,
            },
        }
    }

    /// Text shown in the field, or `None` when the placeholder applies.
    pub fn display_value(&self) -> Option<&str> {
        match &self.input {
            FieldInput::Text { value, .. } if !value.is_empty() => Some(value),
            FieldInput::Select {
                options,
                selected: Some(idx),
                ..
            } => options.get(*idx).map(String::as_str),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match &self.input {
            FieldInput::Text { placeholder, .. } | FieldInput::Select { placeholder, .. } => {
                placeholder
            }
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self.input, FieldInput::Select { .. })
    }

    fn cycle(&mut self, forward: bool) {
        if let FieldInput::Select {
            options, selected, ..
        } = &mut self.input
        {
            if options.is_empty() {
                return;
            }
            let len = options.len();
            *selected = Some(match (*selected, forward) {
                (None, true) => 0,
                (None, false) => len - 1,
                (Some(idx), true) => (idx + 1) % len,
                (Some(idx), false) => (idx + len - 1) % len,
            });
        }
    }

    fn type_char(&mut self, c: char) {
        if let FieldInput::Text { value, .. } = &mut self.input {
            value.push(c);
        }
    }

    fn backspace(&mut self) {
        if let FieldInput::Text { value, .. } = &mut self.input {
            value.pop();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Pending,
    Cancelled,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct FormDialog {
    pub kind: DialogKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormDialog {
    /// Build the dialog. Payment selects list the roster's current workers
    /// and projects.
    pub fn open(kind: DialogKind, roster: &Roster) -> Self {
        let fields = match kind {
            DialogKind::Worker => vec![
                FormField::text("Full Name", "Enter worker name"),
                FormField::text("Phone Number", "+91 9876543210"),
                FormField::text("Daily Wage (₹)", "500"),
                FormField::text("Location", "Delhi"),
                FormField::text("Skills", "Masonry, Painting"),
                FormField::select(
                    "Experience",
                    "Select experience",
                    ["1-2 years", "3-4 years", "5+ years"],
                ),
            ],
            DialogKind::Project => vec![
                FormField::text("Project Name", "Enter project name"),
                FormField::text("Description", "Brief project description"),
                FormField::text("Location", "Project location"),
                FormField::text("Start Date", "yyyy-mm-dd"),
                FormField::text("End Date", "yyyy-mm-dd"),
                FormField::text("Budget (₹)", "500000"),
                FormField::select("Priority", "Select priority", ["High", "Medium", "Low"]),
            ],
            DialogKind::Payment => vec![
                FormField::select("Select Worker", "Choose worker", roster.worker_names()),
                FormField::text("Amount (₹)", "1250"),
                FormField::text("Date", "yyyy-mm-dd"),
                FormField::select("Project", "Select project", roster.project_names()),
                FormField::select(
                    "Payment Method",
                    "Payment method",
                    ["Cash", "Bank Transfer", "UPI"],
                ),
                FormField::text("Work Description", "e.g., Masonry work - Day 5"),
            ],
        };

        Self {
            kind,
            fields,
            focused: 0,
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome {
        let len = self.fields.len();
        match key.code {
            KeyCode::Esc => return DialogOutcome::Cancelled,
            KeyCode::Enter => return DialogOutcome::Submitted,
            KeyCode::Tab | KeyCode::Down => {
                if len > 0 {
                    self.focused = (self.focused + 1) % len;
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if len > 0 {
                    self.focused = (self.focused + len - 1) % len;
                }
            }
            KeyCode::Left => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.cycle(false);
                }
            }
            KeyCode::Right | KeyCode::Char(' ')
                if self.focused_field().is_some_and(FormField::is_select) =>
            {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.cycle(true);
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.type_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.backspace();
                }
            }
            _ => {}
        }
        DialogOutcome::Pending
    }
}
