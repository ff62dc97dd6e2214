use std::path::PathBuf;
use std::time::{Duration, Instant};

use arboard::Clipboard;
use tracing::{debug, error, info, warn};

use crate::config::{self, Config};
use crate::core::{parse_command, Action, Command, Context, Module, Notice, NotifyLevel};
use crate::domain::{Searchable, StatusFilter};
use crate::modules::dashboard::Dashboard;
use crate::modules::export::{self, ExportError, ExportKind, ExportReport};
use crate::modules::forms::{DialogKind, DialogOutcome, FormDialog};
use crate::modules::help::Help;
use crate::modules::labour::Labour;
use crate::modules::listing::ListingState;
use crate::modules::payments::Payments;
use crate::modules::reports::{ReportSnapshot, Reports};
use crate::modules::work::Work;
use crate::store::Roster;

/// Second key of a chord must arrive within this window
const CHORD_TIMEOUT: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Dashboard,
    Labour,
    Work,
    Payments,
    Reports,
    Help,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Labour,
        Section::Work,
        Section::Payments,
        Section::Reports,
        Section::Help,
    ];

    /// Stable identifier used by config, CLI and the command bar
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Labour => "labour",
            Section::Work => "work",
            Section::Payments => "payments",
            Section::Reports => "reports",
            Section::Help => "help",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Labour => "Labour Management",
            Section::Work => "Work Management",
            Section::Payments => "Payments",
            Section::Reports => "Reports",
            Section::Help => "Help & Support",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Section::Dashboard => '1',
            Section::Labour => '2',
            Section::Work => '3',
            Section::Payments => '4',
            Section::Reports => '5',
            Section::Help => '6',
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        let id = id.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(id))
    }

    /// Like `from_id`, but unknown identifiers land on the dashboard.
    pub fn resolve(id: &str) -> Section {
        Section::from_id(id).unwrap_or(Section::Dashboard)
    }

    pub fn from_shortcut(c: char) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| section.shortcut() == c)
    }

    /// Add dialog offered by the section
    pub fn dialog(&self) -> Option<DialogKind> {
        match self {
            Section::Labour => Some(DialogKind::Worker),
            Section::Work => Some(DialogKind::Project),
            Section::Payments => Some(DialogKind::Payment),
            _ => None,
        }
    }

    pub fn export_kind(&self) -> Option<ExportKind> {
        match self {
            Section::Labour => Some(ExportKind::Workers),
            Section::Work => Some(ExportKind::Projects),
            Section::Payments => Some(ExportKind::Payments),
            Section::Reports => Some(ExportKind::Report),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    List,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Command,
    Dialog,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub title: String,
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

#[derive(Debug, Clone)]
pub struct PendingChord {
    pub key: char,
    pub since: Instant,
}

pub struct App {
    pub ctx: Context,
    pub active_section: Section,
    pub focus: Focus,
    pub input_mode: InputMode,

    pub dashboard: Dashboard,
    pub labour: Labour,
    pub work: Work,
    pub payments: Payments,
    pub reports: Reports,
    pub help: Help,

    pub dialog: Option<FormDialog>,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub pending_chord: Option<PendingChord>,

    pub help_open: bool,
    pub settings_open: bool,
    pub should_quit: bool,

    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub toast_ttl: Duration,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut ctx = Context::new(Roster::seeded());
        ctx.currency = config.preferences.currency;
        ctx.date_format = config.preferences.date_format;

        Self {
            ctx,
            active_section: Section::resolve(&config.start_section),
            focus: Focus::List,
            input_mode: InputMode::Normal,
            dashboard: Dashboard::new(),
            labour: Labour::new(),
            work: Work::new(),
            payments: Payments::new(),
            reports: Reports::new(),
            help: Help::new(),
            dialog: None,
            command: CommandBar::default(),
            status: None,
            pending_chord: None,
            help_open: false,
            settings_open: false,
            should_quit: false,
            toast_ttl: Duration::from_secs(config.toast_seconds.max(1)),
            config,
            config_path: None,
            log_path: None,
            export_dir: config::export_dir(),
        }
    }

    pub fn module(&self, section: Section) -> &dyn Module {
        match section {
            Section::Dashboard => &self.dashboard,
            Section::Labour => &self.labour,
            Section::Work => &self.work,
            Section::Payments => &self.payments,
            Section::Reports => &self.reports,
            Section::Help => &self.help,
        }
    }

    /// Active view plus the shared context, borrowed together.
    pub fn active_module_mut(&mut self) -> (&mut dyn Module, &mut Context) {
        let module: &mut dyn Module = match self.active_section {
            Section::Dashboard => &mut self.dashboard,
            Section::Labour => &mut self.labour,
            Section::Work => &mut self.work,
            Section::Payments => &mut self.payments,
            Section::Reports => &mut self.reports,
            Section::Help => &mut self.help,
        };
        (module, &mut self.ctx)
    }

    pub fn active_listing(&self) -> Option<&ListingState> {
        self.module(self.active_section).listing()
    }

    pub fn active_listing_mut(&mut self) -> Option<&mut ListingState> {
        self.active_module_mut().0.listing_mut()
    }

    pub fn visible_len(&self) -> usize {
        self.module(self.active_section).visible_len(&self.ctx)
    }

    pub fn focus_label(&self) -> &'static str {
        match self.focus {
            Focus::Sidebar => "Sidebar",
            Focus::List => "List",
            Focus::Details => "Details",
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.input_mode {
            InputMode::Normal => "NORMAL",
            InputMode::Search => "SEARCH",
            InputMode::Command => "COMMAND",
            InputMode::Dialog => "DIALOG",
        }
    }

    // Status / toasts

    pub fn set_status(&mut self, title: impl Into<String>, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            title: title.into(),
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn notify(&mut self, notice: Notice) {
        debug!(title = %notice.title, level = ?notice.level, "toast");
        self.set_status(notice.title, notice.body, notice.level);
    }

    pub fn status_text(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn on_tick(&mut self) {
        self.clear_expired_chord();
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > self.toast_ttl {
                self.status = None;
            }
        }
    }

    pub fn clear_expired_chord(&mut self) {
        if let Some(chord) = self.pending_chord.as_ref() {
            if chord.since.elapsed() > CHORD_TIMEOUT {
                self.pending_chord = None;
            }
        }
    }

    /// Record `key` as a chord start. Returns true when it completes a
    /// pending chord of the same key instead.
    pub fn chord(&mut self, key: char) -> bool {
        self.clear_expired_chord();
        match self.pending_chord.take() {
            Some(pending) if pending.key == key => true,
            _ => {
                self.pending_chord = Some(PendingChord {
                    key,
                    since: Instant::now(),
                });
                false
            }
        }
    }

    // Navigation

    pub fn set_section(&mut self, section: Section) {
        if section != self.active_section {
            info!(from = self.active_section.id(), to = section.id(), "navigate");
        }
        self.active_section = section;
        self.pending_chord = None;
        if self.focus == Focus::Details && self.active_listing().is_none() {
            self.focus = Focus::List;
        }
    }

    pub fn cycle_section(&mut self, forward: bool) {
        let index = Section::ALL
            .iter()
            .position(|section| *section == self.active_section)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % Section::ALL.len()
        } else {
            (index + Section::ALL.len() - 1) % Section::ALL.len()
        };
        self.set_section(Section::ALL[next]);
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (Focus::Sidebar, true) => Focus::List,
            (Focus::List, true) => Focus::Details,
            (Focus::Details, true) => Focus::Sidebar,
            (Focus::Sidebar, false) => Focus::Details,
            (Focus::List, false) => Focus::Sidebar,
            (Focus::Details, false) => Focus::List,
        };
    }

    pub fn focus_left(&mut self) {
        self.focus = match self.focus {
            Focus::Details => Focus::List,
            _ => Focus::Sidebar,
        };
    }

    pub fn focus_right(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::List,
            _ => Focus::Details,
        };
    }

    pub fn jump(&mut self, top: bool) {
        let (module, ctx) = self.active_module_mut();
        module.jump(top, ctx);
    }

    pub fn clamp_selections(&mut self) {
        for section in [Section::Labour, Section::Work, Section::Payments] {
            let len = self.module(section).visible_len(&self.ctx);
            let listing = match section {
                Section::Labour => self.labour.listing_mut(),
                Section::Work => self.work.listing_mut(),
                _ => self.payments.listing_mut(),
            };
            if let Some(listing) = listing {
                listing.clamp(len);
            }
        }
    }

    // Module dispatch

    pub fn handle_module_key(&mut self, key: crossterm::event::KeyEvent) {
        let (module, ctx) = self.active_module_mut();
        let action = module.handle_key(key, ctx);
        self.apply_action(action);
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Notify(notice) => self.notify(notice),
            Action::OpenDialog(kind) => self.open_dialog(kind),
            Action::Copy(text) => self.copy_to_clipboard(text),
            Action::Export(kind) => self.export(kind),
        }
    }

    // Dialogs

    pub fn open_dialog(&mut self, kind: DialogKind) {
        self.set_section(kind.section());
        self.dialog = Some(FormDialog::open(kind, &self.ctx.roster));
        self.input_mode = InputMode::Dialog;
    }

    pub fn handle_dialog_key(&mut self, key: crossterm::event::KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        match dialog.handle_key(key) {
            DialogOutcome::Pending => {}
            DialogOutcome::Cancelled => {
                self.dialog = None;
                self.input_mode = InputMode::Normal;
            }
            DialogOutcome::Submitted => {
                let kind = dialog.kind;
                info!(dialog = kind.submit_label(), "dialog submitted");
                self.dialog = None;
                self.input_mode = InputMode::Normal;
                self.notify(kind.success_notice());
            }
        }
    }

    pub fn save_settings(&mut self) {
        info!("settings saved");
        self.notify(Notice::info(
            "Settings Saved",
            "Your settings have been updated successfully.",
        ));
    }

    // Search

    pub fn enter_search(&mut self) {
        if self.active_listing().is_none() {
            self.notify(Notice::warn(
                "Search",
                format!("{} has no list to search.", self.active_section.title()),
            ));
            return;
        }
        self.input_mode = InputMode::Search;
        self.focus = Focus::List;
    }

    pub fn exit_search(&mut self, keep: bool) {
        if !keep {
            if let Some(listing) = self.active_listing_mut() {
                listing.set_query("");
            }
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn search_push(&mut self, c: char) {
        if let Some(listing) = self.active_listing_mut() {
            listing.push_char(c);
        }
    }

    pub fn search_pop(&mut self) {
        if let Some(listing) = self.active_listing_mut() {
            listing.pop_char();
        }
    }

    // Command bar

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        self.command.last = Some(input.clone());
        debug!(command = %input, "command");
        self.run_command(parse_command(&input));
    }

    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Go(section) => self.set_section(section),
            Command::Add => match self.active_section.dialog() {
                Some(kind) => self.open_dialog(kind),
                None => self.notify(Notice::warn(
                    "Add",
                    format!("Nothing to add in {}.", self.active_section.title()),
                )),
            },
            Command::Export => match self.active_section.export_kind() {
                Some(kind) => self.export(kind),
                None => self.notify(Notice::warn(
                    "Nothing to Export",
                    format!("{} has no exportable data.", self.active_section.title()),
                )),
            },
            Command::Status(Some(value)) => {
                let filter = StatusFilter::parse(&value);
                self.with_listing(|listing| listing.set_status(filter));
            }
            Command::Status(None) => {
                let options = self.module(self.active_section).status_filters();
                if options.is_empty() {
                    self.with_listing(|_| {});
                } else {
                    self.notify(Notice::info("Status Filters", options.join(", ")));
                }
            }
            Command::Search(text) => {
                let text = text.unwrap_or_default();
                self.with_listing(|listing| listing.set_query(text));
            }
            Command::Clear => {
                self.with_listing(|listing| {
                    listing.clear();
                });
            }
            Command::Settings => self.settings_open = true,
            Command::Quit => self.should_quit = true,
            Command::Unknown(input) => self.notify(Notice::warn(
                "Unknown Command",
                format!("Unknown command: {input}"),
            )),
        }
    }

    fn with_listing(&mut self, apply: impl FnOnce(&mut ListingState)) {
        let title = self.active_section.title();
        match self.active_listing_mut() {
            Some(listing) => apply(listing),
            None => self.notify(Notice::warn("Filter", format!("{title} has no list to filter."))),
        }
    }

    // Clipboard

    pub fn copy_to_clipboard(&mut self, text: String) {
        self.ctx.set_clipboard(text.clone());
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
            Ok(()) => {
                let shown = if text.chars().count() > 32 {
                    format!("{}…", text.chars().take(32).collect::<String>())
                } else {
                    text
                };
                self.notify(Notice::info("Copied", shown));
            }
            Err(err) => {
                warn!(error = %err, "clipboard unavailable");
                self.notify(Notice::error("Copy Failed", "Clipboard not available"));
            }
        }
    }

    // Export

    pub fn export(&mut self, kind: ExportKind) {
        let result = self.write_export(kind);
        match result {
            Ok(report) => {
                info!(
                    kind = kind.prefix(),
                    count = report.count,
                    path = %report.path.display(),
                    "export written"
                );
                self.notify(Notice::info(
                    "Export Complete",
                    format!(
                        "Exported {} {} to {}",
                        report.count,
                        kind.noun(),
                        report.path.display()
                    ),
                ));
            }
            Err(ExportError::Empty) => {
                self.notify(Notice::warn("Nothing to Export", "No rows match the current filter."))
            }
            Err(err) => {
                error!(kind = kind.prefix(), error = %err, "export failed");
                self.notify(Notice::error("Export Failed", err.to_string()));
            }
        }
    }

    fn write_export(&self, kind: ExportKind) -> Result<ExportReport, ExportError> {
        let roster = &self.ctx.roster;
        match kind {
            ExportKind::Workers => {
                export::export_workers(&self.export_dir, &visible_rows(&self.labour, &roster.workers))
            }
            ExportKind::Projects => {
                export::export_projects(&self.export_dir, &visible_rows(&self.work, &roster.projects))
            }
            ExportKind::Payments => export::export_payments(
                &self.export_dir,
                &visible_rows(&self.payments, &roster.payments),
            ),
            ExportKind::Report => export::export_report(
                &self.export_dir,
                &self.reports.snapshot(),
                ReportSnapshot::SECTIONS,
            ),
        }
    }
}

/// Records of `records` that pass the view's search and filter, in order.
fn visible_rows<'a, T: Searchable>(module: &dyn Module, records: &'a [T]) -> Vec<&'a T> {
    match module.listing() {
        Some(listing) => listing
            .visible(records)
            .into_iter()
            .filter_map(|idx| records.get(idx))
            .collect(),
        None => records.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn unknown_section_falls_back_to_dashboard() {
        assert_eq!(Section::resolve("settings"), Section::Dashboard);
        assert_eq!(Section::resolve(""), Section::Dashboard);
        assert_eq!(Section::resolve("Payments"), Section::Payments);
    }

    #[test]
    fn shortcuts_are_one_to_six() {
        let keys: String = Section::ALL.iter().map(Section::shortcut).collect();
        assert_eq!(keys, "123456");
        assert_eq!(Section::from_shortcut('4'), Some(Section::Payments));
        assert_eq!(Section::from_shortcut('7'), None);
    }

    #[test]
    fn app_starts_in_configured_section() {
        let config = Config {
            start_section: "work".to_string(),
            ..Config::default()
        };
        let app = App::new(config);
        assert_eq!(app.active_section, Section::Work);
        assert_eq!(app.ctx.roster.workers.len(), 4);
    }

    #[test]
    fn chord_completes_on_second_press() {
        let mut app = App::new(Config::default());
        assert!(!app.chord('g'));
        assert!(app.chord('g'));
        assert!(app.pending_chord.is_none());
    }

    #[test]
    fn toast_expires_after_ttl() {
        let mut app = App::new(Config::default());
        app.set_status("Title", "Body", NotifyLevel::Info);
        if let Some(status) = app.status.as_mut() {
            status.since = Instant::now() - Duration::from_secs(10);
        }
        app.on_tick();
        assert!(app.status.is_none());
    }

    #[test]
    fn section_cycle_wraps() {
        let mut app = App::new(Config::default());
        app.cycle_section(false);
        assert_eq!(app.active_section, Section::Help);
        app.cycle_section(true);
        assert_eq!(app.active_section, Section::Dashboard);
    }

    #[test]
    fn export_writes_filtered_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = App::new(Config::default());
        app.export_dir = tmp.path().to_path_buf();
        app.set_section(Section::Payments);
        app.run_command(Command::Status(Some("paid".to_string())));

        app.export(ExportKind::Payments);

        let status = app.status_text().unwrap();
        assert_eq!(status.title, "Export Complete");
        assert!(status.text.starts_with("Exported 3 payments"));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn bare_status_command_lists_filters() {
        let mut app = App::new(Config::default());
        app.set_section(Section::Labour);
        app.run_command(Command::Status(None));
        let status = app.status_text().unwrap();
        assert_eq!(status.title, "Status Filters");
        assert_eq!(status.text, "all, available, working");

        app.set_section(Section::Reports);
        app.run_command(Command::Status(None));
        assert_eq!(app.status_text().unwrap().level, NotifyLevel::Warn);
    }

    #[test]
    fn export_of_empty_result_warns() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = App::new(Config::default());
        app.export_dir = tmp.path().to_path_buf();
        app.set_section(Section::Labour);
        app.run_command(Command::Search(Some("xyz".to_string())));

        app.export(ExportKind::Workers);

        assert_eq!(app.status_text().unwrap().level, NotifyLevel::Warn);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
