//! Work management: project cards with progress, budget and status filter

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{Project, ProjectStatus};
use crate::modules::export::ExportKind;
use crate::modules::forms::DialogKind;
use crate::modules::listing::ListingState;
use crate::ui::widgets::{meter_text, Meter};
use crate::ui::{self, tone_color};

pub const EMPTY_STATE: &str = "No projects found matching your criteria.";

#[derive(Debug, Default)]
pub struct Work {
    listing: ListingState,
}

impl Work {
    pub fn new() -> Self {
        Self::default()
    }

    fn selected<'a>(&self, ctx: &'a Context) -> Option<&'a Project> {
        self.listing
            .selected_index(&ctx.roster.projects)
            .and_then(|idx| ctx.roster.projects.get(idx))
    }

    fn remove_selected(&mut self, ctx: &mut Context) -> Action {
        let Some(id) = self.selected(ctx).map(|project| project.id) else {
            return Action::None;
        };
        if ctx.roster.remove_project(id).is_none() {
            return Action::None;
        }
        let len = self.visible_len(ctx);
        self.listing.clamp(len);
        Action::warn("Project Removed", "Project has been removed from the system.")
    }
}

impl Module for Work {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.visible_len(ctx);
                self.listing.down(len);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.listing.up();
                Action::None
            }
            KeyCode::Char('a') => Action::OpenDialog(DialogKind::Project),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(ctx),
            KeyCode::Char('f') => {
                self.listing.cycle_status(&ProjectStatus::FILTERS);
                Action::None
            }
            KeyCode::Char('y') => match self.selected(ctx) {
                Some(project) => Action::Copy(project.name.clone()),
                None => Action::warn("Nothing to copy", "No project selected."),
            },
            KeyCode::Char('e') => Action::Export(ExportKind::Projects),
            KeyCode::Esc => {
                self.listing.clear();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);

        self.render_table(f, chunks[0], ctx);
        self.render_detail(f, chunks[1], ctx);
    }

    fn listing(&self) -> Option<&ListingState> {
        Some(&self.listing)
    }

    fn listing_mut(&mut self) -> Option<&mut ListingState> {
        Some(&mut self.listing)
    }

    fn visible_len(&self, ctx: &Context) -> usize {
        self.listing.visible(&ctx.roster.projects).len()
    }

    fn status_filters(&self) -> &'static [&'static str] {
        &ProjectStatus::FILTERS
    }
}

impl Work {
    fn render_table(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let projects = &ctx.roster.projects;
        let visible = self.listing.visible(projects);
        let title = format!(
            "Projects ({}/{}){}",
            visible.len(),
            projects.len(),
            self.listing.summary()
        );
        let block = Block::default().borders(Borders::ALL).title(title);

        if visible.is_empty() {
            let empty = Paragraph::new(EMPTY_STATE)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(empty, area);
            return;
        }

        let rows: Vec<Row> = visible
            .iter()
            .filter_map(|&idx| projects.get(idx))
            .map(|project| {
                Row::new(vec![
                    Span::raw(project.name.clone()),
                    Span::raw(project.location.clone()),
                    Span::raw(format!(
                        "{} {:>3}%",
                        meter_text(u64::from(project.progress), 100, 8),
                        project.progress
                    )),
                    Span::styled(
                        project.status.label(),
                        Style::default().fg(tone_color(project.status.tone())),
                    ),
                    Span::styled(
                        project.priority.label(),
                        Style::default().fg(tone_color(project.priority.tone())),
                    ),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(26),
                Constraint::Percentage(16),
                Constraint::Percentage(24),
                Constraint::Percentage(18),
                Constraint::Percentage(16),
            ],
        )
        .header(
            Row::new(vec!["Project", "Location", "Progress", "Status", "Priority"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .block(block)
        .highlight_style(ui::highlight_style())
        .highlight_symbol(">> ");

        let mut state = TableState::default();
        state.select(Some(self.listing.selected));
        f.render_stateful_widget(table, area, &mut state);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let block = Block::default().borders(Borders::ALL).title("Project");
        let Some(project) = self.selected(ctx) else {
            f.render_widget(Paragraph::new("No project selected").block(block), area);
            return;
        };

        let label = Style::default().fg(Color::DarkGray);
        let spend = Style::default().fg(tone_color(project.spend_tone()));
        let lines = vec![
            Line::from(Span::styled(
                project.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(project.description.clone(), label)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Location ", label),
                Span::raw(project.location.clone()),
            ]),
            Line::from(vec![
                Span::styled("Dates    ", label),
                Span::raw(format!(
                    "{} → {}",
                    ctx.date(project.start_date),
                    ctx.date(project.end_date)
                )),
            ]),
            Line::from(vec![
                Span::styled("Workers  ", label),
                Span::raw(project.assigned_workers.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Progress ", label),
                Span::raw(format!(
                    "{} {}%",
                    meter_text(u64::from(project.progress), 100, 12),
                    project.progress
                )),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled("Budget   ", label), Span::raw(ctx.money(project.budget))]),
            Line::from(vec![Span::styled("Spent    ", label), Span::styled(ctx.money(project.spent), spend)]),
            Line::from(vec![
                Span::styled("Used     ", label),
                Span::styled(format!("{:.0}%", project.spend_ratio() * 100.0), spend),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "a add · d remove · y copy name · e export",
                label,
            )),
        ];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, chunks[0]);

        let usage = Block::default().borders(Borders::ALL).title("Budget used");
        let inner = usage.inner(chunks[1]);
        f.render_widget(usage, chunks[1]);
        f.render_widget(Meter::new(project.spent, project.budget).style(spend), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Roster;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn search_matches_project_location() {
        let ctx = Context::new(Roster::seeded());
        let mut view = Work::new();
        view.listing.set_query("DELHI");
        let visible = view.listing.visible(&ctx.roster.projects);
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|&idx| ctx.roster.projects[idx].location.contains("Delhi")));
    }

    #[test]
    fn status_filter_uses_normalized_keys() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Work::new();
        for _ in 0..3 {
            view.handle_key(key('f'), &mut ctx);
        }
        assert_eq!(view.listing.status.key(), "almostdone");
        let visible = view.listing.visible(&ctx.roster.projects);
        assert_eq!(visible.len(), 1);
        assert_eq!(ctx.roster.projects[visible[0]].status, ProjectStatus::AlmostDone);
    }

    #[test]
    fn delete_reports_project_removed() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Work::new();
        let before = view.visible_len(&ctx);
        let action = view.handle_key(key('d'), &mut ctx);
        assert_eq!(
            action,
            Action::warn("Project Removed", "Project has been removed from the system.")
        );
        assert_eq!(view.visible_len(&ctx), before - 1);
    }

    #[test]
    fn selection_clamps_after_removing_last_row() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Work::new();
        view.listing.bottom(view.visible_len(&ctx));
        view.handle_key(key('d'), &mut ctx);
        assert_eq!(view.listing.selected, 2);
    }
}
