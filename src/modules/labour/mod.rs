//! Labour management: worker roster with search, status filter and removal

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{Searchable, Worker, WorkerStatus};
use crate::modules::export::ExportKind;
use crate::modules::forms::DialogKind;
use crate::modules::listing::ListingState;
use crate::ui::{self, tone_color};

pub const EMPTY_STATE: &str = "No workers found matching your criteria.";

#[derive(Debug, Default)]
pub struct Labour {
    listing: ListingState,
}

impl Labour {
    pub fn new() -> Self {
        Self::default()
    }

    fn selected<'a>(&self, ctx: &'a Context) -> Option<&'a Worker> {
        self.listing
            .selected_index(&ctx.roster.workers)
            .and_then(|idx| ctx.roster.workers.get(idx))
    }

    fn remove_selected(&mut self, ctx: &mut Context) -> Action {
        let Some(id) = self.selected(ctx).map(|worker| worker.id) else {
            return Action::None;
        };
        if ctx.roster.remove_worker(id).is_none() {
            return Action::None;
        }
        let len = self.visible_len(ctx);
        self.listing.clamp(len);
        Action::warn("Worker Removed", "Worker has been removed from the system.")
    }
}

impl Module for Labour {
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
            KeyCode::Char('a') => Action::OpenDialog(DialogKind::Worker),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(ctx),
            KeyCode::Char('f') => {
                self.listing.cycle_status(&WorkerStatus::FILTERS);
                Action::None
            }
            KeyCode::Char('y') => match self.selected(ctx) {
                Some(worker) => Action::Copy(worker.phone.clone()),
                None => Action::warn("Nothing to copy", "No worker selected."),
            },
            KeyCode::Char('e') => Action::Export(ExportKind::Workers),
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
            .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
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
        self.listing.visible(&ctx.roster.workers).len()
    }

    fn status_filters(&self) -> &'static [&'static str] {
        &WorkerStatus::FILTERS
    }
}

impl Labour {
    fn render_table(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let workers = &ctx.roster.workers;
        let visible = self.listing.visible(workers);
        let title = format!(
            "Workers ({}/{}){}",
            visible.len(),
            workers.len(),
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
            .filter_map(|&idx| workers.get(idx))
            .map(|worker| {
                Row::new(vec![
                    Span::raw(worker.name.clone()),
                    Span::raw(worker.phone.clone()),
                    Span::raw(format!("{}/day", ctx.money(worker.daily_wage))),
                    Span::raw(worker.location.clone()),
                    Span::styled(
                        format!("★ {:.1}", worker.rating),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        worker.status.label(),
                        Style::default().fg(tone_color(worker.status.tone())),
                    ),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(22),
                Constraint::Percentage(22),
                Constraint::Percentage(14),
                Constraint::Percentage(14),
                Constraint::Percentage(10),
                Constraint::Percentage(18),
            ],
        )
        .header(
            Row::new(vec!["Name", "Phone", "Wage", "Location", "Rating", "Status"])
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
        let block = Block::default().borders(Borders::ALL).title("Worker");
        let Some(worker) = self.selected(ctx) else {
            f.render_widget(Paragraph::new("No worker selected").block(block), area);
            return;
        };

        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(Span::styled(
                worker.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                worker.status.label(),
                Style::default().fg(tone_color(worker.status.tone())),
            )),
            Line::from(""),
            Line::from(vec![Span::styled("Phone      ", label), Span::raw(worker.phone.clone())]),
            Line::from(vec![Span::styled("Location   ", label), Span::raw(worker.location.clone())]),
            Line::from(vec![
                Span::styled("Daily wage ", label),
                Span::raw(ctx.money(worker.daily_wage)),
            ]),
            Line::from(vec![
                Span::styled("Experience ", label),
                Span::raw(worker.experience.clone()),
            ]),
            Line::from(vec![
                Span::styled("Rating     ", label),
                Span::raw(format!("{:.1}", worker.rating)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Skills", label)),
        ];
        lines.extend(
            worker
                .tags()
                .iter()
                .map(|skill| Line::from(format!("  • {skill}"))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "a add · d remove · y copy phone · e export",
            label,
        )));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
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
    fn filter_cycles_through_worker_statuses() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Labour::new();
        view.handle_key(key('f'), &mut ctx);
        assert_eq!(view.listing.status.key(), "available");
        assert_eq!(view.visible_len(&ctx), 2);
        view.handle_key(key('f'), &mut ctx);
        assert_eq!(view.listing.status.key(), "working");
        view.handle_key(key('f'), &mut ctx);
        assert!(view.listing.status.is_all());
        assert_eq!(view.visible_len(&ctx), 4);
    }

    #[test]
    fn delete_removes_highlighted_worker() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Labour::new();
        view.handle_key(key('j'), &mut ctx);

        let action = view.handle_key(key('d'), &mut ctx);
        assert_eq!(
            action,
            Action::warn("Worker Removed", "Worker has been removed from the system.")
        );
        assert_eq!(ctx.roster.workers.len(), 3);
        assert!(ctx.roster.workers.iter().all(|w| w.name != "Amit Singh"));
    }

    #[test]
    fn delete_on_empty_result_is_noop() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Labour::new();
        view.listing.set_query("xyz");
        assert_eq!(view.handle_key(key('d'), &mut ctx), Action::None);
        assert_eq!(ctx.roster.workers.len(), 4);
    }

    #[test]
    fn copy_yields_phone_of_selection() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Labour::new();
        view.listing.set_query("suresh");
        match view.handle_key(key('y'), &mut ctx) {
            Action::Copy(text) => assert_eq!(text, ctx.roster.workers[2].phone),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn add_opens_worker_dialog() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Labour::new();
        assert_eq!(
            view.handle_key(key('a'), &mut ctx),
            Action::OpenDialog(DialogKind::Worker)
        );
    }
}
