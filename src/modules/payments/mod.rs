//! Payment management: summary cards, payment table, mark-paid

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{Payment, PaymentStatus, Tone};
use crate::modules::export::ExportKind;
use crate::modules::forms::DialogKind;
use crate::modules::listing::ListingState;
use crate::store::MarkPaid;
use crate::ui::{self, tone_color};

pub const EMPTY_STATE: &str = "No payments found matching your criteria.";

/// Headline figures shown above the table. These are period totals, not
/// sums over the listed records.
pub struct PaymentSummary {
    pub total_paid: u64,
    pub total_pending: u64,
    pub total_overdue: u64,
    pub this_month: u32,
}

pub const SUMMARY: PaymentSummary = PaymentSummary {
    total_paid: 156_750,
    total_pending: 23_400,
    total_overdue: 8_950,
    this_month: 89,
};

#[derive(Debug, Default)]
pub struct Payments {
    listing: ListingState,
}

/// One-line description used for the clipboard.
pub fn summary_line(payment: &Payment, ctx: &Context) -> String {
    format!(
        "{} · {} · {} · {} · {}",
        payment.worker_name,
        ctx.money(payment.amount),
        ctx.date(payment.date),
        payment.project,
        payment.status.label()
    )
}

impl Payments {
    pub fn new() -> Self {
        Self::default()
    }

    fn selected<'a>(&self, ctx: &'a Context) -> Option<&'a Payment> {
        self.listing
            .selected_index(&ctx.roster.payments)
            .and_then(|idx| ctx.roster.payments.get(idx))
    }

    fn mark_selected_paid(&mut self, ctx: &mut Context) -> Action {
        let Some(id) = self.selected(ctx).map(|payment| payment.id) else {
            return Action::None;
        };
        let action = match ctx.roster.mark_paid(id) {
            MarkPaid::Updated => {
                Action::info("Payment Updated", "Payment status has been updated to paid.")
            }
            MarkPaid::AlreadyPaid => Action::warn("Already Paid", "This payment is already paid."),
            MarkPaid::NotFound => Action::None,
        };
        // A status filter may now hide the row
        let len = self.visible_len(ctx);
        self.listing.clamp(len);
        action
    }
}

impl Module for Payments {
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
            KeyCode::Char('a') => Action::OpenDialog(DialogKind::Payment),
            KeyCode::Char('m') => self.mark_selected_paid(ctx),
            KeyCode::Char('f') => {
                self.listing.cycle_status(&PaymentStatus::FILTERS);
                Action::None
            }
            KeyCode::Char('y') => match self.selected(ctx) {
                Some(payment) => Action::Copy(summary_line(payment, ctx)),
                None => Action::warn("Nothing to copy", "No payment selected."),
            },
            KeyCode::Char('e') => Action::Export(ExportKind::Payments),
            KeyCode::Esc => {
                self.listing.clear();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5), Constraint::Length(4)])
            .split(area);

        self.render_cards(f, chunks[0], ctx);
        self.render_table(f, chunks[1], ctx);
        self.render_detail(f, chunks[2], ctx);
    }

    fn listing(&self) -> Option<&ListingState> {
        Some(&self.listing)
    }

    fn listing_mut(&mut self) -> Option<&mut ListingState> {
        Some(&mut self.listing)
    }

    fn visible_len(&self, ctx: &Context) -> usize {
        self.listing.visible(&ctx.roster.payments).len()
    }

    fn status_filters(&self) -> &'static [&'static str] {
        &PaymentStatus::FILTERS
    }
}

impl Payments {
    fn render_cards(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let figures = [
            ("Total Paid", ctx.money(SUMMARY.total_paid), Tone::Green),
            ("Pending", ctx.money(SUMMARY.total_pending), Tone::Orange),
            ("Overdue", ctx.money(SUMMARY.total_overdue), Tone::Red),
            ("This Month", format!("{} payments", SUMMARY.this_month), Tone::Blue),
        ];

        for ((title, value, tone), card) in figures.into_iter().zip(cards.iter()) {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                value,
                Style::default()
                    .fg(tone_color(tone))
                    .add_modifier(Modifier::BOLD),
            )))
            .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(paragraph, *card);
        }
    }

    fn render_table(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let payments = &ctx.roster.payments;
        let visible = self.listing.visible(payments);
        let title = format!(
            "Payments ({}/{}){}",
            visible.len(),
            payments.len(),
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
            .filter_map(|&idx| payments.get(idx))
            .map(|payment| {
                Row::new(vec![
                    Span::raw(payment.worker_name.clone()),
                    Span::raw(ctx.money(payment.amount)),
                    Span::raw(ctx.date(payment.date)),
                    Span::raw(payment.project.clone()),
                    Span::raw(payment.payment_method.clone()),
                    Span::styled(
                        format!("{} {}", payment.status.icon(), payment.status.label()),
                        Style::default().fg(tone_color(payment.status.tone())),
                    ),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(18),
                Constraint::Percentage(12),
                Constraint::Percentage(14),
                Constraint::Percentage(24),
                Constraint::Percentage(16),
                Constraint::Percentage(16),
            ],
        )
        .header(
            Row::new(vec!["Worker", "Amount", "Date", "Project", "Method", "Status"])
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
        let label = Style::default().fg(Color::DarkGray);
        let lines = match self.selected(ctx) {
            Some(payment) => {
                let hint = if payment.status == PaymentStatus::Paid {
                    "y copy · e export"
                } else {
                    "m mark paid · y copy · e export"
                };
                vec![
                    Line::from(vec![
                        Span::styled("Work ", label),
                        Span::raw(payment.work_description.clone()),
                    ]),
                    Line::from(Span::styled(hint, label)),
                ]
            }
            None => vec![Line::from("No payment selected")],
        };
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Details"))
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
    fn mark_paid_updates_pending_payment() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Payments::new();
        view.listing.set_query("ravi");

        let action = view.handle_key(key('m'), &mut ctx);
        assert_eq!(
            action,
            Action::info("Payment Updated", "Payment status has been updated to paid.")
        );
        assert_eq!(ctx.roster.payments[3].status, PaymentStatus::Paid);
    }

    #[test]
    fn mark_paid_on_paid_payment_warns() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Payments::new();
        let action = view.handle_key(key('m'), &mut ctx);
        assert!(matches!(
            action,
            Action::Notify(ref notice) if notice.level == crate::core::NotifyLevel::Warn
        ));
        assert_eq!(ctx.roster.payments[0].status, PaymentStatus::Paid);
    }

    #[test]
    fn marking_paid_under_pending_filter_hides_row() {
        let mut ctx = Context::new(Roster::seeded());
        let mut view = Payments::new();
        view.handle_key(key('f'), &mut ctx);
        view.handle_key(key('f'), &mut ctx);
        assert_eq!(view.listing.status.key(), "pending");
        assert_eq!(view.visible_len(&ctx), 1);

        view.handle_key(key('m'), &mut ctx);
        assert_eq!(view.visible_len(&ctx), 0);
        assert_eq!(view.listing.selected, 0);
    }

    #[test]
    fn search_matches_worker_or_project() {
        let ctx = Context::new(Roster::seeded());
        let mut view = Payments::new();
        view.listing.set_query("construction");
        assert_eq!(view.visible_len(&ctx), 2);
        view.listing.set_query("mohit");
        assert_eq!(view.visible_len(&ctx), 1);
    }

    #[test]
    fn summary_line_names_worker_and_amount() {
        let ctx = Context::new(Roster::seeded());
        let line = summary_line(&ctx.roster.payments[0], &ctx);
        assert_eq!(
            line,
            "Rajesh Kumar · ₹1,250 · 20-01-2024 · Construction Site A · Paid"
        );
    }
}
