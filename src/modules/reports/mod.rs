//! Reports & analytics: key metrics, expense trends, budget usage, top workers

mod data;

pub use data::{
    Attendance, Metric, MonthlyExpense, ProjectBudget, Share, WorkerPerformance, ATTENDANCE,
    METRICS, MONTHLY_EXPENSES, MONTHLY_SCALE, PAYMENT_METHODS, PROJECT_BUDGETS, TOP_WORKERS,
    WORK_DISTRIBUTION,
};

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use serde::Serialize;

use crate::core::{Action, Context, Module};
use crate::domain::{usage_tone, Tone};
use crate::modules::export::ExportKind;
use crate::ui::tone_color;
use crate::ui::widgets::meter_text;

/// Reporting window. Only changes the labels; the figures are fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::Quarter,
        ReportPeriod::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "This Week",
            ReportPeriod::Month => "This Month",
            ReportPeriod::Quarter => "This Quarter",
            ReportPeriod::Year => "This Year",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Serialize)]
pub struct WorkerReport {
    #[serde(flatten)]
    pub worker: &'static WorkerPerformance,
    pub average_per_day: u64,
}

/// Everything the reports view shows, in export form.
#[derive(Debug, Serialize)]
pub struct ReportSnapshot {
    pub period: &'static str,
    pub generated_at: String,
    pub metrics: &'static [Metric],
    pub monthly_expenses: &'static [MonthlyExpense],
    pub budget_analysis: &'static [ProjectBudget],
    pub top_workers: Vec<WorkerReport>,
    pub work_distribution: &'static [Share],
    pub payment_methods: &'static [Share],
    pub attendance: &'static Attendance,
}

impl ReportSnapshot {
    pub const SECTIONS: usize = 7;
}

#[derive(Debug, Default)]
pub struct Reports {
    period: ReportPeriod,
    scroll: u16,
}

impl Reports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot {
            period: self.period.label(),
            generated_at: Local::now().to_rfc3339(),
            metrics: &METRICS,
            monthly_expenses: &MONTHLY_EXPENSES,
            budget_analysis: &PROJECT_BUDGETS,
            top_workers: TOP_WORKERS
                .iter()
                .map(|worker| WorkerReport {
                    worker,
                    average_per_day: worker.average_per_day(),
                })
                .collect(),
            work_distribution: &WORK_DISTRIBUTION,
            payment_methods: &PAYMENT_METHODS,
            attendance: &ATTENDANCE,
        }
    }
}

impl Module for Reports {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('p') => {
                self.period = self.period.next();
                Action::None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let max = detail_lines(ctx).len() as u16;
                self.scroll = (self.scroll + 1).min(max.saturating_sub(1));
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('e') => Action::Export(ExportKind::Report),
            _ => Action::None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        render_metrics(f, chunks[0]);

        let title = format!("Reports & Analytics · {}  (p period · e export)", self.period.label());
        let paragraph = Paragraph::new(Text::from(detail_lines(ctx)))
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((self.scroll, 0));
        f.render_widget(paragraph, chunks[1]);
    }

    fn jump(&mut self, top: bool, ctx: &Context) {
        self.scroll = if top {
            0
        } else {
            (detail_lines(ctx).len() as u16).saturating_sub(1)
        };
    }
}

fn render_metrics(f: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    let trend_tones = [Tone::Green, Tone::Blue, Tone::Purple, Tone::Orange];

    for ((metric, tone), card) in METRICS.iter().zip(trend_tones).zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                metric.value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                metric.trend,
                Style::default().fg(tone_color(tone)),
            )),
        ];
        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(metric.title));
        f.render_widget(paragraph, *card);
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn detail_lines(ctx: &Context) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![heading("Monthly Expenses")];
    for month in MONTHLY_EXPENSES.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<4}", month.month), label),
            Span::styled(
                meter_text(month.amount, MONTHLY_SCALE, 24),
                Style::default().fg(Color::Blue),
            ),
            Span::raw(format!(" {}", ctx.currency.format_thousands(month.amount))),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Project Budget Analysis"));
    for project in PROJECT_BUDGETS.iter() {
        let style = Style::default().fg(tone_color(usage_tone(project.percentage)));
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<22}", project.project)),
            Span::styled(meter_text(u64::from(project.percentage), 100, 16), style),
            Span::styled(format!(" {:>3}%", project.percentage), style),
            Span::styled(
                format!(
                    "  {} / {}",
                    ctx.currency.format_large(project.spent),
                    ctx.currency.format_large(project.budget)
                ),
                label,
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Top Performing Workers"));
    for (rank, worker) in TOP_WORKERS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  #{} ", rank + 1), label),
            Span::raw(format!("{:<14}", worker.name)),
            Span::styled(format!("{:>2} days  ", worker.days_worked), label),
            Span::raw(format!("{:>9}", ctx.money(worker.total_earnings))),
            Span::styled(
                format!("  {}/day", ctx.money(worker.average_per_day())),
                label,
            ),
            Span::styled(
                format!("  ★ {:.1}", worker.rating),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Work Distribution"));
    lines.extend(share_lines(&WORK_DISTRIBUTION));

    lines.push(Line::from(""));
    lines.push(heading("Payment Methods"));
    lines.extend(share_lines(&PAYMENT_METHODS));

    lines.push(Line::from(""));
    lines.push(heading("Attendance Rate"));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}%", ATTENDANCE.average),
            Style::default()
                .fg(tone_color(Tone::Green))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  average monthly attendance", label),
    ]));
    lines.push(Line::from(format!("  This Week  {}%", ATTENDANCE.this_week)));
    lines.push(Line::from(format!("  Last Week  {}%", ATTENDANCE.last_week)));
    lines
}

fn share_lines(shares: &[Share]) -> Vec<Line<'static>> {
    shares
        .iter()
        .map(|share| {
            Line::from(vec![
                Span::raw(format!("  {:<14}", share.label)),
                Span::styled(
                    meter_text(u64::from(share.percent), 100, 12),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(" {:>3}%", share.percent)),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Roster;
    use crossterm::event::KeyModifiers;

    #[test]
    fn period_cycles_and_wraps() {
        let mut ctx = Context::new(Roster::default());
        let mut view = Reports::new();
        assert_eq!(view.period(), ReportPeriod::Month);
        for expected in [ReportPeriod::Quarter, ReportPeriod::Year, ReportPeriod::Week] {
            view.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE), &mut ctx);
            assert_eq!(view.period(), expected);
        }
    }

    #[test]
    fn average_per_day_rounds() {
        let averages: Vec<u64> = TOP_WORKERS.iter().map(|w| w.average_per_day()).collect();
        assert_eq!(averages, vec![500, 450, 550, 400]);

        let odd = WorkerPerformance {
            name: "Test",
            days_worked: 3,
            total_earnings: 1_000,
            rating: 4.0,
        };
        assert_eq!(odd.average_per_day(), 333);

        let idle = WorkerPerformance {
            days_worked: 0,
            ..odd
        };
        assert_eq!(idle.average_per_day(), 0);
    }

    #[test]
    fn budget_usage_tones() {
        let tones: Vec<Tone> = PROJECT_BUDGETS
            .iter()
            .map(|p| usage_tone(p.percentage))
            .collect();
        assert_eq!(tones, vec![Tone::Orange, Tone::Red, Tone::Green, Tone::Green]);
    }

    #[test]
    fn snapshot_serializes_every_section() {
        let view = Reports::new();
        let value = serde_json::to_value(view.snapshot()).unwrap();
        assert_eq!(value["period"], "This Month");
        assert_eq!(value["monthly_expenses"].as_array().unwrap().len(), 6);
        assert_eq!(value["top_workers"][2]["name"], "Suresh Yadav");
        assert_eq!(value["top_workers"][2]["average_per_day"], 550);
        assert_eq!(value["attendance"]["average"], 87);
    }
}
