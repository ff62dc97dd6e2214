//! Dashboard module - overview panels and quick actions

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{payment_status_tone, project_health_tone, Tone};
use crate::modules::forms::DialogKind;
use crate::ui::tone_color;
use crate::ui::widgets::meter_text;

pub struct Stat {
    pub title: &'static str,
    pub value: u64,
    pub change: &'static str,
    pub money: bool,
    pub tone: Tone,
}

pub struct RecentProject {
    pub name: &'static str,
    pub progress: u8,
    pub health: &'static str,
    pub workers: u32,
}

pub struct RecentPayment {
    pub worker: &'static str,
    pub amount: u64,
    pub when: &'static str,
    pub status: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat {
        title: "Total Workers",
        value: 248,
        change: "+12%",
        money: false,
        tone: Tone::Blue,
    },
    Stat {
        title: "Active Projects",
        value: 18,
        change: "+3",
        money: false,
        tone: Tone::Green,
    },
    Stat {
        title: "Monthly Payments",
        value: 245_680,
        change: "+8%",
        money: true,
        tone: Tone::Orange,
    },
    Stat {
        title: "Working Today",
        value: 186,
        change: "75%",
        money: false,
        tone: Tone::Purple,
    },
];

pub static RECENT_PROJECTS: [RecentProject; 4] = [
    RecentProject {
        name: "Construction Site A",
        progress: 85,
        health: "On Track",
        workers: 45,
    },
    RecentProject {
        name: "Road Maintenance",
        progress: 60,
        health: "Delayed",
        workers: 22,
    },
    RecentProject {
        name: "Building Renovation",
        progress: 95,
        health: "Almost Done",
        workers: 18,
    },
    RecentProject {
        name: "Garden Development",
        progress: 30,
        health: "Started",
        workers: 12,
    },
];

pub static RECENT_PAYMENTS: [RecentPayment; 4] = [
    RecentPayment {
        worker: "Rajesh Kumar",
        amount: 1_250,
        when: "Today",
        status: "Paid",
    },
    RecentPayment {
        worker: "Amit Singh",
        amount: 1_100,
        when: "Today",
        status: "Paid",
    },
    RecentPayment {
        worker: "Suresh Yadav",
        amount: 1_350,
        when: "Yesterday",
        status: "Paid",
    },
    RecentPayment {
        worker: "Ravi Sharma",
        amount: 1_200,
        when: "Yesterday",
        status: "Pending",
    },
];

/// Quick action key, label
pub const QUICK_ACTIONS: [(char, &str); 4] = [
    ('w', "Add Worker"),
    ('n', "New Project"),
    ('r', "Record Payment"),
    ('t', "Track Time"),
];

#[derive(Debug, Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }
}

impl Module for Dashboard {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('w') => Action::OpenDialog(DialogKind::Worker),
            KeyCode::Char('n') => Action::OpenDialog(DialogKind::Project),
            KeyCode::Char('r') => Action::OpenDialog(DialogKind::Payment),
            KeyCode::Char('t') => Action::info("Track Time", "Time tracking is coming soon."),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.render_stats(frame, rows[0], ctx);
        self.render_projects_panel(frame, panels[0]);
        self.render_payments_panel(frame, panels[1], ctx);
        self.render_quick_actions(frame, rows[2]);
    }
}

impl Dashboard {
    fn render_stats(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (stat, card) in STATS.iter().zip(cards.iter()) {
            let value = if stat.money {
                ctx.money(stat.value)
            } else {
                stat.value.to_string()
            };
            let line = Line::from(vec![
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(stat.change, Style::default().fg(tone_color(stat.tone))),
            ]);
            let paragraph = Paragraph::new(line)
                .block(Block::default().borders(Borders::ALL).title(stat.title));
            frame.render_widget(paragraph, *card);
        }
    }

    fn render_projects_panel(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for project in RECENT_PROJECTS.iter() {
            lines.push(Line::from(vec![
                Span::styled(project.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {} workers", project.workers),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    meter_text(u64::from(project.progress), 100, 16),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(" {:>3}%  ", project.progress)),
                Span::styled(
                    project.health,
                    Style::default().fg(tone_color(project_health_tone(project.health))),
                ),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Recent Projects"));
        frame.render_widget(paragraph, area);
    }

    fn render_payments_panel(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let lines: Vec<Line> = RECENT_PAYMENTS
            .iter()
            .map(|payment| {
                Line::from(vec![
                    Span::raw(format!("{:<14}", payment.worker)),
                    Span::styled(
                        format!("{:<10}", payment.when),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:>8}  ", ctx.money(payment.amount)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        payment.status,
                        Style::default().fg(tone_color(payment_status_tone(payment.status))),
                    ),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Recent Payments"));
        frame.render_widget(paragraph, area);
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, label) in QUICK_ACTIONS {
            spans.push(Span::styled(
                format!("[{key}]"),
                Style::default().fg(Color::LightCyan),
            ));
            spans.push(Span::raw(format!(" {label}   ")));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Quick Actions"));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NotifyLevel;
    use crate::store::Roster;
    use crossterm::event::KeyModifiers;

    fn press(view: &mut Dashboard, c: char) -> Action {
        let mut ctx = Context::new(Roster::seeded());
        view.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), &mut ctx)
    }

    #[test]
    fn quick_actions_open_dialogs() {
        let mut view = Dashboard::new();
        assert_eq!(press(&mut view, 'w'), Action::OpenDialog(DialogKind::Worker));
        assert_eq!(press(&mut view, 'n'), Action::OpenDialog(DialogKind::Project));
        assert_eq!(press(&mut view, 'r'), Action::OpenDialog(DialogKind::Payment));
    }

    #[test]
    fn track_time_only_notifies() {
        let mut view = Dashboard::new();
        match press(&mut view, 't') {
            Action::Notify(notice) => {
                assert_eq!(notice.title, "Track Time");
                assert_eq!(notice.level, NotifyLevel::Info);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn project_health_colours() {
        let tones: Vec<Tone> = RECENT_PROJECTS
            .iter()
            .map(|p| project_health_tone(p.health))
            .collect();
        assert_eq!(tones, vec![Tone::Green, Tone::Red, Tone::Blue, Tone::Orange]);
    }
}
