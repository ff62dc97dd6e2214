//! Help & support: contacts, tutorials, FAQs, system information

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{Action, Context, Module};

pub struct Contact {
    pub title: &'static str,
    pub blurb: &'static str,
    pub action: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct FaqCategory {
    pub name: &'static str,
    pub questions: &'static [Faq],
}

pub static CONTACTS: [Contact; 3] = [
    Contact {
        title: "Call Support",
        blurb: "Get instant help from our support team",
        action: "+91 9876543210",
    },
    Contact {
        title: "WhatsApp",
        blurb: "Quick assistance via WhatsApp",
        action: "Chat Now",
    },
    Contact {
        title: "Email Support",
        blurb: "Send us your questions via email",
        action: "support@labourmanager.com",
    },
];

pub static TUTORIALS: [&str; 4] = [
    "Managing Workers",
    "Project Setup",
    "Payment Recording",
    "System Settings",
];

pub static FAQS: [FaqCategory; 3] = [
    FaqCategory {
        name: "Workers",
        questions: &[
            Faq {
                question: "How do I add a new worker?",
                answer: "Go to Labour Management → press 'a' → fill the form with worker details like name, phone, skills, and daily wage.",
            },
            Faq {
                question: "How to update worker information?",
                answer: "Find the worker in Labour Management with '/' search, then review the details panel on the right.",
            },
            Faq {
                question: "How to mark a worker as unavailable?",
                answer: "Worker status is shown as Available or Working; press 'f' to filter the roster by status.",
            },
        ],
    },
    FaqCategory {
        name: "Projects",
        questions: &[
            Faq {
                question: "How to create a new project?",
                answer: "Go to Work Management → press 'a' → enter project details, dates, and budget → Enter to save.",
            },
            Faq {
                question: "How to assign workers to a project?",
                answer: "Each project shows its assigned worker count in the details panel.",
            },
            Faq {
                question: "How to track project progress?",
                answer: "Project progress is shown as a bar in the project table and on the Dashboard.",
            },
        ],
    },
    FaqCategory {
        name: "Payments",
        questions: &[
            Faq {
                question: "How to record daily payments?",
                answer: "Go to Payments → press 'a' → select worker → enter amount and date → Enter to save.",
            },
            Faq {
                question: "How to view payment history?",
                answer: "Check the Recent Payments panel on the Dashboard or go to Payments for detailed history.",
            },
            Faq {
                question: "How to generate payment reports?",
                answer: "Go to Reports → press 'p' to choose the period → press 'e' to export the report.",
            },
        ],
    },
];

pub const VERSION: &str = "1.0.0";
pub const LAST_UPDATED: &str = "March 2024";
pub const SUPPORT_HOURS: &str = "Available 24/7";

#[derive(Debug, Default)]
pub struct Help {
    scroll: u16,
}

impl Help {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

impl Module for Help {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = faq_lines().len() as u16;
                self.scroll = (self.scroll + 1).min(max.saturating_sub(1));
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('y') => Action::Copy(CONTACTS[2].action.to_string()),
            _ => Action::None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, _ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(rows[1]);

        render_contacts(f, rows[0]);

        let faqs = Paragraph::new(Text::from(faq_lines()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Frequently Asked Questions  (j/k scroll)"),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(faqs, columns[0]);

        render_sidebar(f, columns[1]);
    }

    fn jump(&mut self, top: bool, _ctx: &Context) {
        self.scroll = if top {
            0
        } else {
            (faq_lines().len() as u16).saturating_sub(1)
        };
    }
}

fn render_contacts(f: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (contact, card) in CONTACTS.iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(contact.blurb, Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from(Span::styled(
                contact.action,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(contact.title))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, *card);
    }
}

fn render_sidebar(f: &mut Frame, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(Span::styled(
        "Video Tutorials",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(TUTORIALS.iter().map(|topic| Line::from(format!("  ▶ {topic}"))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "System Information",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![Span::styled("  Version:       ", label), Span::raw(VERSION)]));
    lines.push(Line::from(vec![
        Span::styled("  Last Updated:  ", label),
        Span::raw(LAST_UPDATED),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Support Team:  ", label),
        Span::raw(SUPPORT_HOURS),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Resources"))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn faq_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in FAQS.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                category.name,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} FAQs", category.questions.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for faq in category.questions {
            lines.push(Line::from(Span::styled(
                format!("  {}", faq.question),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("    {}", faq.answer),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}
