use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, Focus, InputMode, Section};
use crate::core::{Module, NotifyLevel};
use crate::domain::Tone;
use crate::modules::forms::FormDialog;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_sidebar(f, areas.sidebar, app);
    draw_body(f, areas.body, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if let Some(dialog) = app.dialog.as_ref() {
        draw_dialog(f, areas.size, dialog);
    }
    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
    if app.settings_open {
        draw_settings_popup(f, areas.size, app);
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::LightGreen,
        Tone::Blue => Color::LightBlue,
        Tone::Red => Color::LightRed,
        Tone::Orange => Color::Indexed(208),
        Tone::Yellow => Color::LightYellow,
        Tone::Purple => Color::LightMagenta,
        Tone::Neutral => Color::Gray,
    }
}

/// Style for the highlighted row of a record table
pub fn highlight_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "LabourDesk",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.active_section.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Focus", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.focus_label())),
    ]);

    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let profile = &app.config.profile;
    let right_line = Line::from(vec![
        Span::styled("Welcome, ", Style::default().fg(Color::DarkGray)),
        Span::raw(profile.name.clone()),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let is_active = *section == app.active_section;
            let spans = vec![
                Span::styled(
                    format!("{} ", section.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(section.title()),
            ];
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Sections")
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(
        Section::ALL
            .iter()
            .position(|section| *section == app.active_section),
    );
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
    let module: &dyn Module = app.module(app.active_section);
    module.render(f, area, &app.ctx);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.mode_label()),
            Style::default().fg(Color::Black).bg(Color::LightCyan),
        ),
        Span::raw("  "),
        Span::styled("Section ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_section.title())),
    ];
    if let Some(listing) = app.active_listing() {
        spans.push(Span::styled("Rows ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("{}  ", app.visible_len())));
        if !listing.query.is_empty() {
            spans.push(Span::styled("Search ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(format!("{}  ", listing.query)));
        }
        if !listing.status.is_all() {
            spans.push(Span::styled("Status ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(listing.status.key().to_string()));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Description of the first command starting with `input`
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to dashboard"),
        ("labour", "Go to labour management"),
        ("work", "Go to work management"),
        ("payments", "Go to payments"),
        ("reports", "Go to reports"),
        ("help", "Go to help & support"),
        ("add", "Open the add dialog"),
        ("export", "Export the current view"),
        ("status", "Filter by status (status <value>)"),
        ("search", "Search the current list (search <text>)"),
        ("clear", "Clear search and filter"),
        ("settings", "Open settings"),
        ("quit", "Quit"),
    ];

    let word = input.split_whitespace().next().unwrap_or("");
    commands
        .into_iter()
        .find(|(cmd, _)| cmd.starts_with(word))
        .map(|(_, desc)| desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("section name | add | export | status | search | clear");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Search => {
            let query = app
                .active_listing()
                .map(|listing| listing.query.clone())
                .unwrap_or_default();
            Line::from(vec![
                Span::styled("/ ", Style::default().fg(Color::Yellow)),
                Span::raw(query),
                Span::styled(
                    "  (Enter=keep Esc=clear)",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal | InputMode::Dialog => match app.status_text() {
            Some(status) => {
                let color = match status.level {
                    NotifyLevel::Info => Color::LightGreen,
                    NotifyLevel::Warn => Color::LightYellow,
                    NotifyLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", status.title),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(status.text.clone(), Style::default().fg(color)),
                ])
            }
            None => action_hints(app),
        },
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let keys: &[(&str, &str)] = match app.active_section {
        Section::Dashboard => &[("w/n/r", "add"), ("t", "track"), ("1-6", "section")],
        Section::Labour | Section::Work => &[
            ("/", "search"),
            ("f", "filter"),
            ("a", "add"),
            ("d", "delete"),
            ("y", "copy"),
            ("e", "export"),
        ],
        Section::Payments => &[
            ("/", "search"),
            ("f", "filter"),
            ("a", "add"),
            ("m", "mark paid"),
            ("y", "copy"),
            ("e", "export"),
        ],
        Section::Reports => &[("p", "period"), ("j/k", "scroll"), ("e", "export")],
        Section::Help => &[("j/k", "scroll"), ("y", "copy email")],
    };

    let mut spans = Vec::new();
    for (key, label) in keys.iter().chain([(":", "command"), ("?", "help"), ("q", "quit")].iter()) {
        spans.push(Span::styled(
            format!("{key} "),
            Style::default().fg(Color::LightCyan),
        ));
        spans.push(Span::styled(
            format!("{label}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_dialog(f: &mut Frame, area: Rect, dialog: &FormDialog) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let label_style = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();
    for (idx, field) in dialog.fields.iter().enumerate() {
        let focused = idx == dialog.focused;
        let marker = if focused { "> " } else { "  " };
        let value = match field.display_value() {
            Some(value) => Span::raw(value.to_string()),
            None => Span::styled(field.placeholder(), label_style),
        };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::LightCyan)),
            Span::styled(
                format!("{:<18}", field.label),
                if focused {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    label_style
                },
            ),
            value,
        ];
        if field.is_select() {
            spans.push(Span::styled("  ◂ ▸", label_style));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::LightGreen)),
        Span::raw(dialog.kind.submit_label()),
        Span::raw("  "),
        Span::styled("[Esc] ", Style::default().fg(Color::LightRed)),
        Span::raw("Cancel"),
    ]));
    lines.push(Line::from(Span::styled(
        "Tab/↑↓ move · ←/→ or Space choose",
        label_style,
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(dialog.kind.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightCyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-6        Jump to section"),
        Line::from("  [ / ]      Prev/Next section"),
        Line::from("  Tab / h / l Cycle focus"),
        Line::from("  j / k      Move selection / scroll"),
        Line::from("  gg / G     Top / bottom"),
        Line::from("  Mouse      Click section, scroll list"),
        Line::from(""),
        Line::from("Lists"),
        Line::from("  /          Search"),
        Line::from("  f          Cycle status filter"),
        Line::from("  Esc        Clear search and filter"),
        Line::from("  a          Add record"),
        Line::from("  d / Del    Remove record"),
        Line::from("  m          Mark payment paid"),
        Line::from("  y          Copy to clipboard"),
        Line::from("  e          Export"),
        Line::from(""),
        Line::from("App"),
        Line::from("  :          Command bar"),
        Line::from("  s          Settings"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from(format!("Active section: {}", app.active_section.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Keys").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn draw_settings_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(70, 76, area);
    f.render_widget(Clear, popup_area);

    let heading = Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);
    let config = &app.config;
    let path_text = |path: Option<&std::path::PathBuf>| {
        path.map(|path| path.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    };

    let mut lines = vec![
        Line::from(Span::styled("Profile", heading)),
        Line::from(vec![Span::styled("Name      ", label), Span::raw(config.profile.name.clone())]),
        Line::from(vec![Span::styled("Company   ", label), Span::raw(config.profile.company.clone())]),
        Line::from(vec![Span::styled("Email     ", label), Span::raw(config.profile.email.clone())]),
        Line::from(vec![Span::styled("Phone     ", label), Span::raw(config.profile.phone.clone())]),
        Line::from(""),
        Line::from(Span::styled("Notifications", heading)),
    ];
    for (name, enabled) in config.notifications.entries() {
        let (mark, color) = if enabled {
            ("[x]", Color::LightGreen)
        } else {
            ("[ ]", Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{mark} "), Style::default().fg(color)),
            Span::raw(name),
        ]));
    }

    let prefs = &config.preferences;
    lines.extend([
        Line::from(""),
        Line::from(Span::styled("Preferences", heading)),
        Line::from(vec![Span::styled("Currency  ", label), Span::raw(prefs.currency.label())]),
        Line::from(vec![Span::styled("Dates     ", label), Span::raw(prefs.date_format.label())]),
        Line::from(vec![Span::styled("Timezone  ", label), Span::raw(prefs.timezone.to_uppercase())]),
        Line::from(vec![Span::styled("Language  ", label), Span::raw(prefs.language.clone())]),
        Line::from(vec![
            Span::styled("Session   ", label),
            Span::raw(format!("{} minutes", prefs.session_timeout)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Files", heading)),
        Line::from(vec![Span::styled("Config    ", label), Span::raw(path_text(app.config_path.as_ref()))]),
        Line::from(vec![Span::styled("Log       ", label), Span::raw(path_text(app.log_path.as_ref()))]),
        Line::from(vec![
            Span::styled("Exports   ", label),
            Span::raw(app.export_dir.display().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Enter save · Esc close", label)),
    ]);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Settings").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_hint_matches_prefix() {
        assert_eq!(command_hint("exp"), Some("Export the current view"));
        assert_eq!(command_hint("status paid"), Some("Filter by status (status <value>)"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }
}
