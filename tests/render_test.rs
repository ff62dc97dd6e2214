//! Render full frames into a test backend and check what a user would see

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use labourdesk::app::App;
use labourdesk::config::Config;
use labourdesk::input::handle_key;
use labourdesk::ui;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn typ(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(140, 44);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_dashboard_renders_chrome() {
    let app = App::new(Config::default());
    let screen = render(&app);
    assert!(screen.contains("LabourDesk"));
    assert!(screen.contains("Welcome, Admin User"));
    assert!(screen.contains("Labour Management"));
    assert!(screen.contains("Help & Support"));
}

#[test]
fn test_worker_table_lists_seeded_workers() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('2'));
    let screen = render(&app);
    assert!(screen.contains("Workers (4/4)"));
    assert!(screen.contains("Rajesh Kumar"));
    assert!(screen.contains("Ravi Sharma"));
}

#[test]
fn test_search_without_matches_shows_empty_state() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('/'));
    typ(&mut app, "xyz");
    press(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("No workers found matching your criteria."));
    assert!(!screen.contains("Rajesh Kumar"));
}

#[test]
fn test_project_filter_empty_state() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('/'));
    typ(&mut app, "no such site");
    press(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("No projects found matching your criteria."));
}

#[test]
fn test_payment_filter_empty_state() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('/'));
    typ(&mut app, "xyz");
    press(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("No payments found matching your criteria."));
    assert!(!screen.contains("Mohit Gupta"));
}

#[test]
fn test_dialog_popup_shows_title_and_buttons() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('w'));

    let screen = render(&app);
    assert!(screen.contains("Add New Worker"));
    assert!(screen.contains("Enter worker name"));
    assert!(screen.contains("[Esc] Cancel"));
}

#[test]
fn test_toast_appears_on_command_line() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('t'));

    let screen = render(&app);
    assert!(screen.contains("Track Time: Time tracking is coming soon."));
}

#[test]
fn test_every_section_renders() {
    let mut app = App::new(Config::default());
    for key in ['1', '2', '3', '4', '5', '6'] {
        press(&mut app, KeyCode::Char(key));
        let screen = render(&app);
        assert!(screen.contains(app.active_section.title()));
    }
}
