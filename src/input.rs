//! Key and mouse routing
//!
//! Popups take input first, then the current input mode. Anything normal
//! mode does not claim globally goes to the active section view.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus, InputMode, Section};
use crate::ui::layout::{self, UiAreas};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    if app.settings_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => app.settings_open = false,
            KeyCode::Enter => {
                app.settings_open = false;
                app.save_settings();
            }
            _ => {}
        }
        return;
    }

    match app.input_mode {
        InputMode::Dialog => app.handle_dialog_key(key),
        InputMode::Search => handle_search_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Normal => handle_normal_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.code != KeyCode::Char('g') {
        app.pending_chord = None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char('s'), _) => app.settings_open = true,
        (KeyCode::Char(':'), _) => app.enter_command(),
        (KeyCode::Char('/'), _) => app.enter_search(),
        (KeyCode::Char('['), _) => app.cycle_section(false),
        (KeyCode::Char(']'), _) => app.cycle_section(true),
        (KeyCode::Char(c @ '1'..='6'), _) => {
            if let Some(section) = Section::from_shortcut(c) {
                app.set_section(section);
            }
        }
        (KeyCode::Tab, _) => app.cycle_focus(true),
        (KeyCode::BackTab, _) => app.cycle_focus(false),
        (KeyCode::Char('h') | KeyCode::Left, _) => app.focus_left(),
        (KeyCode::Char('l') | KeyCode::Right, _) => app.focus_right(),
        (KeyCode::Char('g'), _) => {
            if app.chord('g') {
                app.jump(true);
            }
        }
        (KeyCode::Char('G'), _) => app.jump(false),
        (KeyCode::Char('j') | KeyCode::Down, _) if app.focus == Focus::Sidebar => {
            app.cycle_section(true)
        }
        (KeyCode::Char('k') | KeyCode::Up, _) if app.focus == Focus::Sidebar => {
            app.cycle_section(false)
        }
        (KeyCode::Enter, _) if app.focus == Focus::Sidebar => app.focus = Focus::List,
        _ => app.handle_module_key(key),
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_search(false),
        KeyCode::Enter => app.exit_search(true),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(ch) => app.search_push(ch),
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => app.command.input.push(ch),
        _ => {}
    }
}

/// Mouse input against a frame of `size`.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.settings_open || app.input_mode != InputMode::Normal {
        return;
    }
    let areas = layout::areas(size);
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, areas, col, row, true),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, col, row, false),
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: UiAreas, col: u16, row: u16) {
    if rect_contains(areas.sidebar, col, row) {
        let inner = rect_inner(areas.sidebar);
        if !rect_contains(inner, col, row) {
            return;
        }
        let idx = usize::from(row - inner.y);
        if let Some(section) = Section::ALL.get(idx).copied() {
            app.set_section(section);
            app.focus = Focus::Sidebar;
        }
        return;
    }
    if rect_contains(areas.body, col, row) {
        app.focus = Focus::List;
    }
}

fn handle_scroll(app: &mut App, areas: UiAreas, col: u16, row: u16, up: bool) {
    if rect_contains(areas.sidebar, col, row) {
        app.focus = Focus::Sidebar;
        app.cycle_section(!up);
        return;
    }
    let code = if up { KeyCode::Up } else { KeyCode::Down };
    app.handle_module_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(app, mouse, Rect::new(0, 0, 120, 40));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(Config::default());
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit);
    }

    #[test]
    fn sidebar_focus_turns_j_into_section_moves() {
        let mut app = App::new(Config::default());
        app.focus = Focus::Sidebar;
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.active_section, Section::Labour);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.active_section, Section::Dashboard);
    }

    #[test]
    fn clicking_a_sidebar_row_selects_that_section() {
        let mut app = App::new(Config::default());
        // header is 3 rows, sidebar border row 3, entries start at row 4
        click(&mut app, 4, 7);
        assert_eq!(app.active_section, Section::Payments);
        assert_eq!(app.focus, Focus::Sidebar);

        click(&mut app, 4, 3);
        assert_eq!(app.active_section, Section::Payments);
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_open);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.help_open);
    }

    #[test]
    fn gg_needs_two_presses() {
        let mut app = App::new(Config::default());
        app.set_section(Section::Labour);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.active_listing().map(|l| l.selected), Some(3));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.active_listing().map(|l| l.selected), Some(3));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.active_listing().map(|l| l.selected), Some(0));
    }
}
