use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub body: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(vertical[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        sidebar: main_chunks[0],
        body: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_sits_right_of_sidebar() {
        let ui = areas(Rect::new(0, 0, 100, 30));
        assert_eq!(ui.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(ui.body.x, SIDEBAR_WIDTH);
        assert_eq!(ui.header.height, 3);
        assert_eq!(ui.command_line.y, 29);
    }
}
