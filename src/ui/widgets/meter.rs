//! Horizontal progress meter drawn with eighth-block characters

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const EIGHTHS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
const TRACK: char = '░';

/// Single-line meter filling `value / max` of its width
pub struct Meter {
    value: u64,
    max: u64,
    style: Style,
}

impl Meter {
    pub fn new(value: u64, max: u64) -> Self {
        Self {
            value,
            max,
            style: Style::default().fg(Color::Cyan),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Meter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = meter_text(self.value, self.max, area.width as usize);
        for (i, ch) in text.chars().enumerate() {
            let x = area.x + i as u16;
            if x >= area.x + area.width {
                break;
            }
            buf.get_mut(x, area.y).set_char(ch).set_style(self.style);
        }
    }
}

/// Meter as text, `width` cells wide. Values above `max` render full.
pub fn meter_text(value: u64, max: u64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let max = max.max(1);
    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let eighths = (ratio * width as f64 * 8.0).round() as usize;
    let full = eighths / 8;
    let partial = eighths % 8;

    let mut text: String = std::iter::repeat('█').take(full).collect();
    if partial > 0 && full < width {
        text.push(EIGHTHS[partial - 1]);
    }
    let used = text.chars().count();
    text.extend(std::iter::repeat(TRACK).take(width - used));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_text_width_is_fixed() {
        for value in [0, 13, 50, 99, 100, 250] {
            assert_eq!(meter_text(value, 100, 10).chars().count(), 10);
        }
    }

    #[test]
    fn meter_text_fills_proportionally() {
        assert_eq!(meter_text(0, 100, 4), "░░░░");
        assert_eq!(meter_text(50, 100, 4), "██░░");
        assert_eq!(meter_text(100, 100, 4), "████");
        assert_eq!(meter_text(500, 100, 4), "████");
        assert_eq!(meter_text(1, 8, 1), "▏");
    }

    #[test]
    fn meter_text_zero_width() {
        assert!(meter_text(10, 100, 0).is_empty());
    }

    #[test]
    fn meter_widget_renders_into_buffer() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        Meter::new(50, 100).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).symbol(), "█");
        assert_eq!(buf.get(3, 0).symbol(), "░");
    }
}
