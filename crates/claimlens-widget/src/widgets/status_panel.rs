//! Status panel widget
//!
//! Shows the status line, with a spinner while an analyze cycle is in
//! flight.

use crate::state::WidgetState;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct StatusPanelWidget;

impl StatusPanelWidget {
    /// Render the status panel
    pub fn render(state: &WidgetState, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .title(" STATUS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let (line, style) = if state.is_analyzing {
            (
                format!("{} {}", Self::spinner_frame(state.tick), state.status),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (state.status.clone(), Style::default().fg(Color::White))
        };
        buf.set_string(inner.x + 1, inner.y, line, style);
    }

    /// Spinner frame for a tick counter
    fn spinner_frame(tick: usize) -> &'static str {
        SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(StatusPanelWidget::spinner_frame(0), "|");
        assert_eq!(StatusPanelWidget::spinner_frame(1), "/");
        assert_eq!(StatusPanelWidget::spinner_frame(4), "|");
    }

    #[test]
    fn test_render_idle_status() {
        let state = WidgetState::new("https://example.com");
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 3));
        StatusPanelWidget::render(&state, Rect::new(0, 0, 50, 3), &mut buf);
        assert!(row_text(&buf, 1).contains("Ready to analyze: https://example.com"));
    }

    #[test]
    fn test_render_analyzing_shows_spinner() {
        let mut state = WidgetState::new("https://example.com");
        state.is_analyzing = true;
        state.status = crate::state::status::ANALYZING.to_string();

        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 3));
        StatusPanelWidget::render(&state, Rect::new(0, 0, 50, 3), &mut buf);
        assert!(row_text(&buf, 1).contains("| Analyzing content..."));
    }
}
