//! Overlay layout and rendering
//!
//! Defines the minimized badge and the expanded panel, and delegates
//! the panel sections to the individual widgets.

use crate::{
    controller::WidgetController,
    state::VisualState,
    widgets::{ClaimListWidget, StatusPanelWidget},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Draw the overlay in its current visual state
pub fn draw(frame: &mut Frame, controller: &WidgetController) {
    let size = frame.area();
    match controller.state.visual {
        VisualState::Minimized => draw_minimized(frame, size),
        VisualState::Expanded => draw_expanded(frame, controller, size),
    }
}

/// The minimized badge, anchored bottom-right
fn draw_minimized(frame: &mut Frame, size: Rect) {
    let badge = Paragraph::new(Line::from(vec![Span::styled(
        "Fact Check",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(Block::default().borders(Borders::ALL).title(" [t] "))
    .alignment(Alignment::Center);
    frame.render_widget(badge, badge_area(size));
}

/// Badge rectangle in the bottom-right corner
fn badge_area(size: Rect) -> Rect {
    let width = size.width.min(16);
    let height = size.height.min(3);
    Rect::new(
        size.width.saturating_sub(width),
        size.height.saturating_sub(height),
        width,
        height,
    )
}

/// The expanded panel: header, status, results, key hints
fn draw_expanded(frame: &mut Frame, controller: &WidgetController, size: Rect) {
    let area = panel_area(size);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (title + close hint)
            Constraint::Length(3), // Status
            Constraint::Min(0),    // Results
            Constraint::Length(3), // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0]);

    frame.render_widget(
        WidgetAdapter::new(|area, buf| StatusPanelWidget::render(&controller.state, area, buf)),
        chunks[1],
    );
    frame.render_widget(
        WidgetAdapter::new(|area, buf| {
            ClaimListWidget::render(&controller.state.cards, area, buf)
        }),
        chunks[2],
    );

    render_footer(frame, chunks[3]);
}

/// Panel anchored to the right edge, overlay-style
fn panel_area(size: Rect) -> Rect {
    let width = size.width.min(52);
    Rect::new(size.width.saturating_sub(width), 0, width, size.height)
}

/// Render the header with title and close hint
fn render_header(frame: &mut Frame, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "CLAIMLENS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Is this real?", Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, header_chunks[0]);

    let close = Paragraph::new(Line::from(vec![
        Span::styled("[esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" close"),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Right);
    frame.render_widget(close, header_chunks[1]);
}

/// Render the key hints footer
fn render_footer(frame: &mut Frame, area: Rect) {
    let keybindings = Paragraph::new(Line::from(vec![
        Span::styled("[a]", Style::default().fg(Color::Yellow)),
        Span::raw("nalyze "),
        Span::styled("[t]", Style::default().fg(Color::Yellow)),
        Span::raw("oggle "),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(keybindings, area);
}

/// Widget adapter to bridge static render methods to ratatui's Widget trait
struct WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    render_fn: F,
}

impl<F> WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    fn new(render_fn: F) -> Self {
        Self { render_fn }
    }
}

impl<F> Widget for WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        (self.render_fn)(area, buf);
    }
}
