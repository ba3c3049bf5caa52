//! Event handling for crossterm terminal events
//!
//! Polls for keyboard, resize, and tick events.

use claimlens_core::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Key press event
    Key(KeyEvent),
    /// Timer tick for spinner and redraw
    Tick,
    /// Terminal resize event
    Resize(u16, u16),
}

/// Poll for the next event with timeout
pub fn poll_event(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => Ok(Some(AppEvent::Key(key))),
            Event::Resize(width, height) => Ok(Some(AppEvent::Resize(width, height))),
            _ => Ok(Some(AppEvent::Tick)),
        }
    } else {
        Ok(Some(AppEvent::Tick))
    }
}

/// Check if a key event is a quit command (q or Ctrl+C)
pub fn is_quit_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if a key event toggles the overlay (t, like the icon click)
pub fn is_toggle_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('t') | KeyCode::Char('T'))
}

/// Check if a key event is the close control (Esc)
pub fn is_close_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Check if a key event triggers analysis (a or Enter)
pub fn is_analyze_event(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Enter
    )
}
