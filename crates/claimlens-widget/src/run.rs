//! Main run loop for the overlay widget
//!
//! Handles terminal initialization, the event loop, and cleanup.

use crate::{
    bridge::{SignalReceiver, WidgetSignal},
    controller::WidgetController,
    event::{self, AppEvent},
    state::VisualState,
    terminal, ui,
};
use claimlens_core::Result;
use std::time::Duration;

/// Run the overlay until the user quits.
///
/// External toggle signals are drained each iteration, and in-flight
/// analysis is observed via poll ticks so the overlay stays live
/// while a request is out. There is no cancellation: a hung remote
/// keeps the busy flag set indefinitely.
pub async fn run(mut controller: WidgetController, mut signals: SignalReceiver) -> Result<()> {
    // Initialize terminal
    let mut terminal = terminal::init()?;

    // Create terminal guard for cleanup on panic
    let _guard = terminal::TerminalGuard::new();

    // Main event loop
    loop {
        // Draw current state
        terminal.draw(|frame| ui::draw(frame, &controller))?;

        // Toggle signals from the host dispatch
        while let Ok(signal) = signals.try_recv() {
            match signal {
                WidgetSignal::Toggle => controller.toggle(),
            }
        }

        // Render the outcome of an in-flight analyze cycle
        controller.poll_analysis();

        // Poll for events with a short timeout
        let timeout = Duration::from_millis(100);
        match event::poll_event(timeout)? {
            Some(AppEvent::Key(key)) => {
                if event::is_quit_event(key) {
                    break;
                } else if event::is_analyze_event(key) {
                    // The analyze control only exists on the expanded panel
                    if controller.state.visual == VisualState::Expanded {
                        controller.analyze_current_page();
                    }
                } else if event::is_close_event(key) {
                    controller.minimize();
                } else if event::is_toggle_event(key) {
                    controller.toggle();
                }
            }
            Some(AppEvent::Resize(_, _)) => {
                // Terminal was resized, will redraw on next iteration
            }
            Some(AppEvent::Tick) | None => {
                controller.on_tick();
            }
        }

        // Check application quit flag
        if controller.state.should_quit {
            break;
        }
    }

    // Restore terminal state
    terminal::restore()?;

    Ok(())
}
