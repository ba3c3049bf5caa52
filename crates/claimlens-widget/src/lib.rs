//! # claimlens-widget
//!
//! Terminal overlay widget for ClaimLens.
//!
//! A two-state overlay (a minimized badge and an expanded panel)
//! that drives the analyze-and-render cycle against a gateway relay
//! over an in-process message channel.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  CLAIMLENS  Is this real?            [esc]   │
//! ├──────────────────────────────────────────────┤
//! │  Ready to analyze: example.com/story         │
//! ├──────────────────────────────────────────────┤
//! │  ┌ Claim 1: ... ───────────────────────────┐ │
//! │  │ Confidence: 75% | Bias: 30%             │ │
//! │  │ Sources: [Source 1] [Source 2]          │ │
//! │  └─────────────────────────────────────────┘ │
//! ├──────────────────────────────────────────────┤
//! │  [a]nalyze [t]oggle [q]uit                   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The controller owns the state machine; the bridge carries analyze
//! requests to the relay task that owns the gateway; the run loop
//! polls terminal events and drains external toggle signals.

// Shared state and render model
mod state;

pub use state::{sanitize_text, CardKind, ClaimCard, VisualState, WidgetState};

// Message channel to the gateway relay
mod bridge;

pub use bridge::{
    signal_channel, spawn_relay, GatewayHandle, GatewayReply, GatewayRequest, SignalReceiver,
    SignalSender, WidgetSignal,
};

// Controller and UI
mod controller;
mod event;
mod run;
mod terminal;
mod ui;
mod widgets;

pub use controller::WidgetController;
pub use run::run;
pub use widgets::{ClaimListWidget, StatusPanelWidget};
