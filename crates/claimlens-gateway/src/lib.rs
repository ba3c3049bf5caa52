//! # claimlens-gateway
//!
//! HTTP gateway to the remote fact-check agent.
//!
//! The remote agent is a stateful conversational service speaking a
//! two-step protocol:
//!
//! 1. `POST /apps/{app}/users/{user}/sessions/{id}` creates a
//!    conversation session; HTTP 400 means it already exists
//! 2. `POST /run` submits the page url as a user message and returns
//!    a list of events; the last event's `content` carries the result
//!
//! [`AgentGateway`] drives that protocol and normalizes the final
//! content into a validated `AnalysisResult`. [`SimulatedAnalyzer`]
//! is the offline stand-in behind the same [`PageAnalyzer`] seam.
//!
//! [`PageAnalyzer`]: claimlens_core::PageAnalyzer

mod client;
mod config;
mod simulate;
mod types;

pub use client::AgentGateway;
pub use config::GatewayConfig;
pub use simulate::SimulatedAnalyzer;
pub use types::{AgentEvent, MessagePart, NewMessage, RunRequest};
