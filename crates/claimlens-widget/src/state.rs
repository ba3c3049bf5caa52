//! Widget state and render model
//!
//! These types define the contract between the controller and the UI
//! widgets: the two-state overlay, the busy flag, and the card model
//! the renderer consumes.

use claimlens_core::Claim;

/// Status line texts used across the analyze cycle
pub mod status {
    pub const ANALYZING: &str = "Analyzing content...";
    pub const COMPLETE: &str = "Analysis complete";
    pub const FAILED: &str = "Analysis failed";
}

/// Visual presentation state of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Small badge, out of the way
    #[default]
    Minimized,
    /// Full panel with status, results, and key hints
    Expanded,
}

/// What a rendered card represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Nothing misleading was found on the page
    AllClear,
    /// The analyze cycle failed
    Error,
    /// One flagged claim
    Claim,
}

/// One card in the results area
#[derive(Debug, Clone)]
pub struct ClaimCard {
    pub kind: CardKind,
    pub title: String,
    pub description: Option<String>,
    /// "Confidence: 75% | Bias: 30%" for claim cards
    pub score_line: Option<String>,
    /// Presentation label only; no other effect
    pub high_confidence: bool,
    /// Sanitized source chips
    pub sources: Vec<String>,
}

impl ClaimCard {
    /// The success card shown when no claims come back
    pub fn all_clear() -> Self {
        Self {
            kind: CardKind::AllClear,
            title: "No misleading claims detected".to_string(),
            description: Some("This page appears to contain reliable information.".to_string()),
            score_line: None,
            high_confidence: false,
            sources: Vec::new(),
        }
    }

    /// The generic error card; the specific failure is only logged
    pub fn error() -> Self {
        Self {
            kind: CardKind::Error,
            title: "Analysis failed".to_string(),
            description: Some("Analysis failed. Please try again.".to_string()),
            score_line: None,
            high_confidence: false,
            sources: Vec::new(),
        }
    }

    /// A card for one claim, with all remote text sanitized
    pub fn claim(index: usize, claim: &Claim) -> Self {
        Self {
            kind: CardKind::Claim,
            title: format!("Claim {}: {}", index + 1, sanitize_text(&claim.text)),
            description: None,
            score_line: Some(format!(
                "Confidence: {} | Bias: {}",
                claim.confidence_percent(),
                claim.bias_percent()
            )),
            high_confidence: claim.is_high_confidence(),
            sources: claim.sources.iter().map(|s| sanitize_text(s)).collect(),
        }
    }
}

/// Strip control characters from remote-originated text before it
/// reaches the terminal. Claim and source strings derive from page
/// content the analyzed site controls.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Mutable widget state driven by the controller
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Minimized or expanded presentation
    pub visual: VisualState,
    /// True while an analyze cycle is in flight
    pub is_analyzing: bool,
    /// Status line under the header
    pub status: String,
    /// Cards in the results area
    pub cards: Vec<ClaimCard>,
    /// Signal to exit the application
    pub should_quit: bool,
    /// Tick counter driving the loading spinner
    pub tick: usize,
}

impl WidgetState {
    pub fn new(page_url: &str) -> Self {
        Self {
            visual: VisualState::Minimized,
            is_analyzing: false,
            status: format!("Ready to analyze: {}", page_url),
            cards: Vec::new(),
            should_quit: false,
            tick: 0,
        }
    }
}
