//! Data model for the fact-check workflow
//!
//! These types define the contract between the Agent Gateway and the
//! widget: what a claim is, how the remote content payload is
//! normalized, and how scores are presented.

use crate::{ClaimLensError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Confidence above which a claim is presented as high-confidence.
/// The comparison is strict: exactly 0.7 classifies as low-confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// A single page-analysis request
///
/// Created per user action, consumed immediately, discarded after the
/// response renders. The url must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The page currently being analyzed
    pub target_url: String,
}

impl AnalyzeRequest {
    pub fn new(target_url: impl Into<String>) -> Result<Self> {
        let target_url = target_url.into();
        if target_url.trim().is_empty() {
            return Err(ClaimLensError::InvalidRequest(
                "target url must not be empty".to_string(),
            ));
        }
        Ok(Self { target_url })
    }
}

/// One assertion flagged by the remote agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// The flagged statement
    pub text: String,
    /// Agent confidence in [0, 1]
    pub confidence: f64,
    /// Bias score in [0, 1]
    pub bias_score: f64,
    /// Supporting sources, in the order the agent returned them
    pub sources: Vec<String>,
}

impl Claim {
    /// Parse one claim out of a remote content entry.
    ///
    /// The agent is not trusted to produce well-formed claims: the text
    /// may be missing (the backend names it `claim_text`), scores may
    /// arrive as JSON numbers or numeric strings, and either score may
    /// fall outside [0, 1]. Anything malformed is rejected here so it
    /// never reaches the renderer.
    pub fn from_value(value: &Value) -> Option<Self> {
        let text = value
            .get("text")
            .or_else(|| value.get("claim_text"))
            .and_then(Value::as_str)?
            .trim()
            .to_string();
        if text.is_empty() {
            return None;
        }

        let confidence = score_from_value(value.get("confidence")?)?;
        let bias_score = score_from_value(value.get("bias_score")?)?;

        let sources = value
            .get("sources")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            text,
            confidence,
            bias_score,
            sources,
        })
    }

    /// Presentation label: strictly above the threshold counts as high
    pub fn is_high_confidence(&self) -> bool {
        self.confidence > HIGH_CONFIDENCE_THRESHOLD
    }

    /// Confidence as a rounded percentage string, e.g. "75%"
    pub fn confidence_percent(&self) -> String {
        format_percent(self.confidence)
    }

    /// Bias score as a rounded percentage string, e.g. "30%"
    pub fn bias_percent(&self) -> String {
        format_percent(self.bias_score)
    }
}

/// Accept a score as a JSON number or a numeric string, bounded to [0, 1]
fn score_from_value(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (0.0..=1.0).contains(&score).then_some(score)
}

/// Format a [0, 1] score as a rounded integer percentage
pub fn format_percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// Result of one analyze cycle
///
/// Empty claims is a meaningful state ("no misleading claims
/// detected"), not an error. The result lives for one render cycle;
/// nothing is cached across requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Claims in the order the agent returned them
    pub claims: Vec<Claim>,
    /// Entries dropped by boundary validation
    #[serde(default)]
    pub discarded: usize,
}

impl AnalysisResult {
    /// Normalize a remote `content` payload into a validated result.
    ///
    /// A payload without a `claims` array normalizes to the empty
    /// result. Malformed entries are dropped and counted, one warning
    /// per entry.
    pub fn from_content(content: &Value) -> Self {
        let Some(entries) = content.get("claims").and_then(Value::as_array) else {
            return Self::default();
        };

        let mut claims = Vec::with_capacity(entries.len());
        let mut discarded = 0;
        for entry in entries {
            match Claim::from_value(entry) {
                Some(claim) => claims.push(claim),
                None => {
                    discarded += 1;
                    tracing::warn!("Dropping malformed claim entry: {}", entry);
                }
            }
        }

        Self { claims, discarded }
    }

    /// True when the agent flagged nothing on the page
    pub fn is_all_clear(&self) -> bool {
        self.claims.is_empty()
    }
}
