//! Simulated analyzer for offline and demo use

use async_trait::async_trait;
use claimlens_core::{AnalysisResult, Claim, PageAnalyzer, Result};
use std::time::Duration;

/// Canned analysis results behind a configurable delay.
///
/// Stands in for the remote agent when no backend is running
/// (`--simulate` in the CLI) and in widget tests.
#[derive(Debug, Clone)]
pub struct SimulatedAnalyzer {
    delay: Duration,
}

impl SimulatedAnalyzer {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn canned_result() -> AnalysisResult {
        AnalysisResult {
            claims: vec![
                Claim {
                    text: "Example claim detected on this page".to_string(),
                    confidence: 0.75,
                    bias_score: 0.3,
                    sources: vec![
                        "Source 1".to_string(),
                        "Source 2".to_string(),
                        "Source 3".to_string(),
                    ],
                },
                Claim {
                    text: "Another potentially misleading statement".to_string(),
                    confidence: 0.62,
                    bias_score: 0.5,
                    sources: vec!["Source A".to_string(), "Source B".to_string()],
                },
            ],
            discarded: 0,
        }
    }
}

impl Default for SimulatedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageAnalyzer for SimulatedAnalyzer {
    async fn analyze(&mut self, url: &str) -> Result<AnalysisResult> {
        tracing::info!("Simulating analysis of {}", url);
        tokio::time::sleep(self.delay).await;
        Ok(Self::canned_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_claims() {
        let mut analyzer = SimulatedAnalyzer::new().with_delay(Duration::ZERO);
        let result = analyzer.analyze("https://example.com").await.unwrap();

        assert_eq!(result.claims.len(), 2);
        assert!(result.claims[0].is_high_confidence());
        assert!(!result.claims[1].is_high_confidence());
    }
}
