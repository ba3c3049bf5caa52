//! In-process message channel between the widget and the gateway
//!
//! Mirrors the host messaging shape: an analyze request answered with
//! `{ success, data?, error? }`, and a toggle signal delivered into
//! the widget loop from outside (the host's icon-click dispatch).

use claimlens_core::{AnalysisResult, ClaimLensError, PageAnalyzer, Result};
use tokio::sync::{mpsc, oneshot};

/// Request sent from the widget surface to the gateway relay
#[derive(Debug)]
pub enum GatewayRequest {
    AnalyzePage {
        url: String,
        reply: oneshot::Sender<GatewayReply>,
    },
}

/// Reply to an analyze request
#[derive(Debug, Clone)]
pub struct GatewayReply {
    pub success: bool,
    pub data: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl GatewayReply {
    pub fn ok(data: AnalysisResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Signal delivered into the widget loop by the host dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSignal {
    /// Flip between minimized and expanded
    Toggle,
}

/// Sending half of the widget signal channel
pub type SignalSender = mpsc::UnboundedSender<WidgetSignal>;
/// Receiving half of the widget signal channel
pub type SignalReceiver = mpsc::UnboundedReceiver<WidgetSignal>;

/// Create the signal channel used for external toggle delivery
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    mpsc::unbounded_channel()
}

/// Handle the widget holds to reach the gateway relay
#[derive(Debug, Clone)]
pub struct GatewayHandle {
    tx: mpsc::Sender<GatewayRequest>,
}

impl GatewayHandle {
    /// Dispatch one analyze request and wait for its reply
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(GatewayRequest::AnalyzePage {
                url: url.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| ClaimLensError::Bridge("gateway relay is gone".to_string()))?;

        let reply = reply_rx
            .await
            .map_err(|_| ClaimLensError::Bridge("gateway relay dropped the reply".to_string()))?;

        if reply.success {
            reply
                .data
                .ok_or_else(|| ClaimLensError::Bridge("success reply carried no data".to_string()))
        } else {
            Err(ClaimLensError::Analysis(
                reply.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Spawn the relay task that owns the analyzer and serves requests
/// one at a time, in arrival order.
pub fn spawn_relay(mut analyzer: Box<dyn PageAnalyzer>) -> GatewayHandle {
    let (tx, mut rx) = mpsc::channel::<GatewayRequest>(8);

    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            match request {
                GatewayRequest::AnalyzePage { url, reply } => {
                    let outcome = match analyzer.analyze(&url).await {
                        Ok(data) => GatewayReply::ok(data),
                        Err(e) => {
                            tracing::error!("Analyze request failed: {}", e);
                            GatewayReply::failed(e.to_string())
                        }
                    };
                    // The widget may have gone away; nothing to do then
                    let _ = reply.send(outcome);
                }
            }
        }
    });

    GatewayHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use claimlens_core::Claim;

    struct FixedAnalyzer(AnalysisResult);

    #[async_trait]
    impl PageAnalyzer for FixedAnalyzer {
        async fn analyze(&mut self, _url: &str) -> Result<AnalysisResult> {
            Ok(self.0.clone())
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl PageAnalyzer for FailingAnalyzer {
        async fn analyze(&mut self, _url: &str) -> Result<AnalysisResult> {
            Err(ClaimLensError::EmptyResponse)
        }
    }

    fn one_claim_result() -> AnalysisResult {
        AnalysisResult {
            claims: vec![Claim {
                text: "claim".to_string(),
                confidence: 0.8,
                bias_score: 0.2,
                sources: vec![],
            }],
            discarded: 0,
        }
    }

    #[tokio::test]
    async fn test_relay_round_trip() {
        let handle = spawn_relay(Box::new(FixedAnalyzer(one_claim_result())));
        let result = handle.analyze("https://example.com").await.unwrap();
        assert_eq!(result.claims.len(), 1);
    }

    #[tokio::test]
    async fn test_relay_surfaces_failure_as_error_string() {
        let handle = spawn_relay(Box::new(FailingAnalyzer));
        let err = handle.analyze("https://example.com").await.unwrap_err();
        match err {
            ClaimLensError::Analysis(message) => {
                assert!(message.contains("empty or invalid response"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reply_constructors() {
        let ok = GatewayReply::ok(AnalysisResult::default());
        assert!(ok.success);
        assert!(ok.data.is_some());
        assert!(ok.error.is_none());

        let failed = GatewayReply::failed("boom");
        assert!(!failed.success);
        assert!(failed.data.is_none());
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }
}
