//! Widget controller: visual state transitions and the analyze cycle
//!
//! The `WidgetController` holds the overlay state and drives the
//! analyze-and-render cycle over the gateway bridge. The cycle is
//! dispatched on user action and its completion is observed by the
//! run loop's poll ticks, so the overlay stays live while a request
//! is in flight.

use crate::bridge::GatewayHandle;
use crate::state::{status, ClaimCard, VisualState, WidgetState};
use claimlens_core::{AnalysisResult, ClaimLensError, Result};
use tokio::sync::oneshot;

/// Drives the two-state overlay and the analyze-and-render cycle
pub struct WidgetController {
    /// Current widget state (visual, busy flag, status, cards)
    pub state: WidgetState,
    /// Bridge to the gateway relay
    pub gateway: GatewayHandle,
    /// The page this widget analyzes
    pub page_url: String,
    /// Reply slot for the in-flight analyze cycle
    pending: Option<oneshot::Receiver<Result<AnalysisResult>>>,
}

impl WidgetController {
    pub fn new(page_url: impl Into<String>, gateway: GatewayHandle) -> Self {
        let page_url = page_url.into();
        Self {
            state: WidgetState::new(&page_url),
            gateway,
            page_url,
            pending: None,
        }
    }

    /// Expand the overlay (click on the minimized surface)
    pub fn expand(&mut self) {
        self.state.visual = VisualState::Expanded;
    }

    /// Minimize the overlay (close control)
    pub fn minimize(&mut self) {
        self.state.visual = VisualState::Minimized;
    }

    /// Flip between the two states (external toggle signal)
    pub fn toggle(&mut self) {
        self.state.visual = match self.state.visual {
            VisualState::Minimized => VisualState::Expanded,
            VisualState::Expanded => VisualState::Minimized,
        };
    }

    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    /// Advance the spinner
    pub fn on_tick(&mut self) {
        self.state.tick = self.state.tick.wrapping_add(1);
    }

    /// Start one analyze cycle: dispatch the request and mark the
    /// widget busy.
    ///
    /// Guarded by the busy flag: while a cycle is in flight this is a
    /// no-op and no second request is dispatched. Completion is
    /// observed by `poll_analysis`, which always clears the flag.
    pub fn analyze_current_page(&mut self) {
        if self.state.is_analyzing {
            return;
        }
        self.state.is_analyzing = true;
        self.state.status = status::ANALYZING.to_string();
        self.state.cards.clear();

        let gateway = self.gateway.clone();
        let url = self.page_url.clone();
        let (reply_tx, reply_rx) = oneshot::channel();
        self.pending = Some(reply_rx);
        tokio::spawn(async move {
            let _ = reply_tx.send(gateway.analyze(&url).await);
        });
    }

    /// Observe the in-flight cycle; render its outcome once the reply
    /// arrives. Clears the busy flag on every completion path.
    pub fn poll_analysis(&mut self) {
        let Some(reply_rx) = self.pending.as_mut() else {
            return;
        };
        let outcome = match reply_rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => Err(ClaimLensError::Bridge(
                "analysis task vanished".to_string(),
            )),
        };
        self.pending = None;

        match outcome {
            Ok(result) => {
                self.render_results(&result);
                self.state.status = status::COMPLETE.to_string();
            }
            Err(e) => {
                // The user sees only the generic failure card
                tracing::error!("Analysis failed: {}", e);
                self.state.status = status::FAILED.to_string();
                self.state.cards = vec![ClaimCard::error()];
            }
        }

        self.state.is_analyzing = false;
    }

    /// Populate the card area: one card per claim in input order, or
    /// the single all-clear card when nothing was flagged.
    pub fn render_results(&mut self, result: &AnalysisResult) {
        if result.discarded > 0 {
            tracing::warn!(
                "{} malformed claim(s) were dropped before rendering",
                result.discarded
            );
        }

        self.state.cards = if result.is_all_clear() {
            vec![ClaimCard::all_clear()]
        } else {
            result
                .claims
                .iter()
                .enumerate()
                .map(|(index, claim)| ClaimCard::claim(index, claim))
                .collect()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::spawn_relay;
    use crate::state::CardKind;
    use async_trait::async_trait;
    use claimlens_core::{Claim, PageAnalyzer};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct CountingAnalyzer {
        calls: Arc<AtomicUsize>,
        result: AnalysisResult,
    }

    #[async_trait]
    impl PageAnalyzer for CountingAnalyzer {
        async fn analyze(&mut self, _url: &str) -> Result<AnalysisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.result.clone())
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl PageAnalyzer for FailingAnalyzer {
        async fn analyze(&mut self, _url: &str) -> Result<AnalysisResult> {
            Err(ClaimLensError::RunRequest {
                status: 500,
                body: "agent down".to_string(),
            })
        }
    }

    fn claim(text: &str) -> Claim {
        Claim {
            text: text.to_string(),
            confidence: 0.8,
            bias_score: 0.2,
            sources: vec!["Source".to_string()],
        }
    }

    fn controller_with(result: AnalysisResult) -> (WidgetController, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle = spawn_relay(Box::new(CountingAnalyzer {
            calls: calls.clone(),
            result,
        }));
        (WidgetController::new("https://example.com", handle), calls)
    }

    /// Drive one dispatched cycle to completion via poll ticks
    async fn run_cycle(controller: &mut WidgetController) {
        controller.analyze_current_page();
        for _ in 0..500 {
            if !controller.state.is_analyzing {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
            controller.poll_analysis();
        }
        panic!("analyze cycle did not complete");
    }

    #[tokio::test]
    async fn test_toggle_flips_both_ways() {
        let (mut controller, _) = controller_with(AnalysisResult::default());
        assert_eq!(controller.state.visual, VisualState::Minimized);

        controller.toggle();
        assert_eq!(controller.state.visual, VisualState::Expanded);
        controller.toggle();
        assert_eq!(controller.state.visual, VisualState::Minimized);

        controller.expand();
        controller.minimize();
        assert_eq!(controller.state.visual, VisualState::Minimized);
    }

    #[tokio::test]
    async fn test_busy_flag_blocks_second_dispatch() {
        let (mut controller, calls) = controller_with(AnalysisResult::default());

        controller.state.is_analyzing = true;
        controller.analyze_current_page();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        // The no-op path must not clear the in-flight cycle's flag
        assert!(controller.state.is_analyzing);
    }

    #[tokio::test]
    async fn test_busy_while_in_flight_dispatches_only_once() {
        let (mut controller, calls) = controller_with(AnalysisResult::default());

        controller.analyze_current_page();
        assert!(controller.state.is_analyzing);
        // A second action while the first cycle is in flight
        controller.analyze_current_page();

        while controller.state.is_analyzing {
            tokio::time::sleep(Duration::from_millis(1)).await;
            controller.poll_analysis();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_analyze_renders_claim_cards_in_order() {
        let result = AnalysisResult {
            claims: vec![claim("first"), claim("second"), claim("third")],
            discarded: 0,
        };
        let (mut controller, calls) = controller_with(result);

        run_cycle(&mut controller).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state.status, status::COMPLETE);
        assert_eq!(controller.state.cards.len(), 3);
        assert_eq!(controller.state.cards[0].title, "Claim 1: first");
        assert_eq!(controller.state.cards[2].title, "Claim 3: third");
    }

    #[tokio::test]
    async fn test_empty_result_renders_single_all_clear_card() {
        let (mut controller, _) = controller_with(AnalysisResult::default());

        run_cycle(&mut controller).await;

        assert_eq!(controller.state.cards.len(), 1);
        assert_eq!(controller.state.cards[0].kind, CardKind::AllClear);
        assert_eq!(controller.state.status, status::COMPLETE);
    }

    #[tokio::test]
    async fn test_failure_renders_generic_error_card() {
        let handle = spawn_relay(Box::new(FailingAnalyzer));
        let mut controller = WidgetController::new("https://example.com", handle);

        run_cycle(&mut controller).await;

        assert_eq!(controller.state.status, status::FAILED);
        assert_eq!(controller.state.cards.len(), 1);
        assert_eq!(controller.state.cards[0].kind, CardKind::Error);
        // The specific failure is logged, never shown
        assert_eq!(controller.state.cards[0].title, "Analysis failed");
    }

    #[tokio::test]
    async fn test_busy_flag_clears_after_each_cycle() {
        let (mut controller, calls) = controller_with(AnalysisResult::default());

        run_cycle(&mut controller).await;
        run_cycle(&mut controller).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
