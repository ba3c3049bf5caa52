//! HTTP client for the remote fact-check agent
//!
//! Key design: the session id is owned by the gateway instance, not
//! by a process-wide global. It is created lazily on the first
//! analyze, committed only after the create call is accepted, and
//! reused for every request after that.

use crate::config::GatewayConfig;
use crate::types::{AgentEvent, RunRequest};
use async_trait::async_trait;
use chrono::Utc;
use claimlens_core::{AnalysisResult, AnalyzeRequest, ClaimLensError, PageAnalyzer, Result};
use uuid::Uuid;

/// Gateway to the remote analysis agent
#[derive(Debug, Clone)]
pub struct AgentGateway {
    config: GatewayConfig,
    http: reqwest::Client,
    session: Option<String>,
}

impl AgentGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            session: None,
        }
    }

    /// Current session id, if one has been established
    pub fn session_id(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Ensure a remote session exists, creating one on first use.
    ///
    /// HTTP 400 from the create endpoint means the session already
    /// exists and is not fatal. The id is committed only after a
    /// 2xx or 400 response, so a failed create can be retried by a
    /// later analyze. Idempotent once committed: a second call never
    /// issues a second create request.
    pub async fn ensure_session(&mut self) -> Result<String> {
        if let Some(session) = &self.session {
            return Ok(session.clone());
        }

        let candidate = generate_session_id();
        let url = format!(
            "{}/apps/{}/users/{}/sessions/{}",
            self.config.host, self.config.app_name, self.config.user_id, candidate
        );

        tracing::info!("Creating new session: {}", candidate);
        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| {
                ClaimLensError::Transport(format!("Failed to send session request: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() != 400 {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown".to_string());
                return Err(ClaimLensError::SessionCreation {
                    status: status.as_u16(),
                    body,
                });
            }
            // The backend has no explicit existence check; 400 is its
            // "already exists" answer.
            tracing::warn!("Session likely already exists, proceeding");
        }

        self.session = Some(candidate.clone());
        Ok(candidate)
    }

    /// Analyze the page at `url` through the remote agent.
    ///
    /// Session creation (if needed) strictly precedes the run call;
    /// a failure at either step aborts the cycle with one descriptive
    /// error. No retries, no timeouts.
    pub async fn analyze(&mut self, url: &str) -> Result<AnalysisResult> {
        let request = AnalyzeRequest::new(url)?;
        let session_id = self.ensure_session().await?;

        let run_url = format!("{}/run", self.config.host);
        let run_request = RunRequest::page_message(&self.config, &session_id, &request.target_url);

        tracing::info!("Sending page to agent: {}", request.target_url);
        let response = self
            .http
            .post(&run_url)
            .json(&run_request)
            .send()
            .await
            .map_err(|e| ClaimLensError::Transport(format!("Failed to send run request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(ClaimLensError::RunRequest {
                status: status.as_u16(),
                body,
            });
        }

        // The body must be a non-empty array of events; the last
        // event's content carries the final result.
        let events: Vec<AgentEvent> = response
            .json()
            .await
            .map_err(|_| ClaimLensError::EmptyResponse)?;
        let final_event = events.last().ok_or(ClaimLensError::EmptyResponse)?;

        let result = AnalysisResult::from_content(&final_event.content);
        tracing::info!(
            "Analysis complete: {} claim(s), {} dropped",
            result.claims.len(),
            result.discarded
        );
        Ok(result)
    }
}

#[async_trait]
impl PageAnalyzer for AgentGateway {
    async fn analyze(&mut self, url: &str) -> Result<AnalysisResult> {
        AgentGateway::analyze(self, url).await
    }
}

/// Locally-unique session id: millisecond timestamp plus a random
/// suffix. Uniqueness is best-effort, not cryptographic.
fn generate_session_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ext-{}-{}", Utc::now().timestamp_millis(), &suffix[..13])
}
