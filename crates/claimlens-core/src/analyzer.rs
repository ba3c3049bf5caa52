//! The seam between the widget and a concrete analysis backend

use crate::{AnalysisResult, Result};
use async_trait::async_trait;

/// A backend that can analyze the page at a url.
///
/// Takes `&mut self` because the real gateway owns lazily-created
/// session state. Implementations: the HTTP gateway in
/// `claimlens-gateway`, and its simulated stand-in for offline use.
#[async_trait]
pub trait PageAnalyzer: Send {
    async fn analyze(&mut self, url: &str) -> Result<AnalysisResult>;
}
