//! # claimlens-core
//!
//! Core types for the ClaimLens fact-check client.
//!
//! ClaimLens bridges a page-analysis intent to a remote conversational
//! agent and renders the claims it returns. This crate holds the shared
//! contracts between the gateway and the widget:
//!
//! - The data model: [`AnalyzeRequest`], [`Claim`], [`AnalysisResult`]
//! - The claim validation boundary (the remote is not trusted to
//!   produce well-formed claims)
//! - The [`PageAnalyzer`] seam the widget programs against
//! - The unified [`ClaimLensError`] type

mod analyzer;
mod error;
mod types;

pub use analyzer::PageAnalyzer;
pub use error::{ClaimLensError, Result};
pub use types::*;
