//! VegVision Common Library
//!
//! Core shared between the web front-end and native tests:
//! domain types, API error taxonomy, client configuration,
//! the interaction state machine, and the degraded-mode catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use config::{ClientConfig, FallbackPolicy};
pub use error::{ApiError, Result};
pub use session::{AnalysisSession, ImageSource, Phase, RequestToken, SessionError};
pub use types::{AnalysisResult, PriceQuote, UrlAnalysisRequest};
