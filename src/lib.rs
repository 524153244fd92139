//! # HealthLens
//!
//! Rule-based interpreter for personal health measurements.
//!
//! This crate provides:
//! - A pure classification engine mapping raw measurements (anthropometric,
//!   vital-sign, hematologic, lipid) to clinically-referenced categories,
//!   risk flags, and diet/exercise recommendations
//! - Report export adapters (CSV row, plain-text report)
//! - A terminal UI for entering measurements and viewing the report
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types and per-domain classifiers (pure, stateless)
//! - `application`: The risk aggregator and plan selection
//! - `ports`: Trait definitions for report rendering
//! - `adapters`: Concrete renderers (csv, text)
//! - `tui`: Terminal user interface
//!
//! The engine entry point is [`evaluate`]: a total, deterministic function
//! from a [`HealthInput`] snapshot to a [`HealthReport`]. Missing fields
//! degrade to "not evaluated"; it never fails for well-typed input.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::evaluate;
pub use domain::{HealthInput, HealthReport, Severity};

/// Result type for HealthLens operations
pub type Result<T> = std::result::Result<T, HealthLensError>;

/// Main error type for HealthLens.
///
/// The classification engine itself is total and never produces these;
/// they cover the fallible edges (export I/O, serialization, terminal).
#[derive(Debug, thiserror::Error)]
pub enum HealthLensError {
    #[error("Report export failed: {0}")]
    Export(#[from] adapters::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
