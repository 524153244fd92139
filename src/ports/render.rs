//! Report rendering port.

use crate::domain::HealthReport;

/// Trait for rendering a [`HealthReport`] into a flat text format.
///
/// Renderers consume only the report's public fields; they never reach into
/// engine internals, so any representation (CSV row, prose report, future
/// formats) can be added without touching the engine.
pub trait ReportRenderer {
    /// Error type for rendering operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render the report to its textual representation.
    ///
    /// # Errors
    /// Returns error if the underlying encoder fails.
    fn render(&self, report: &HealthReport) -> Result<String, Self::Error>;

    /// File extension for exports of this format (without the dot).
    fn file_extension(&self) -> &'static str;
}
