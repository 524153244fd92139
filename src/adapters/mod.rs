//! Adapters layer: Concrete report renderers.
//!
//! - `csv`: one flat row per report, for spreadsheets and pipelines
//! - `text`: prose report with findings, flags, and plans

pub mod csv;
pub mod text;

use std::path::{Path, PathBuf};

use crate::domain::HealthReport;
use crate::ports::ReportRenderer;

pub use self::csv::CsvRenderer;
pub use self::text::TextRenderer;

/// Error type shared by the export adapters.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Export buffer finalization failed: {0}")]
    Finalize(String),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::convert::Infallible> for ExportError {
    fn from(infallible: std::convert::Infallible) -> Self {
        match infallible {}
    }
}

/// Render a report and write it to a timestamped file.
///
/// The target directory comes from `HEALTHLENS_EXPORT_DIR` (default: the
/// working directory). Returns the path written.
///
/// # Errors
/// Returns error if rendering or the file write fails.
pub fn write_report<R>(renderer: &R, report: &HealthReport) -> crate::Result<PathBuf>
where
    R: ReportRenderer,
    R::Error: Into<ExportError>,
{
    let rendered = renderer
        .render(report)
        .map_err(|e| crate::HealthLensError::Export(e.into()))?;

    let dir = std::env::var("HEALTHLENS_EXPORT_DIR").unwrap_or_else(|_| ".".to_string());
    let filename = format!(
        "health_report_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        renderer.file_extension()
    );
    let path = Path::new(&dir).join(filename);

    std::fs::write(&path, rendered)?;
    tracing::info!("Report exported to {}", path.display());

    Ok(path)
}
