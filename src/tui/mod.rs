//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides:
//! - A measurement entry form (blank fields are skipped, not zero)
//! - A color-coded report view with CSV/text export

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::VitalsTheme;
