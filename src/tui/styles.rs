//! Color palette and styles for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Severity;

/// Theme for the HealthLens terminal UI.
pub struct VitalsTheme;

impl VitalsTheme {
    /// Steel blue - primary accent
    pub const PRIMARY: Color = Color::Rgb(59, 130, 246); // #3B82F6

    /// Lighter blue for focus highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(147, 197, 253); // #93C5FD

    /// Emerald - normal findings
    pub const OK: Color = Color::Rgb(16, 185, 129); // #10B981

    /// Amber - borderline findings
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Orange - high findings
    pub const HIGH: Color = Color::Rgb(249, 115, 22); // #F97316

    /// Rose - critical findings and errors
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    /// Primary text
    pub const TEXT: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    /// Border gray
    pub const BORDER: Color = Color::Rgb(71, 85, 105); // #475569

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Style for section subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Style for secondary text
    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for muted text
    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for error messages
    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Style for focused borders
    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for a finding at the given severity.
    #[must_use]
    pub fn severity(severity: Severity) -> Style {
        let color = match severity {
            Severity::Normal => Self::OK,
            Severity::Borderline => Self::WARNING,
            Severity::High => Self::HIGH,
            Severity::Critical => Self::DANGER,
        };
        Style::default().fg(color)
    }
}
