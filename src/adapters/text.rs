//! Plain-text report: prose sections for printing or archiving.

use std::convert::Infallible;
use std::fmt::Write as _;

use crate::domain::HealthReport;
use crate::ports::ReportRenderer;

const SOURCES_NOTE: &str = "Guideline thresholds: WHO (BMI), AHA/ACC (blood pressure), \
     ADA (glucose), NIH/ATP III (lipids).";

/// Renders a [`HealthReport`] as sectioned plain text: findings, flags,
/// recommendations, warnings, sources.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for TextRenderer {
    type Error = Infallible;

    fn render(&self, report: &HealthReport) -> Result<String, Self::Error> {
        let mut out = String::new();

        let _ = writeln!(out, "HealthLens - Personal Health Report");
        let _ = writeln!(out, "===================================");
        let _ = writeln!(out);

        if report.emergency {
            let _ = writeln!(
                out,
                "URGENT: some measurements indicate a potential medical emergency. \
                 Seek immediate care."
            );
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Findings");
        let _ = writeln!(out, "--------");
        for line in &report.summary {
            let _ = writeln!(out, "- {line}");
        }
        let _ = writeln!(out);

        let flags: Vec<_> = report.flags().collect();
        if !flags.is_empty() {
            let _ = writeln!(out, "Flags");
            let _ = writeln!(out, "-----");
            for flag in flags {
                let _ = writeln!(out, "- {}", flag.description());
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Recommendations");
        let _ = writeln!(out, "---------------");
        let _ = writeln!(out, "Diet: {}", report.diet_plan);
        let _ = writeln!(out, "Exercise: {}", report.exercise_plan);
        let _ = writeln!(out);

        if !report.warnings.is_empty() {
            let _ = writeln!(out, "Input warnings");
            let _ = writeln!(out, "--------------");
            for warning in &report.warnings {
                let _ = writeln!(out, "- {}: {}", warning.field, warning.reason);
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "{SOURCES_NOTE}");
        let _ = writeln!(
            out,
            "This report is indicative and does not replace professional medical \
             evaluation."
        );

        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GlucoseContext, HealthInput};

    #[test]
    fn test_sections_present() {
        let report = crate::evaluate(&HealthInput {
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            ..Default::default()
        });
        let rendered = TextRenderer::new().render(&report).expect("Should render");

        assert!(rendered.contains("Findings"));
        assert!(rendered.contains("Recommendations"));
        assert!(rendered.contains("Diet: "));
        assert!(rendered.contains("WHO (BMI)"));
        assert!(!rendered.contains("URGENT"));
    }

    #[test]
    fn test_emergency_banner_and_flags() {
        let report = crate::evaluate(&HealthInput {
            glucose: Some(45.0),
            glucose_context: Some(GlucoseContext::Fasting),
            ..Default::default()
        });
        let rendered = TextRenderer::new().render(&report).expect("Should render");

        assert!(rendered.contains("URGENT"));
        assert!(rendered.contains("Severe hypoglycemia"));
    }

    #[test]
    fn test_warnings_have_their_own_section() {
        let report = crate::evaluate(&HealthInput {
            height_cm: Some(20.0),
            weight_kg: Some(70.0),
            ..Default::default()
        });
        let rendered = TextRenderer::new().render(&report).expect("Should render");

        assert!(rendered.contains("Input warnings"));
        assert!(rendered.contains("height_cm"));
    }
}
