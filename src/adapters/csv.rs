//! CSV export: one flat row per report.
//!
//! Every top-level report field maps to one column; domains that were not
//! evaluated leave their columns empty. The timestamp is stamped here at
//! export time, never by the engine.

use crate::domain::{Category, HealthDomain, HealthReport};
use crate::ports::ReportRenderer;

use super::ExportError;

const HEADERS: [&str; 15] = [
    "timestamp",
    "bmi",
    "bmi_category",
    "bp_category",
    "bp_severity",
    "glucose",
    "glucose_category",
    "cbc_findings",
    "cbc_flags",
    "lipid_category",
    "lipid_severity",
    "emergency",
    "diet_plan",
    "exercise_plan",
    "warnings",
];

/// Renders a [`HealthReport`] as a header row plus one record.
#[derive(Debug, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    /// Create a new CSV renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn category_of(report: &HealthReport, domain: HealthDomain) -> Option<&Category> {
    report.result(domain).and_then(|r| r.category.as_ref())
}

fn row(report: &HealthReport) -> [String; 15] {
    let bmi = category_of(report, HealthDomain::Bmi);
    let bp = category_of(report, HealthDomain::BloodPressure);
    let glucose = category_of(report, HealthDomain::Glucose);
    let lipids = category_of(report, HealthDomain::Lipids);

    let cbc_findings = report
        .result(HealthDomain::Cbc)
        .map(|r| {
            r.components
                .iter()
                .map(|c| c.label.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })
        .unwrap_or_default();

    let cbc_flags = report
        .result(HealthDomain::Cbc)
        .map(|r| {
            r.flags
                .iter()
                .map(|f| f.description())
                .collect::<Vec<_>>()
                .join("; ")
        })
        .unwrap_or_default();

    let warnings = report
        .warnings
        .iter()
        .map(|w| format!("{}: {}", w.field, w.reason))
        .collect::<Vec<_>>()
        .join("; ");

    [
        chrono::Utc::now().to_rfc3339(),
        bmi.map(|c| format!("{:.1}", c.value)).unwrap_or_default(),
        bmi.map(|c| c.label.clone()).unwrap_or_default(),
        bp.map(|c| c.label.clone()).unwrap_or_default(),
        bp.map(|c| c.severity.to_string()).unwrap_or_default(),
        glucose
            .map(|c| format!("{:.0}", c.value))
            .unwrap_or_default(),
        glucose.map(|c| c.label.clone()).unwrap_or_default(),
        cbc_findings,
        cbc_flags,
        lipids.map(|c| c.label.clone()).unwrap_or_default(),
        lipids.map(|c| c.severity.to_string()).unwrap_or_default(),
        report.emergency.to_string(),
        report.diet_plan.clone(),
        report.exercise_plan.clone(),
        warnings,
    ]
}

impl ReportRenderer for CsvRenderer {
    type Error = ExportError;

    fn render(&self, report: &HealthReport) -> Result<String, Self::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADERS)?;
        writer.write_record(row(report))?;

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Finalize(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GlucoseContext, HealthInput};

    fn sample_report() -> HealthReport {
        crate::evaluate(&HealthInput {
            height_cm: Some(170.0),
            weight_kg: Some(95.0),
            systolic: Some(150.0),
            diastolic: Some(95.0),
            glucose: Some(130.0),
            glucose_context: Some(GlucoseContext::Fasting),
            ..Default::default()
        })
    }

    #[test]
    fn test_header_and_single_record() {
        let rendered = CsvRenderer::new()
            .render(&sample_report())
            .expect("Should render");

        let mut lines = rendered.lines();
        let header = lines.next().expect("Should have header");
        assert!(header.starts_with("timestamp,bmi,bmi_category"));
        assert_eq!(rendered.trim_end().lines().count(), 2);
    }

    #[test]
    fn test_fields_land_in_columns() {
        let rendered = CsvRenderer::new()
            .render(&sample_report())
            .expect("Should render");

        let mut reader = csv::Reader::from_reader(rendered.as_bytes());
        let record = reader
            .records()
            .next()
            .expect("Should have one record")
            .expect("Should parse");

        assert_eq!(record.len(), HEADERS.len());
        assert_eq!(&record[2], "Obesity class I");
        assert_eq!(&record[3], "Stage 2 hypertension");
        assert_eq!(&record[6], "Diabetes-range fasting");
        assert_eq!(&record[11], "false");
    }

    #[test]
    fn test_not_evaluated_columns_are_empty() {
        let report = crate::evaluate(&HealthInput::default());
        let rendered = CsvRenderer::new().render(&report).expect("Should render");

        let mut reader = csv::Reader::from_reader(rendered.as_bytes());
        let record = reader
            .records()
            .next()
            .expect("Should have one record")
            .expect("Should parse");

        assert_eq!(&record[1], "");
        assert_eq!(&record[3], "");
        assert_eq!(&record[9], "");
    }
}
