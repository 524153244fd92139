//! Severity scale, measurement domains, and classification outcomes.

use serde::{Deserialize, Serialize};

/// Ordered severity of a classified finding.
///
/// The derived `Ord` follows declaration order, so worst-case aggregation
/// is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Within the reference range
    Normal,
    /// Outside the reference range, watch-and-recheck territory
    Borderline,
    /// Clinically significant deviation
    High,
    /// Requires urgent evaluation
    Critical,
}

impl Severity {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Within reference range",
            Self::Borderline => "Borderline - recheck recommended",
            Self::High => "Outside reference range - clinical follow-up advised",
            Self::Critical => "Critical - urgent evaluation needed",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Borderline => write!(f, "BORDERLINE"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Measurement domains, in the fixed order used for report summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthDomain {
    Bmi,
    BloodPressure,
    Glucose,
    Cbc,
    Lipids,
}

impl HealthDomain {
    /// All domains in summary order.
    pub const ALL: [Self; 5] = [
        Self::Bmi,
        Self::BloodPressure,
        Self::Glucose,
        Self::Cbc,
        Self::Lipids,
    ];

    /// Display name used in summaries and exports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bmi => "BMI",
            Self::BloodPressure => "Blood pressure",
            Self::Glucose => "Glucose",
            Self::Cbc => "CBC",
            Self::Lipids => "Lipids",
        }
    }
}

impl std::fmt::Display for HealthDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A labeled interval result: one classified measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Domain the measurement belongs to
    pub domain: HealthDomain,
    /// The (possibly derived) numeric value that was classified
    pub value: f64,
    /// Guideline label, e.g. "Stage 2 hypertension"
    pub label: String,
    /// Severity on the ordered scale
    pub severity: Severity,
}

impl Category {
    /// Create a new category result.
    #[must_use]
    pub fn new(domain: HealthDomain, value: f64, label: impl Into<String>, severity: Severity) -> Self {
        Self {
            domain,
            value,
            label: label.into(),
            severity,
        }
    }
}

/// Discrete findings raised by classifiers.
///
/// Flags are not mutually exclusive within a domain; several can co-occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    /// Glucose below 70 mg/dL
    Hypoglycemia,
    /// Glucose below 54 mg/dL
    SevereHypoglycemia,
    /// Low hemoglobin with MCV below range (iron-deficiency pattern)
    MicrocyticAnemia,
    /// Low hemoglobin with MCV in range
    NormocyticAnemia,
    /// Low hemoglobin with MCV above range (B12/folate pattern)
    MacrocyticAnemia,
    /// Low hemoglobin, MCV not measured
    UnspecifiedAnemia,
    /// Low white cell count
    InfectionSusceptibility,
    /// Elevated white cell count
    InfectionOrInflammation,
    /// Low platelet count
    BleedingRisk,
    /// Elevated platelet count
    Thrombocytosis,
}

impl Flag {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hypoglycemia => "Low glucose (hypoglycemia)",
            Self::SevereHypoglycemia => "Severe hypoglycemia - urgent evaluation needed",
            Self::MicrocyticAnemia => "Possible microcytic anemia - consider iron studies",
            Self::NormocyticAnemia => "Possible normocytic anemia - repeat CBC and review",
            Self::MacrocyticAnemia => "Possible macrocytic anemia - consider B12/folate testing",
            Self::UnspecifiedAnemia => "Possible anemia - MCV needed to subtype",
            Self::InfectionSusceptibility => "Low WBC - elevated infection susceptibility",
            Self::InfectionOrInflammation => "Elevated WBC - possible infection or inflammation",
            Self::BleedingRisk => "Low platelets - bleeding risk",
            Self::Thrombocytosis => "High platelets - reactive thrombocytosis possible",
        }
    }

    /// Whether this flag alone marks the report as an emergency.
    #[must_use]
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::Hypoglycemia | Self::SevereHypoglycemia)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Normal < Severity::Borderline);
        assert!(Severity::Borderline < Severity::High);
        assert!(Severity::High < Severity::Critical);
        assert_eq!(
            Severity::High.max(Severity::Borderline),
            Severity::High
        );
    }

    #[test]
    fn test_hypoglycemia_flags_are_emergencies() {
        assert!(Flag::Hypoglycemia.is_emergency());
        assert!(Flag::SevereHypoglycemia.is_emergency());
        assert!(!Flag::MicrocyticAnemia.is_emergency());
        assert!(!Flag::Thrombocytosis.is_emergency());
    }
}
