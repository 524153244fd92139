//! Aggregated health report types.

use serde::{Deserialize, Serialize};

use super::severity::{Category, Flag, HealthDomain, Severity};
use super::validate::ValidationWarning;

/// Output of one measurement domain.
///
/// `category` is the domain's headline result (`None` = not evaluated).
/// Domains that evaluate several sub-parameters (CBC, lipids) also carry the
/// per-parameter detail in `components`; the CBC headline stays `None`
/// because its parameters are never combined into one score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierResult {
    pub domain: HealthDomain,
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<Flag>,
}

impl ClassifierResult {
    /// A domain that produced no result at all.
    #[must_use]
    pub fn not_evaluated(domain: HealthDomain) -> Self {
        Self {
            domain,
            category: None,
            components: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Whether the domain produced any result.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.category.is_some() || !self.components.is_empty()
    }

    /// Worst severity across the headline, components, and none at all.
    #[must_use]
    pub fn worst_severity(&self) -> Option<Severity> {
        self.category
            .iter()
            .chain(self.components.iter())
            .map(|c| c.severity)
            .max()
    }
}

/// The aggregated report: a pure, deterministic function of the input.
///
/// Owned by the caller; the engine retains nothing between evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// One result per domain, in the fixed order BMI, BP, glucose, CBC,
    /// lipids
    pub results: Vec<ClassifierResult>,

    /// True when any classifier raised an emergency signal
    pub emergency: bool,

    /// Selected diet guidance
    pub diet_plan: String,

    /// Selected exercise guidance
    pub exercise_plan: String,

    /// Human-readable findings, one per domain, in domain order
    pub summary: Vec<String>,

    /// Range-validation warnings, kept out of the clinical summary
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationWarning>,
}

impl HealthReport {
    /// Look up one domain's result.
    #[must_use]
    pub fn result(&self, domain: HealthDomain) -> Option<&ClassifierResult> {
        self.results.iter().find(|r| r.domain == domain)
    }

    /// Worst severity anywhere in the report.
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        self.results
            .iter()
            .filter_map(ClassifierResult::worst_severity)
            .max()
            .unwrap_or(Severity::Normal)
    }

    /// All flags raised across domains, in domain order.
    pub fn flags(&self) -> impl Iterator<Item = Flag> + '_ {
        self.results.iter().flat_map(|r| r.flags.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_severity_spans_components() {
        let result = ClassifierResult {
            domain: HealthDomain::Cbc,
            category: None,
            components: vec![
                Category::new(HealthDomain::Cbc, 14.0, "Hemoglobin normal", Severity::Normal),
                Category::new(HealthDomain::Cbc, 30.0, "Platelets severely low", Severity::Critical),
            ],
            flags: vec![Flag::BleedingRisk],
        };
        assert_eq!(result.worst_severity(), Some(Severity::Critical));
        assert!(result.is_evaluated());
    }

    #[test]
    fn test_not_evaluated() {
        let result = ClassifierResult::not_evaluated(HealthDomain::Glucose);
        assert!(!result.is_evaluated());
        assert_eq!(result.worst_severity(), None);
    }
}
