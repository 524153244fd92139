//! Blood pressure classifier (AHA/ACC categories).
//!
//! Systolic and diastolic readings are sub-classified independently and the
//! worse of the two wins. A crisis-level reading on either side is an
//! emergency regardless of the other.

use serde::{Deserialize, Serialize};

use super::input::HealthInput;
use super::severity::{Category, HealthDomain, Severity};

/// AHA/ACC blood pressure category. Declaration order is worst-case order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BpCategory {
    Normal,
    Elevated,
    Stage1,
    Stage2,
    Crisis,
}

impl BpCategory {
    /// Guideline label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Elevated => "Elevated blood pressure",
            Self::Stage1 => "Stage 1 hypertension",
            Self::Stage2 => "Stage 2 hypertension",
            Self::Crisis => "Hypertensive crisis",
        }
    }

    /// Position on the shared severity scale.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Normal => Severity::Normal,
            Self::Elevated => Severity::Borderline,
            Self::Stage1 | Self::Stage2 => Severity::High,
            Self::Crisis => Severity::Critical,
        }
    }
}

/// Systolic cutoffs: exclusive upper bound per category.
const SYSTOLIC: [(f64, BpCategory); 5] = [
    (120.0, BpCategory::Normal),
    (130.0, BpCategory::Elevated),
    (140.0, BpCategory::Stage1),
    (180.0, BpCategory::Stage2),
    (f64::INFINITY, BpCategory::Crisis),
];

/// Diastolic cutoffs. There is no "elevated" band on the diastolic side.
const DIASTOLIC: [(f64, BpCategory); 4] = [
    (80.0, BpCategory::Normal),
    (90.0, BpCategory::Stage1),
    (120.0, BpCategory::Stage2),
    (f64::INFINITY, BpCategory::Crisis),
];

fn scan(table: &[(f64, BpCategory)], value: f64) -> BpCategory {
    table
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, cat)| *cat)
        .unwrap_or(BpCategory::Crisis)
}

/// Sub-classify a systolic reading.
#[must_use]
pub fn classify_systolic(systolic: f64) -> BpCategory {
    scan(&SYSTOLIC, systolic)
}

/// Sub-classify a diastolic reading.
#[must_use]
pub fn classify_diastolic(diastolic: f64) -> BpCategory {
    scan(&DIASTOLIC, diastolic)
}

/// Classify a blood pressure pair: the worse sub-classification wins.
///
/// Requires both readings; a lone systolic or diastolic value is reported
/// as not evaluated.
#[must_use]
pub fn classify(input: &HealthInput) -> Option<Category> {
    let systolic = input.systolic?;
    let diastolic = input.diastolic?;

    let worst = classify_systolic(systolic).max(classify_diastolic(diastolic));

    Some(Category::new(
        HealthDomain::BloodPressure,
        systolic,
        worst.label(),
        worst.severity(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_pair(systolic: f64, diastolic: f64) -> Category {
        classify(&HealthInput {
            systolic: Some(systolic),
            diastolic: Some(diastolic),
            ..Default::default()
        })
        .expect("Should classify")
    }

    #[test]
    fn test_normal() {
        let c = classify_pair(110.0, 75.0);
        assert_eq!(c.label, "Normal");
        assert_eq!(c.severity, Severity::Normal);
    }

    #[test]
    fn test_elevated_is_systolic_only() {
        assert_eq!(classify_pair(125.0, 75.0).label, "Elevated blood pressure");
    }

    #[test]
    fn test_worse_side_wins() {
        // Diastolic stage 1 beats systolic normal
        assert_eq!(classify_pair(118.0, 85.0).label, "Stage 1 hypertension");
        // Systolic stage 2 beats diastolic stage 1
        assert_eq!(classify_pair(150.0, 85.0).label, "Stage 2 hypertension");
    }

    #[test]
    fn test_crisis_from_either_side() {
        let sys = classify_pair(185.0, 75.0);
        assert_eq!(sys.label, "Hypertensive crisis");
        assert_eq!(sys.severity, Severity::Critical);

        let dia = classify_pair(120.0, 125.0);
        assert_eq!(dia.severity, Severity::Critical);
    }

    #[test]
    fn test_single_reading_is_not_evaluated() {
        let lone = HealthInput {
            systolic: Some(150.0),
            ..Default::default()
        };
        assert!(classify(&lone).is_none());
    }

    #[test]
    fn test_systolic_monotonicity() {
        // Severity never decreases as systolic rises with diastolic fixed.
        let mut last = Severity::Normal;
        for systolic in (80..=250).step_by(1) {
            let c = classify_pair(f64::from(systolic), 70.0);
            assert!(
                c.severity >= last,
                "severity decreased at systolic {systolic}"
            );
            last = c.severity;
        }
    }
}
