//! Body mass index classifier (WHO categories).

use super::bands::{band, lookup, Band};
use super::input::HealthInput;
use super::severity::{Category, HealthDomain, Severity};

/// WHO BMI bands, obesity subdivided into classes I-III.
///
/// Cutoffs sit on the upper bound of the lower band, so 18.5 is already
/// normal weight and 30.0 is already class I obesity.
const BMI_BANDS: [Band; 6] = [
    band(18.5, "Underweight", Severity::Borderline),
    band(25.0, "Normal weight", Severity::Normal),
    band(30.0, "Overweight", Severity::Borderline),
    band(35.0, "Obesity class I", Severity::High),
    band(40.0, "Obesity class II", Severity::High),
    band(f64::INFINITY, "Obesity class III", Severity::Critical),
];

/// Compute BMI from height and weight.
///
/// Returns `None` when either measurement is absent or height is
/// non-positive.
#[must_use]
pub fn bmi_value(input: &HealthInput) -> Option<f64> {
    let height_cm = input.height_cm?;
    let weight_kg = input.weight_kg?;
    if height_cm <= 0.0 {
        return None;
    }
    let meters = height_cm / 100.0;
    Some(weight_kg / (meters * meters))
}

/// Classify BMI into its WHO category.
#[must_use]
pub fn classify(input: &HealthInput) -> Option<Category> {
    let bmi = bmi_value(input)?;
    let b = lookup(&BMI_BANDS, bmi);
    Some(Category::new(HealthDomain::Bmi, bmi, b.label, b.severity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(height_cm: f64, weight_kg: f64) -> HealthInput {
        HealthInput {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            ..Default::default()
        }
    }

    fn classify_bmi(bmi: f64) -> Category {
        // 1 m tall, weight = bmi, keeps the value exact
        classify(&input(100.0, bmi)).expect("Should classify")
    }

    #[test]
    fn test_bmi_value() {
        let bmi = bmi_value(&input(175.0, 70.0)).expect("Should compute");
        assert!((bmi - 22.857).abs() < 0.01);
    }

    #[test]
    fn test_missing_fields_skip() {
        assert!(classify(&HealthInput::default()).is_none());
        assert!(classify(&HealthInput {
            height_cm: Some(175.0),
            ..Default::default()
        })
        .is_none());
    }

    #[test]
    fn test_boundaries_belong_to_higher_category() {
        assert_eq!(classify_bmi(18.5).label, "Normal weight");
        assert_eq!(classify_bmi(25.0).label, "Overweight");
        assert_eq!(classify_bmi(30.0).label, "Obesity class I");
        assert_eq!(classify_bmi(35.0).label, "Obesity class II");
        assert_eq!(classify_bmi(40.0).label, "Obesity class III");
    }

    #[test]
    fn test_category_severities() {
        assert_eq!(classify_bmi(17.0).severity, Severity::Borderline);
        assert_eq!(classify_bmi(22.0).severity, Severity::Normal);
        assert_eq!(classify_bmi(27.0).severity, Severity::Borderline);
        assert_eq!(classify_bmi(32.0).severity, Severity::High);
        assert_eq!(classify_bmi(45.0).severity, Severity::Critical);
    }
}
