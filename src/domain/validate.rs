//! Physiological range validation.
//!
//! Out-of-bound values are not rejected: they are clamped to the violated
//! bound, flagged with a [`ValidationWarning`], and passed on so downstream
//! classifiers always see values inside their category tables. Absent fields
//! stay absent.

use serde::{Deserialize, Serialize};

use super::input::HealthInput;

/// A value that fell outside its hard physiological bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Input field name
    pub field: String,
    /// The raw value as entered
    pub value: f64,
    /// Human-readable reason, including the bound that was applied
    pub reason: String,
}

/// Hard physiological bounds per field (inclusive).
///
/// These match the input limits of the measurement form; anything outside
/// them is physiologically implausible rather than merely abnormal.
const BOUNDS: [(&str, f64, f64); 15] = [
    ("height_cm", 50.0, 250.0),
    ("weight_kg", 2.0, 400.0),
    ("age_years", 0.0, 120.0),
    ("systolic", 40.0, 300.0),
    ("diastolic", 20.0, 200.0),
    ("glucose", 20.0, 1000.0),
    ("hemoglobin", 1.0, 25.0),
    ("wbc", 0.1, 200.0),
    ("rbc", 0.5, 10.0),
    ("platelets", 1.0, 2000.0),
    ("mcv", 40.0, 160.0),
    ("total_cholesterol", 50.0, 500.0),
    ("ldl", 10.0, 400.0),
    ("hdl", 5.0, 150.0),
    ("triglycerides", 10.0, 3000.0),
];

fn bound_for(field: &str) -> (f64, f64) {
    BOUNDS
        .iter()
        .find(|(name, _, _)| *name == field)
        .map(|(_, min, max)| (*min, *max))
        .unwrap_or((f64::NEG_INFINITY, f64::INFINITY))
}

fn clamp_field(
    field: &'static str,
    value: Option<f64>,
    warnings: &mut Vec<ValidationWarning>,
) -> Option<f64> {
    let value = value?;
    let (min, max) = bound_for(field);

    if value < min {
        warnings.push(ValidationWarning {
            field: field.to_string(),
            value,
            reason: format!("{value} below plausible minimum {min}, clamped"),
        });
        Some(min)
    } else if value > max {
        warnings.push(ValidationWarning {
            field: field.to_string(),
            value,
            reason: format!("{value} above plausible maximum {max}, clamped"),
        });
        Some(max)
    } else {
        Some(value)
    }
}

/// Check every present field against its physiological bound.
///
/// Returns the (possibly clamped) input and the warnings produced. The
/// returned input is what classifiers should consume.
#[must_use]
pub fn validate(raw: &HealthInput) -> (HealthInput, Vec<ValidationWarning>) {
    let mut warnings = Vec::new();

    let validated = HealthInput {
        height_cm: clamp_field("height_cm", raw.height_cm, &mut warnings),
        weight_kg: clamp_field("weight_kg", raw.weight_kg, &mut warnings),
        age_years: clamp_field("age_years", raw.age_years, &mut warnings),
        sex: raw.sex,
        systolic: clamp_field("systolic", raw.systolic, &mut warnings),
        diastolic: clamp_field("diastolic", raw.diastolic, &mut warnings),
        glucose: clamp_field("glucose", raw.glucose, &mut warnings),
        glucose_context: raw.glucose_context,
        hemoglobin: clamp_field("hemoglobin", raw.hemoglobin, &mut warnings),
        wbc: clamp_field("wbc", raw.wbc, &mut warnings),
        rbc: clamp_field("rbc", raw.rbc, &mut warnings),
        platelets: clamp_field("platelets", raw.platelets, &mut warnings),
        mcv: clamp_field("mcv", raw.mcv, &mut warnings),
        total_cholesterol: clamp_field("total_cholesterol", raw.total_cholesterol, &mut warnings),
        ldl: clamp_field("ldl", raw.ldl, &mut warnings),
        hdl: clamp_field("hdl", raw.hdl, &mut warnings),
        triglycerides: clamp_field("triglycerides", raw.triglycerides, &mut warnings),
    };

    (validated, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_passes_unchanged() {
        let input = HealthInput {
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            systolic: Some(120.0),
            ..Default::default()
        };
        let (validated, warnings) = validate(&input);
        assert_eq!(validated, input);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_out_of_range_is_clamped_and_flagged() {
        let input = HealthInput {
            height_cm: Some(400.0),
            weight_kg: Some(1.0),
            ..Default::default()
        };
        let (validated, warnings) = validate(&input);

        assert_eq!(validated.height_cm, Some(250.0));
        assert_eq!(validated.weight_kg, Some(2.0));
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].field, "height_cm");
        assert!((warnings[0].value - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_stays_absent() {
        let (validated, warnings) = validate(&HealthInput::default());
        assert!(validated.is_empty());
        assert!(warnings.is_empty());
    }
}
