//! Health measurement input snapshot.

use serde::{Deserialize, Serialize};

/// Biological sex, used only to select hematology reference ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Measurement context for a glucose reading.
///
/// The glucose classifier is only defined relative to a context; without one
/// it reports "not evaluated" rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseContext {
    Fasting,
    Random,
    PostMeal,
}

impl std::fmt::Display for GlucoseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fasting => write!(f, "fasting"),
            Self::Random => write!(f, "random"),
            Self::PostMeal => write!(f, "post-meal"),
        }
    }
}

/// Immutable snapshot of one person's measurements.
///
/// Every field is optional: classifiers whose inputs are absent skip and
/// report "not evaluated" instead of failing the evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    /// Height in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,

    /// Weight in kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<f64>,

    /// Biological sex (reference-range selection only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,

    /// Systolic blood pressure in mmHg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic: Option<f64>,

    /// Diastolic blood pressure in mmHg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<f64>,

    /// Blood glucose in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glucose: Option<f64>,

    /// Measurement context for the glucose reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glucose_context: Option<GlucoseContext>,

    /// Hemoglobin in g/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hemoglobin: Option<f64>,

    /// White blood cells in 10^3/uL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wbc: Option<f64>,

    /// Red blood cells in 10^6/uL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rbc: Option<f64>,

    /// Platelets in 10^3/uL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platelets: Option<f64>,

    /// Mean corpuscular volume in fL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcv: Option<f64>,

    /// Total cholesterol in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cholesterol: Option<f64>,

    /// LDL cholesterol in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldl: Option<f64>,

    /// HDL cholesterol in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdl: Option<f64>,

    /// Triglycerides in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triglycerides: Option<f64>,
}

impl HealthInput {
    /// True if no measurement at all is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height_cm.is_none()
            && self.weight_kg.is_none()
            && self.systolic.is_none()
            && self.diastolic.is_none()
            && self.glucose.is_none()
            && self.hemoglobin.is_none()
            && self.wbc.is_none()
            && self.rbc.is_none()
            && self.platelets.is_none()
            && self.mcv.is_none()
            && self.total_cholesterol.is_none()
            && self.ldl.is_none()
            && self.hdl.is_none()
            && self.triglycerides.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(HealthInput::default().is_empty());
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let input = HealthInput {
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).expect("Should serialize");
        assert!(json.contains("height_cm"));
        assert!(!json.contains("glucose"));
    }
}
