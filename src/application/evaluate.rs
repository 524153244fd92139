//! The evaluation pipeline: validate, classify, aggregate.

use crate::domain::{
    blood_pressure, bmi, cbc, glucose, lipids, validate, ClassifierResult, Flag, HealthDomain,
    HealthInput, HealthReport, Severity,
};

use super::plans::{self, PlanContext};

/// Evaluate a measurement snapshot into a full health report.
///
/// This is the engine's sole entry point. It is total for well-typed input:
/// classifiers whose fields are absent report "not evaluated", out-of-range
/// values are clamped and surfaced as warnings, and no domain failure stops
/// the others. The result is a pure function of the input: the same
/// snapshot always produces the same report.
#[must_use]
pub fn evaluate(input: &HealthInput) -> HealthReport {
    let (validated, warnings) = validate::validate(input);

    let bmi_category = bmi::classify(&validated);
    let bp_category = blood_pressure::classify(&validated);
    let glucose_result = glucose::classify(&validated);
    let (cbc_components, cbc_flags) = cbc::classify(&validated);
    let (lipid_components, lipid_aggregate) = lipids::classify(&validated);

    let (glucose_category, glucose_flags) = match glucose_result {
        Some((category, flags)) => (Some(category), flags),
        None => (None, Vec::new()),
    };

    let results = vec![
        ClassifierResult {
            domain: HealthDomain::Bmi,
            category: bmi_category,
            components: Vec::new(),
            flags: Vec::new(),
        },
        ClassifierResult {
            domain: HealthDomain::BloodPressure,
            category: bp_category,
            components: Vec::new(),
            flags: Vec::new(),
        },
        ClassifierResult {
            domain: HealthDomain::Glucose,
            category: glucose_category,
            components: Vec::new(),
            flags: glucose_flags,
        },
        ClassifierResult {
            domain: HealthDomain::Cbc,
            category: None,
            components: cbc_components,
            flags: cbc_flags,
        },
        ClassifierResult {
            domain: HealthDomain::Lipids,
            category: lipid_aggregate,
            components: lipid_components,
            flags: Vec::new(),
        },
    ];

    let emergency = results
        .iter()
        .any(|r| r.worst_severity() == Some(Severity::Critical))
        || results
            .iter()
            .flat_map(|r| r.flags.iter())
            .any(Flag::is_emergency);

    let ctx = PlanContext::from_results(&results);
    let diet_plan = plans::select_diet(&ctx).to_string();
    let exercise_plan = plans::select_exercise(&ctx).to_string();

    let summary = build_summary(&validated, &results);

    tracing::debug!(
        emergency,
        warnings = warnings.len(),
        "evaluation complete"
    );

    HealthReport {
        results,
        emergency,
        diet_plan,
        exercise_plan,
        summary,
        warnings,
    }
}

/// One finding line per domain, in the fixed order BMI, BP, glucose, CBC,
/// lipids, independent of severity.
fn build_summary(input: &HealthInput, results: &[ClassifierResult]) -> Vec<String> {
    HealthDomain::ALL
        .iter()
        .map(|domain| {
            let result = results.iter().find(|r| r.domain == *domain);
            match result {
                Some(r) if r.is_evaluated() => summary_line(input, r),
                _ => format!("{domain}: not evaluated"),
            }
        })
        .collect()
}

fn summary_line(input: &HealthInput, result: &ClassifierResult) -> String {
    match result.domain {
        HealthDomain::Bmi => match &result.category {
            Some(c) => format!("BMI {:.1} - {}", c.value, c.label),
            None => "BMI: not evaluated".to_string(),
        },
        HealthDomain::BloodPressure => {
            match (&result.category, input.systolic, input.diastolic) {
                (Some(c), Some(sys), Some(dia)) => {
                    format!("Blood pressure {sys:.0}/{dia:.0} mmHg - {}", c.label)
                }
                _ => "Blood pressure: not evaluated".to_string(),
            }
        }
        HealthDomain::Glucose => match (&result.category, input.glucose_context) {
            (Some(c), Some(context)) => {
                format!("Glucose {:.0} mg/dL ({context}) - {}", c.value, c.label)
            }
            _ => "Glucose: not evaluated".to_string(),
        },
        HealthDomain::Cbc => {
            let abnormal: Vec<&str> = result
                .components
                .iter()
                .filter(|c| c.severity > Severity::Normal)
                .map(|c| c.label.as_str())
                .collect();

            if abnormal.is_empty() && result.flags.is_empty() {
                "CBC within reference ranges".to_string()
            } else {
                let mut line = format!("CBC: {}", abnormal.join(", "));
                if !result.flags.is_empty() {
                    let flags: Vec<&str> =
                        result.flags.iter().map(|f| f.description()).collect();
                    line.push_str("; ");
                    line.push_str(&flags.join("; "));
                }
                line
            }
        }
        HealthDomain::Lipids => match &result.category {
            Some(c) => format!("Lipids: {}", c.label),
            None => "Lipids: not evaluated".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GlucoseContext, Sex};

    fn full_input() -> HealthInput {
        HealthInput {
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            age_years: Some(30.0),
            sex: Some(Sex::Male),
            systolic: Some(118.0),
            diastolic: Some(76.0),
            glucose: Some(92.0),
            glucose_context: Some(GlucoseContext::Fasting),
            hemoglobin: Some(14.5),
            wbc: Some(6.0),
            rbc: Some(5.0),
            platelets: Some(250.0),
            mcv: Some(90.0),
            total_cholesterol: Some(180.0),
            ldl: Some(95.0),
            hdl: Some(55.0),
            triglycerides: Some(120.0),
        }
    }

    #[test]
    fn test_determinism() {
        let input = full_input();
        assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn test_healthy_input_is_calm() {
        let report = evaluate(&full_input());
        assert!(!report.emergency);
        assert_eq!(report.worst_severity(), Severity::Normal);
        assert!(report.warnings.is_empty());
        assert_eq!(report.summary.len(), 5);
    }

    #[test]
    fn test_missing_fields_degrade_gracefully() {
        let input = HealthInput {
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            ..Default::default()
        };
        let report = evaluate(&input);

        assert!(report.result(HealthDomain::Bmi).is_some_and(ClassifierResult::is_evaluated));
        for domain in [
            HealthDomain::BloodPressure,
            HealthDomain::Glucose,
            HealthDomain::Cbc,
            HealthDomain::Lipids,
        ] {
            let result = report.result(domain).expect("Should be present");
            assert!(!result.is_evaluated(), "{domain} should be not evaluated");
        }
        assert!(!report.emergency);
        assert!(report
            .summary
            .iter()
            .filter(|line| line.contains("not evaluated"))
            .count() >= 3);
    }

    #[test]
    fn test_bp_crisis_sets_emergency() {
        let input = HealthInput {
            systolic: Some(185.0),
            diastolic: Some(76.0),
            ..Default::default()
        };
        let report = evaluate(&input);
        assert!(report.emergency);
    }

    #[test]
    fn test_hypoglycemia_sets_emergency() {
        let input = HealthInput {
            glucose: Some(60.0),
            glucose_context: Some(GlucoseContext::Fasting),
            ..Default::default()
        };
        let report = evaluate(&input);
        assert!(report.emergency);
        assert!(report.flags().any(|f| f == Flag::Hypoglycemia));
    }

    #[test]
    fn test_warnings_stay_out_of_summary() {
        let input = HealthInput {
            height_cm: Some(175.0),
            weight_kg: Some(900.0),
            ..Default::default()
        };
        let report = evaluate(&input);

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, "weight_kg");
        // The clamped value (400 kg) still classifies.
        let bmi = report
            .result(HealthDomain::Bmi)
            .and_then(|r| r.category.as_ref())
            .expect("Should classify");
        assert_eq!(bmi.label, "Obesity class III");
        assert!(report.summary.iter().all(|line| !line.contains("clamped")));
    }

    #[test]
    fn test_summary_order_is_fixed() {
        let report = evaluate(&full_input());
        assert!(report.summary[0].starts_with("BMI"));
        assert!(report.summary[1].starts_with("Blood pressure"));
        assert!(report.summary[2].starts_with("Glucose"));
        assert!(report.summary[3].starts_with("CBC"));
        assert!(report.summary[4].starts_with("Lipids"));
    }

    #[test]
    fn test_plans_follow_categories() {
        let obese_diabetic = HealthInput {
            height_cm: Some(170.0),
            weight_kg: Some(95.0),
            glucose: Some(150.0),
            glucose_context: Some(GlucoseContext::Fasting),
            ..Default::default()
        };
        let report = evaluate(&obese_diabetic);
        assert!(report.diet_plan.contains("weight-loss"));

        let healthy = evaluate(&full_input());
        assert!(healthy.diet_plan.contains("balanced plate"));
    }

    #[test]
    fn test_report_serializes() {
        let report = evaluate(&full_input());
        let json = serde_json::to_string(&report).expect("Should serialize");
        let back: HealthReport = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(report, back);
    }
}
