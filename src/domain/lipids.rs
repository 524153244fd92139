//! Lipid panel classifier (NIH/ATP III categories).
//!
//! Each component has its own threshold table. HDL is direction-inverted
//! ("higher is better"): its severity assignment lives inside its own table,
//! so the worst-of-four aggregation never mistakes a protective high HDL for
//! a risk the way a high LDL is.

use super::bands::{band, lookup, Band};
use super::input::HealthInput;
use super::severity::{Category, HealthDomain, Severity};

const TOTAL: [Band; 3] = [
    band(200.0, "Total cholesterol desirable", Severity::Normal),
    band(240.0, "Total cholesterol borderline high", Severity::Borderline),
    band(f64::INFINITY, "Total cholesterol high", Severity::High),
];

const LDL: [Band; 5] = [
    band(100.0, "LDL optimal", Severity::Normal),
    band(130.0, "LDL near optimal", Severity::Normal),
    band(160.0, "LDL borderline high", Severity::Borderline),
    band(190.0, "LDL high", Severity::High),
    band(f64::INFINITY, "LDL very high", Severity::Critical),
];

/// Inverted scale: low values carry the risk.
const HDL: [Band; 3] = [
    band(40.0, "HDL low", Severity::High),
    band(60.0, "HDL acceptable", Severity::Normal),
    band(f64::INFINITY, "HDL protective", Severity::Normal),
];

const TRIGLYCERIDES: [Band; 4] = [
    band(150.0, "Triglycerides normal", Severity::Normal),
    band(200.0, "Triglycerides borderline high", Severity::Borderline),
    band(500.0, "Triglycerides high", Severity::High),
    band(f64::INFINITY, "Triglycerides very high", Severity::Critical),
];

fn component(table: &[Band], value: Option<f64>) -> Option<Category> {
    let value = value?;
    let b = lookup(table, value);
    Some(Category::new(HealthDomain::Lipids, value, b.label, b.severity))
}

/// Evaluate every present lipid component.
///
/// Returns the per-component categories plus the aggregate: the worst
/// severity among the measured components (first-listed wins ties, in the
/// order total, LDL, HDL, triglycerides). Empty/`None` when nothing was
/// measured.
#[must_use]
pub fn classify(input: &HealthInput) -> (Vec<Category>, Option<Category>) {
    let components: Vec<Category> = [
        component(&TOTAL, input.total_cholesterol),
        component(&LDL, input.ldl),
        component(&HDL, input.hdl),
        component(&TRIGLYCERIDES, input.triglycerides),
    ]
    .into_iter()
    .flatten()
    .collect();

    // Strictly-greater keeps the first-listed component on severity ties.
    let mut worst: Option<&Category> = None;
    for c in &components {
        if worst.map_or(true, |w| c.severity > w.severity) {
            worst = Some(c);
        }
    }

    let aggregate = worst.map(|worst| {
        let label = if worst.severity == Severity::Normal {
            "All components within desirable ranges".to_string()
        } else {
            worst.label.clone()
        };
        Category::new(HealthDomain::Lipids, worst.value, label, worst.severity)
    });

    (components, aggregate)
}
