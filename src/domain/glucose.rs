//! Blood glucose classifier (ADA categories).
//!
//! Interpretation is only defined relative to a measurement context, so each
//! context carries its own threshold table and an absent context means the
//! reading is not evaluated. Hypoglycemia is flagged independently of the
//! diabetic-scale category.

use super::bands::{band, lookup, Band};
use super::input::{GlucoseContext, HealthInput};
use super::severity::{Category, Flag, HealthDomain, Severity};

/// Glucose below this is hypoglycemia in any context (mg/dL).
pub const HYPOGLYCEMIA_THRESHOLD: f64 = 70.0;

/// Glucose below this is severe hypoglycemia in any context (mg/dL).
pub const SEVERE_HYPOGLYCEMIA_THRESHOLD: f64 = 54.0;

const FASTING: [Band; 5] = [
    band(54.0, "Severe hypoglycemia", Severity::Critical),
    band(70.0, "Hypoglycemia", Severity::High),
    band(100.0, "Normal fasting", Severity::Normal),
    band(126.0, "Impaired fasting (prediabetes)", Severity::Borderline),
    band(f64::INFINITY, "Diabetes-range fasting", Severity::High),
];

const POST_MEAL: [Band; 5] = [
    band(54.0, "Severe hypoglycemia", Severity::Critical),
    band(70.0, "Hypoglycemia", Severity::High),
    band(140.0, "Normal post-meal", Severity::Normal),
    band(200.0, "Impaired post-meal (prediabetes)", Severity::Borderline),
    band(f64::INFINITY, "Diabetes-range post-meal", Severity::High),
];

const RANDOM: [Band; 5] = [
    band(54.0, "Severe hypoglycemia", Severity::Critical),
    band(70.0, "Hypoglycemia", Severity::High),
    band(140.0, "Normal", Severity::Normal),
    band(200.0, "Elevated - confirm with fasting test", Severity::Borderline),
    band(f64::INFINITY, "Diabetes likely", Severity::High),
];

fn table_for(context: GlucoseContext) -> &'static [Band] {
    match context {
        GlucoseContext::Fasting => &FASTING,
        GlucoseContext::PostMeal => &POST_MEAL,
        GlucoseContext::Random => &RANDOM,
    }
}

/// Classify a glucose reading within its context.
///
/// Returns the category plus hypoglycemia flags, or `None` when the reading
/// or its context is absent.
#[must_use]
pub fn classify(input: &HealthInput) -> Option<(Category, Vec<Flag>)> {
    let glucose = input.glucose?;
    let context = input.glucose_context?;

    let b = lookup(table_for(context), glucose);
    let category = Category::new(HealthDomain::Glucose, glucose, b.label, b.severity);

    let mut flags = Vec::new();
    if glucose < SEVERE_HYPOGLYCEMIA_THRESHOLD {
        flags.push(Flag::SevereHypoglycemia);
    } else if glucose < HYPOGLYCEMIA_THRESHOLD {
        flags.push(Flag::Hypoglycemia);
    }

    Some((category, flags))
}
