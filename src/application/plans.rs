//! Diet and exercise plan selection.
//!
//! Plans are looked up in ordered decision tables keyed by the combination
//! of active categories. The first matching rule wins; rule order encodes
//! the fixed priority cardiometabolic > hematologic > anthropometric, and a
//! wildcard catch-all keeps selection total.

use crate::domain::{ClassifierResult, Flag, HealthDomain, Severity};

/// Weight class derived from the BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeightClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Glycemia class derived from the glucose category and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GlycemiaClass {
    Hypoglycemic,
    Normal,
    Prediabetic,
    Diabetic,
}

/// Aggregate lipid risk class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LipidRisk {
    Normal,
    Borderline,
    Elevated,
}

/// Blood pressure class derived from the BP category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BpClass {
    Normal,
    Elevated,
    Hypertensive,
    Crisis,
}

/// The active-category combination the decision tables are keyed by.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PlanContext {
    pub weight: Option<WeightClass>,
    pub glycemia: Option<GlycemiaClass>,
    pub lipids: Option<LipidRisk>,
    pub bp: Option<BpClass>,
    pub anemia: bool,
}

impl PlanContext {
    /// Derive the plan-selection keys from classifier results.
    pub(crate) fn from_results(results: &[ClassifierResult]) -> Self {
        let mut ctx = Self::default();

        for result in results {
            match result.domain {
                HealthDomain::Bmi => {
                    ctx.weight = result.category.as_ref().map(|c| match c.label.as_str() {
                        "Underweight" => WeightClass::Underweight,
                        "Normal weight" => WeightClass::Normal,
                        "Overweight" => WeightClass::Overweight,
                        _ => WeightClass::Obese,
                    });
                }
                HealthDomain::BloodPressure => {
                    ctx.bp = result.category.as_ref().map(|c| match c.severity {
                        Severity::Normal => BpClass::Normal,
                        Severity::Borderline => BpClass::Elevated,
                        Severity::High => BpClass::Hypertensive,
                        Severity::Critical => BpClass::Crisis,
                    });
                }
                HealthDomain::Glucose => {
                    let hypoglycemic = result.flags.iter().any(Flag::is_emergency);
                    ctx.glycemia = result.category.as_ref().map(|c| {
                        if hypoglycemic {
                            GlycemiaClass::Hypoglycemic
                        } else {
                            match c.severity {
                                Severity::Normal => GlycemiaClass::Normal,
                                Severity::Borderline => GlycemiaClass::Prediabetic,
                                Severity::High | Severity::Critical => GlycemiaClass::Diabetic,
                            }
                        }
                    });
                }
                HealthDomain::Cbc => {
                    ctx.anemia = result.flags.iter().any(|f| {
                        matches!(
                            f,
                            Flag::MicrocyticAnemia
                                | Flag::NormocyticAnemia
                                | Flag::MacrocyticAnemia
                                | Flag::UnspecifiedAnemia
                        )
                    });
                }
                HealthDomain::Lipids => {
                    ctx.lipids = result.category.as_ref().map(|c| match c.severity {
                        Severity::Normal => LipidRisk::Normal,
                        Severity::Borderline => LipidRisk::Borderline,
                        Severity::High | Severity::Critical => LipidRisk::Elevated,
                    });
                }
            }
        }

        ctx
    }
}

fn want<T: PartialEq + Copy>(required: Option<T>, actual: Option<T>) -> bool {
    required.map_or(true, |r| actual == Some(r))
}

struct DietRule {
    weight: Option<WeightClass>,
    glycemia: Option<GlycemiaClass>,
    lipids: Option<LipidRisk>,
    anemia: bool,
    plan: &'static str,
}

/// Ordered diet table: cardiometabolic combinations, then hematologic, then
/// anthropometric, then the maintenance catch-all.
const DIET_RULES: &[DietRule] = &[
    DietRule {
        weight: Some(WeightClass::Obese),
        glycemia: Some(GlycemiaClass::Diabetic),
        lipids: None,
        anemia: false,
        plan: "Structured weight-loss plan with a 500-750 kcal/day deficit built from \
               low-GI meals: spread carbohydrates evenly, prioritize non-starchy \
               vegetables and lean protein, and arrange HbA1c plus fasting glucose \
               testing with dietitian referral.",
    },
    DietRule {
        weight: None,
        glycemia: Some(GlycemiaClass::Diabetic),
        lipids: Some(LipidRisk::Elevated),
        anemia: false,
        plan: "Combined glycemic and lipid plan: low-GI carbohydrates with portion \
               control, saturated fat below 7% of calories, no trans fats, soluble \
               fiber (oats, legumes) daily and fatty fish twice a week; recheck \
               HbA1c and a fasting lipid panel.",
    },
    DietRule {
        weight: None,
        glycemia: Some(GlycemiaClass::Diabetic),
        lipids: None,
        anemia: false,
        plan: "Low-GI meals with carbohydrate counting: spread carbs evenly across \
               the day, prioritize non-starchy vegetables and lean protein with each \
               meal, and check HbA1c and fasting glucose.",
    },
    DietRule {
        weight: None,
        glycemia: Some(GlycemiaClass::Hypoglycemic),
        lipids: None,
        anemia: false,
        plan: "Regular meals every 3-4 hours with a protein-plus-complex-carb \
               snack between them; keep fast-acting carbohydrate on hand for \
               symptoms and review medications with a clinician urgently.",
    },
    DietRule {
        weight: None,
        glycemia: Some(GlycemiaClass::Prediabetic),
        lipids: None,
        anemia: false,
        plan: "Prediabetes plan: low-GI carbohydrates, fiber 25-35 g/day, no \
               sugar-sweetened beverages, modest calorie deficit if weight allows; \
               repeat fasting glucose and consider HbA1c.",
    },
    DietRule {
        weight: None,
        glycemia: None,
        lipids: Some(LipidRisk::Elevated),
        anemia: false,
        plan: "Lipid-lowering plan: saturated fat below 7% of calories, no trans \
               fats, soluble fiber (oats, legumes) daily, fatty fish twice a week, \
               limit alcohol and added sugar; repeat a fasting lipid panel.",
    },
    DietRule {
        weight: None,
        glycemia: None,
        lipids: Some(LipidRisk::Borderline),
        anemia: false,
        plan: "Borderline lipids: shift toward unsaturated fats, add soluble fiber \
               and plant sterols, and recheck a fasting lipid panel in 3-6 months.",
    },
    DietRule {
        weight: None,
        glycemia: None,
        lipids: None,
        anemia: true,
        plan: "Iron- and nutrient-dense meals: red meat or legumes with vitamin C \
               sources, leafy greens and fortified grains; arrange iron studies \
               (ferritin) before supplementing.",
    },
    DietRule {
        weight: Some(WeightClass::Obese),
        glycemia: None,
        lipids: None,
        anemia: false,
        plan: "Structured weight-loss plan: 500-750 kcal/day deficit targeting \
               0.5-1 kg/week, high-protein meals (at least 1.0 g/kg), low-GI carbs \
               and 25-35 g fiber daily; consider dietitian referral.",
    },
    DietRule {
        weight: Some(WeightClass::Overweight),
        glycemia: None,
        lipids: None,
        anemia: false,
        plan: "Modest calorie deficit of roughly 300-500 kcal/day with high-protein \
               meals, low-GI carbohydrates, more fiber and no sugar-sweetened \
               beverages.",
    },
    DietRule {
        weight: Some(WeightClass::Underweight),
        glycemia: None,
        lipids: None,
        anemia: false,
        plan: "Increase intake by 300-500 kcal/day with nutrient-dense foods across \
               3 meals and 2 snacks; protein 1.2-1.6 g/kg to support lean mass \
               gain.",
    },
    DietRule {
        weight: None,
        glycemia: None,
        lipids: None,
        anemia: false,
        plan: "Maintain a balanced plate: half vegetables, a quarter lean protein, \
               a quarter whole grains, with nuts, yogurt and fruit as snacks.",
    },
];

struct ExerciseRule {
    bp: Option<BpClass>,
    weight: Option<WeightClass>,
    glycemia: Option<GlycemiaClass>,
    anemia: bool,
    plan: &'static str,
}

/// Ordered exercise table. A hypertensive crisis short-circuits everything.
const EXERCISE_RULES: &[ExerciseRule] = &[
    ExerciseRule {
        bp: Some(BpClass::Crisis),
        weight: None,
        glycemia: None,
        anemia: false,
        plan: "Do not start or continue exercise: blood pressure is at crisis \
               level. Seek urgent medical review first.",
    },
    ExerciseRule {
        bp: Some(BpClass::Hypertensive),
        weight: None,
        glycemia: None,
        anemia: false,
        plan: "Moderate aerobic emphasis: build toward 150-300 min/week of \
               walking, cycling or swimming; avoid breath-holding and maximal \
               lifts until blood pressure is controlled, and recheck readings \
               after 4 weeks.",
    },
    ExerciseRule {
        bp: None,
        weight: None,
        glycemia: Some(GlycemiaClass::Diabetic),
        anemia: false,
        plan: "Aerobic target of 150-300 min/week plus 10-15 minute post-meal \
               walks to blunt glucose spikes; monitor glucose around sessions if \
               on glucose-lowering medication.",
    },
    ExerciseRule {
        bp: None,
        weight: None,
        glycemia: Some(GlycemiaClass::Hypoglycemic),
        anemia: false,
        plan: "Defer vigorous exercise until glucose is stable; carry fast-acting \
               carbohydrate during any activity and seek clinical review of the \
               low reading.",
    },
    ExerciseRule {
        bp: None,
        weight: None,
        glycemia: None,
        anemia: true,
        plan: "Keep intensity light-to-moderate while anemia is evaluated: short \
               walks and mobility work, stopping on dizziness or unusual \
               breathlessness.",
    },
    ExerciseRule {
        bp: None,
        weight: Some(WeightClass::Obese),
        glycemia: None,
        anemia: false,
        plan: "Start with low-impact cardio (walking, cycling, swimming) 3x/week \
               for 20-30 minutes, increasing duration before intensity, then add \
               2 weekly strength sessions.",
    },
    ExerciseRule {
        bp: None,
        weight: Some(WeightClass::Overweight),
        glycemia: None,
        anemia: false,
        plan: "Low-impact cardio 3x/week for 20-30 minutes, progressing duration \
               first, plus 2-3 full-body strength sessions per week.",
    },
    ExerciseRule {
        bp: None,
        weight: Some(WeightClass::Underweight),
        glycemia: None,
        anemia: false,
        plan: "Strength emphasis: 2-3 full-body sessions per week with progressive \
               overload, keeping aerobic volume moderate while weight is \
               regained.",
    },
    ExerciseRule {
        bp: None,
        weight: None,
        glycemia: None,
        anemia: false,
        plan: "Aerobic target of 150-300 min/week moderate (or 75-150 vigorous) \
               plus 2-3 weekly full-body strength sessions with progressive \
               overload.",
    },
];

/// Select the diet plan for the active-category combination.
pub(crate) fn select_diet(ctx: &PlanContext) -> &'static str {
    DIET_RULES
        .iter()
        .find(|rule| {
            want(rule.weight, ctx.weight)
                && want(rule.glycemia, ctx.glycemia)
                && want(rule.lipids, ctx.lipids)
                && (!rule.anemia || ctx.anemia)
        })
        .map(|rule| rule.plan)
        .unwrap_or(DIET_RULES[DIET_RULES.len() - 1].plan)
}

/// Select the exercise plan for the active-category combination.
pub(crate) fn select_exercise(ctx: &PlanContext) -> &'static str {
    EXERCISE_RULES
        .iter()
        .find(|rule| {
            want(rule.bp, ctx.bp)
                && want(rule.weight, ctx.weight)
                && want(rule.glycemia, ctx.glycemia)
                && (!rule.anemia || ctx.anemia)
        })
        .map(|rule| rule.plan)
        .unwrap_or(EXERCISE_RULES[EXERCISE_RULES.len() - 1].plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obese_diabetic_gets_combined_plan() {
        let ctx = PlanContext {
            weight: Some(WeightClass::Obese),
            glycemia: Some(GlycemiaClass::Diabetic),
            ..Default::default()
        };
        let plan = select_diet(&ctx);
        assert!(plan.contains("weight-loss"));
        assert!(plan.contains("low-GI"));
        // Not the generic obesity plan
        assert_ne!(
            plan,
            select_diet(&PlanContext {
                weight: Some(WeightClass::Obese),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_crisis_short_circuits_exercise() {
        let ctx = PlanContext {
            bp: Some(BpClass::Crisis),
            weight: Some(WeightClass::Obese),
            glycemia: Some(GlycemiaClass::Diabetic),
            ..Default::default()
        };
        assert!(select_exercise(&ctx).contains("urgent medical review"));
    }

    #[test]
    fn test_cardiometabolic_beats_hematologic_and_anthropometric() {
        // Diabetic + anemic + underweight: the glycemic rule is ordered first.
        let ctx = PlanContext {
            weight: Some(WeightClass::Underweight),
            glycemia: Some(GlycemiaClass::Diabetic),
            anemia: true,
            ..Default::default()
        };
        assert!(select_diet(&ctx).contains("carbohydrate counting"));

        // Anemic + underweight without a cardiometabolic finding: hematologic
        // wins over anthropometric.
        let ctx = PlanContext {
            weight: Some(WeightClass::Underweight),
            anemia: true,
            ..Default::default()
        };
        assert!(select_diet(&ctx).contains("iron studies"));
    }

    #[test]
    fn test_catch_all_when_nothing_evaluated() {
        let ctx = PlanContext::default();
        assert!(select_diet(&ctx).contains("balanced plate"));
        assert!(select_exercise(&ctx).contains("150-300 min/week"));
    }
}
