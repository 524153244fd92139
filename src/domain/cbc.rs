//! Complete blood count classifier.
//!
//! The five parameters are evaluated independently against adult reference
//! ranges (sex-specific for hemoglobin and RBC) and are never combined into
//! a single score. Cross-parameter inference is limited to the anemia
//! subtype table below: low hemoglobin is subtyped by where MCV falls.

use super::input::{HealthInput, Sex};
use super::severity::{Category, Flag, HealthDomain, Severity};

/// Inclusive reference range.
#[derive(Debug, Clone, Copy)]
struct RefRange {
    low: f64,
    high: f64,
}

/// Hemoglobin g/dL. Unknown sex gets the union of both ranges so absence of
/// sex never manufactures an abnormal result.
fn hemoglobin_range(sex: Option<Sex>) -> RefRange {
    match sex {
        Some(Sex::Male) => RefRange { low: 13.5, high: 17.5 },
        Some(Sex::Female) => RefRange { low: 12.0, high: 15.5 },
        None => RefRange { low: 12.0, high: 17.5 },
    }
}

/// RBC 10^6/uL.
fn rbc_range(sex: Option<Sex>) -> RefRange {
    match sex {
        Some(Sex::Male) => RefRange { low: 4.5, high: 5.9 },
        Some(Sex::Female) => RefRange { low: 4.1, high: 5.1 },
        None => RefRange { low: 4.1, high: 5.9 },
    }
}

const WBC_RANGE: RefRange = RefRange { low: 4.0, high: 11.0 };
const PLATELET_RANGE: RefRange = RefRange { low: 150.0, high: 450.0 };
const MCV_RANGE: RefRange = RefRange { low: 80.0, high: 100.0 };

/// Breaches below these are critical and set the emergency flag.
const SEVERE_LOW_HEMOGLOBIN: f64 = 8.0;
const SEVERE_LOW_WBC: f64 = 2.0;
const SEVERE_LOW_PLATELETS: f64 = 50.0;

/// Where an MCV value falls relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum McvClass {
    Low,
    Normal,
    High,
    NotMeasured,
}

fn mcv_class(mcv: Option<f64>) -> McvClass {
    match mcv {
        None => McvClass::NotMeasured,
        Some(v) if v < MCV_RANGE.low => McvClass::Low,
        Some(v) if v > MCV_RANGE.high => McvClass::High,
        Some(_) => McvClass::Normal,
    }
}

/// Anemia subtype table: applied when hemoglobin is below its reference
/// range, keyed by the MCV class. This is the only cross-parameter rule.
const ANEMIA_RULES: [(McvClass, Flag); 4] = [
    (McvClass::Low, Flag::MicrocyticAnemia),
    (McvClass::Normal, Flag::NormocyticAnemia),
    (McvClass::High, Flag::MacrocyticAnemia),
    (McvClass::NotMeasured, Flag::UnspecifiedAnemia),
];

fn anemia_flag(mcv: Option<f64>) -> Flag {
    let class = mcv_class(mcv);
    ANEMIA_RULES
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, flag)| *flag)
        .unwrap_or(Flag::UnspecifiedAnemia)
}

fn hemoglobin_category(value: f64, sex: Option<Sex>) -> Category {
    let range = hemoglobin_range(sex);
    let (label, severity) = if value < SEVERE_LOW_HEMOGLOBIN {
        ("Hemoglobin severely low", Severity::Critical)
    } else if value < range.low {
        ("Hemoglobin low", Severity::High)
    } else if value > range.high {
        ("Hemoglobin high", Severity::Borderline)
    } else {
        ("Hemoglobin normal", Severity::Normal)
    };
    Category::new(HealthDomain::Cbc, value, label, severity)
}

fn wbc_category(value: f64) -> Category {
    let (label, severity) = if value < SEVERE_LOW_WBC {
        ("WBC severely low", Severity::Critical)
    } else if value < WBC_RANGE.low {
        ("WBC low", Severity::High)
    } else if value > WBC_RANGE.high {
        ("WBC elevated", Severity::Borderline)
    } else {
        ("WBC normal", Severity::Normal)
    };
    Category::new(HealthDomain::Cbc, value, label, severity)
}

fn rbc_category(value: f64, sex: Option<Sex>) -> Category {
    let range = rbc_range(sex);
    let (label, severity) = if value < range.low {
        ("RBC low", Severity::Borderline)
    } else if value > range.high {
        ("RBC high", Severity::Borderline)
    } else {
        ("RBC normal", Severity::Normal)
    };
    Category::new(HealthDomain::Cbc, value, label, severity)
}

fn platelet_category(value: f64) -> Category {
    let (label, severity) = if value < SEVERE_LOW_PLATELETS {
        ("Platelets severely low", Severity::Critical)
    } else if value < PLATELET_RANGE.low {
        ("Platelets low", Severity::High)
    } else if value > PLATELET_RANGE.high {
        ("Platelets elevated", Severity::Borderline)
    } else {
        ("Platelets normal", Severity::Normal)
    };
    Category::new(HealthDomain::Cbc, value, label, severity)
}

fn mcv_category(value: f64) -> Category {
    let (label, severity) = match mcv_class(Some(value)) {
        McvClass::Low => ("MCV low (microcytic)", Severity::Borderline),
        McvClass::High => ("MCV high (macrocytic)", Severity::Borderline),
        _ => ("MCV normal", Severity::Normal),
    };
    Category::new(HealthDomain::Cbc, value, label, severity)
}

/// Evaluate every present CBC parameter.
///
/// Returns one category per measured parameter (empty when nothing was
/// measured) plus the composite flags from the anemia and count rules.
#[must_use]
pub fn classify(input: &HealthInput) -> (Vec<Category>, Vec<Flag>) {
    let mut components = Vec::new();
    let mut flags = Vec::new();

    if let Some(hb) = input.hemoglobin {
        let category = hemoglobin_category(hb, input.sex);
        if hb < hemoglobin_range(input.sex).low {
            flags.push(anemia_flag(input.mcv));
        }
        components.push(category);
    }

    if let Some(wbc) = input.wbc {
        let category = wbc_category(wbc);
        if wbc < WBC_RANGE.low {
            flags.push(Flag::InfectionSusceptibility);
        } else if wbc > WBC_RANGE.high {
            flags.push(Flag::InfectionOrInflammation);
        }
        components.push(category);
    }

    if let Some(rbc) = input.rbc {
        components.push(rbc_category(rbc, input.sex));
    }

    if let Some(platelets) = input.platelets {
        let category = platelet_category(platelets);
        if platelets < PLATELET_RANGE.low {
            flags.push(Flag::BleedingRisk);
        } else if platelets > PLATELET_RANGE.high {
            flags.push(Flag::Thrombocytosis);
        }
        components.push(category);
    }

    if let Some(mcv) = input.mcv {
        components.push(mcv_category(mcv));
    }

    (components, flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microcytic_anemia_composite() {
        let input = HealthInput {
            hemoglobin: Some(9.0),
            mcv: Some(70.0),
            sex: Some(Sex::Female),
            ..Default::default()
        };
        let (components, flags) = classify(&input);
        assert_eq!(components.len(), 2);
        assert!(flags.contains(&Flag::MicrocyticAnemia));
        assert!(!flags.contains(&Flag::NormocyticAnemia));
    }

    #[test]
    fn test_normocytic_anemia_composite() {
        let input = HealthInput {
            hemoglobin: Some(9.0),
            mcv: Some(95.0),
            sex: Some(Sex::Female),
            ..Default::default()
        };
        let (_, flags) = classify(&input);
        assert!(flags.contains(&Flag::NormocyticAnemia));
        assert!(!flags.contains(&Flag::MicrocyticAnemia));
    }

    #[test]
    fn test_macrocytic_and_unspecified_anemia() {
        let macrocytic = HealthInput {
            hemoglobin: Some(9.0),
            mcv: Some(110.0),
            ..Default::default()
        };
        assert!(classify(&macrocytic).1.contains(&Flag::MacrocyticAnemia));

        let no_mcv = HealthInput {
            hemoglobin: Some(9.0),
            ..Default::default()
        };
        assert!(classify(&no_mcv).1.contains(&Flag::UnspecifiedAnemia));
    }

    #[test]
    fn test_sex_specific_hemoglobin_range() {
        let hb = 12.5;
        // Below the male range, inside the female range.
        let male = HealthInput {
            hemoglobin: Some(hb),
            sex: Some(Sex::Male),
            ..Default::default()
        };
        let female = HealthInput {
            hemoglobin: Some(hb),
            sex: Some(Sex::Female),
            ..Default::default()
        };
        assert_eq!(classify(&male).0[0].label, "Hemoglobin low");
        assert_eq!(classify(&female).0[0].label, "Hemoglobin normal");
        // Unknown sex uses the union range: no flag either.
        let unknown = HealthInput {
            hemoglobin: Some(hb),
            ..Default::default()
        };
        assert_eq!(classify(&unknown).0[0].label, "Hemoglobin normal");
    }

    #[test]
    fn test_severe_breaches_are_critical() {
        let input = HealthInput {
            hemoglobin: Some(7.0),
            wbc: Some(1.5),
            platelets: Some(30.0),
            ..Default::default()
        };
        let (components, flags) = classify(&input);
        assert!(components.iter().all(|c| c.severity == Severity::Critical));
        assert!(flags.contains(&Flag::InfectionSusceptibility));
        assert!(flags.contains(&Flag::BleedingRisk));
    }

    #[test]
    fn test_count_flags() {
        let input = HealthInput {
            wbc: Some(13.0),
            platelets: Some(500.0),
            ..Default::default()
        };
        let (_, flags) = classify(&input);
        assert!(flags.contains(&Flag::InfectionOrInflammation));
        assert!(flags.contains(&Flag::Thrombocytosis));
    }

    #[test]
    fn test_nothing_measured_is_empty() {
        let (components, flags) = classify(&HealthInput::default());
        assert!(components.is_empty());
        assert!(flags.is_empty());
    }
}
