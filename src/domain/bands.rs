//! Ordered threshold tables.
//!
//! Every classifier expresses its guideline cutoffs as an ascending sequence
//! of bands and resolves a value with a single ordered scan. A band covers
//! `[previous upper, upper)`: a value sitting exactly on a cutoff falls into
//! the next band, i.e. the higher category (closed-upper convention). Tables
//! end with an `f64::INFINITY` band so the scan is total.

use super::severity::Severity;

/// One row of a threshold table: values strictly below `upper` that were not
/// claimed by an earlier band get this label and severity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Band {
    pub upper: f64,
    pub label: &'static str,
    pub severity: Severity,
}

pub(crate) const fn band(upper: f64, label: &'static str, severity: Severity) -> Band {
    Band {
        upper,
        label,
        severity,
    }
}

/// Resolve `value` against an ordered table.
pub(crate) fn lookup<'t>(table: &'t [Band], value: f64) -> &'t Band {
    table
        .iter()
        .find(|b| value < b.upper)
        .unwrap_or_else(|| &table[table.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [Band; 3] = [
        band(10.0, "low", Severity::Borderline),
        band(20.0, "mid", Severity::Normal),
        band(f64::INFINITY, "high", Severity::High),
    ];

    #[test]
    fn test_lookup_within_bands() {
        assert_eq!(lookup(&TABLE, 5.0).label, "low");
        assert_eq!(lookup(&TABLE, 15.0).label, "mid");
        assert_eq!(lookup(&TABLE, 25.0).label, "high");
    }

    #[test]
    fn test_boundary_goes_to_higher_band() {
        assert_eq!(lookup(&TABLE, 10.0).label, "mid");
        assert_eq!(lookup(&TABLE, 20.0).label, "high");
    }
}
