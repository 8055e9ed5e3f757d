use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const FULL_SCALE: u64 = 10_000;

/// Minimum attended-to-total ratio a student has to keep.
///
/// Stored in basis points so the arithmetic below stays exact; valid values
/// lie strictly between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    basis_points: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("attendance target must be strictly between 0% and 100%, got {0}")]
    OutOfRange(String),
}

impl Threshold {
    pub const DEFAULT: Threshold = Threshold { basis_points: 7_500 };

    pub fn from_basis_points(basis_points: u32) -> Result<Self, ThresholdError> {
        if basis_points == 0 || u64::from(basis_points) >= FULL_SCALE {
            return Err(ThresholdError::OutOfRange(format!("{basis_points} bp")));
        }
        Ok(Self { basis_points })
    }

    pub fn from_percent(percent: u32) -> Result<Self, ThresholdError> {
        if percent == 0 || percent >= 100 {
            return Err(ThresholdError::OutOfRange(format!("{percent}%")));
        }
        Self::from_basis_points(percent * 100)
    }

    pub fn from_ratio(ratio: f64) -> Result<Self, ThresholdError> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(ThresholdError::OutOfRange(ratio.to_string()));
        }
        Self::from_basis_points((ratio * FULL_SCALE as f64).round() as u32)
    }

    pub fn basis_points(self) -> u32 {
        self.basis_points
    }

    /// Threshold as a whole percentage, rounded up so a percentage that
    /// compares `>=` against it is never actually below the ratio.
    pub fn as_percent(self) -> u32 {
        self.basis_points.div_ceil(100)
    }

    /// `attended / total >= threshold`, evaluated without floating point.
    pub fn is_met_by(self, attended: u32, total: u32) -> bool {
        u64::from(attended) * FULL_SCALE >= u64::from(self.basis_points) * u64::from(total)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.basis_points / 100;
        let frac = self.basis_points % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

/// Raw class counts as entered by a user. Callers validate `attended <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttendanceRecord {
    pub attended: u32,
    pub total: u32,
}

impl AttendanceRecord {
    pub fn new(attended: u32, total: u32) -> Self {
        Self { attended, total }
    }

    pub fn percentage(self) -> u32 {
        percentage(self.attended, self.total)
    }

    pub fn missable(self, threshold: Threshold) -> u32 {
        missable_classes(self.attended, self.total, threshold)
    }

    pub fn to_recover(self, threshold: Threshold) -> u32 {
        classes_to_recover(self.attended, self.total, threshold)
    }
}

/// Attendance percentage rounded half up; `0` when no classes were held.
pub fn percentage(attended: u32, total: u32) -> u32 {
    percentage_u64(u64::from(attended), u64::from(total))
}

/// [`percentage`] over wide counts, such as sums across many subjects.
pub fn percentage_u64(attended: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let attended = u128::from(attended);
    let total = u128::from(total);
    u32::try_from((attended * 200 + total) / (total * 2)).unwrap_or(u32::MAX)
}

/// How many further classes can be skipped while staying at or above
/// `threshold`: `floor(attended / threshold - total)`.
pub fn missable_classes(attended: u32, total: u32, threshold: Threshold) -> u32 {
    if total == 0 || !threshold.is_met_by(attended, total) {
        return 0;
    }
    let bp = u64::from(threshold.basis_points);
    let surplus = u64::from(attended) * FULL_SCALE - bp * u64::from(total);
    saturate(surplus / bp)
}

/// Consecutive classes that must be attended before the ratio reaches
/// `threshold`: `ceil((threshold * total - attended) / (1 - threshold))`.
pub fn classes_to_recover(attended: u32, total: u32, threshold: Threshold) -> u32 {
    if total == 0 || threshold.is_met_by(attended, total) {
        return 0;
    }
    let bp = u64::from(threshold.basis_points);
    let deficit = bp * u64::from(total) - u64::from(attended) * FULL_SCALE;
    saturate(deficit.div_ceil(FULL_SCALE - bp))
}

pub fn missable_classes_default(attended: u32, total: u32) -> u32 {
    missable_classes(attended, total, Threshold::DEFAULT)
}

pub fn classes_to_recover_default(attended: u32, total: u32) -> u32 {
    classes_to_recover(attended, total, Threshold::DEFAULT)
}

/// Report category for a subject percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Poor,
    Good,
    Excellent,
}

impl Standing {
    pub const ALL: [Standing; 3] = [Standing::Poor, Standing::Good, Standing::Excellent];

    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            0..=74 => Standing::Poor,
            75..=89 => Standing::Good,
            _ => Standing::Excellent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Standing::Poor => "Poor (<75%)",
            Standing::Good => "Good (75-90%)",
            Standing::Excellent => "Excellent (>90%)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Standing::Poor => "Poor",
            Standing::Good => "Good",
            Standing::Excellent => "Excellent",
        }
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percentage_of_nothing_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn wide_percentage_handles_summed_counts() {
        let total = u64::from(u32::MAX) * 2;
        assert_eq!(percentage_u64(total / 2, total), 50);
        assert_eq!(percentage_u64(u64::MAX, u64::MAX), 100);
        assert_eq!(percentage_u64(u64::MAX, 1), u32::MAX);
        assert_eq!(percentage_u64(1, 8), percentage(1, 8));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(75, 100), 75);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        // 12.5% and 87.5% sit exactly on the boundary.
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(7, 8), 88);
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(1, 201), 0);
    }

    #[test]
    fn percentage_does_not_panic_on_inverted_counts() {
        assert_eq!(percentage(20, 10), 200);
        assert_eq!(percentage(u32::MAX, 1), u32::MAX);
        assert_eq!(percentage(u32::MAX, u32::MAX), 100);
    }

    #[test]
    fn missable_is_zero_below_threshold() {
        assert_eq!(missable_classes_default(5, 10), 0);
        assert_eq!(missable_classes_default(0, 0), 0);
        assert_eq!(missable_classes_default(74, 100), 0);
    }

    #[test]
    fn missable_matches_closed_form() {
        assert_eq!(missable_classes_default(30, 30), 10);
        assert_eq!(missable_classes_default(75, 100), 0);
        assert_eq!(missable_classes_default(18, 20), 4);
        assert_eq!(missable_classes_default(9, 10), 2);
    }

    #[test]
    fn recover_is_zero_when_compliant() {
        assert_eq!(classes_to_recover_default(18, 20), 0);
        assert_eq!(classes_to_recover_default(75, 100), 0);
        assert_eq!(classes_to_recover_default(0, 0), 0);
    }

    #[test]
    fn recover_reaches_threshold_exactly() {
        assert_eq!(classes_to_recover_default(5, 10), 10);
        assert!(Threshold::DEFAULT.is_met_by(15, 20));
        assert_eq!(classes_to_recover_default(0, 1), 3);
        assert_eq!(classes_to_recover_default(7, 10), 2);
    }

    #[test]
    fn recover_generalises_to_other_thresholds() {
        let sixty = Threshold::from_percent(60).unwrap();
        // (3 + x) / (10 + x) >= 0.6  ->  x >= 7.5
        assert_eq!(classes_to_recover(3, 10, sixty), 8);
        assert!(sixty.is_met_by(11, 18));
        assert!(!sixty.is_met_by(10, 17));

        let ninety = Threshold::from_ratio(0.9).unwrap();
        assert_eq!(missable_classes(10, 10, ninety), 1);
    }

    #[test]
    fn threshold_rejects_degenerate_values() {
        assert!(Threshold::from_percent(0).is_err());
        assert!(Threshold::from_percent(100).is_err());
        assert!(Threshold::from_ratio(1.0).is_err());
        assert!(Threshold::from_ratio(f64::NAN).is_err());
        assert!(Threshold::from_basis_points(10_000).is_err());
        assert_eq!(Threshold::from_ratio(0.75), Ok(Threshold::DEFAULT));
    }

    #[test]
    fn threshold_display_and_percent() {
        assert_eq!(Threshold::DEFAULT.to_string(), "75%");
        assert_eq!(Threshold::from_basis_points(6_650).unwrap().to_string(), "66.50%");
        assert_eq!(Threshold::from_basis_points(6_650).unwrap().as_percent(), 67);
        assert_eq!(Threshold::DEFAULT.as_percent(), 75);
    }

    #[test]
    fn standing_boundaries() {
        assert_eq!(Standing::from_percentage(74), Standing::Poor);
        assert_eq!(Standing::from_percentage(75), Standing::Good);
        assert_eq!(Standing::from_percentage(89), Standing::Good);
        assert_eq!(Standing::from_percentage(90), Standing::Excellent);
        assert_eq!(Standing::from_percentage(250), Standing::Excellent);
    }

    proptest! {
        #[test]
        fn percentage_stays_in_bounds(total in 1u32..100_000, frac in 0.0f64..=1.0) {
            let attended = (f64::from(total) * frac).floor() as u32;
            let pct = percentage(attended, total);
            prop_assert!(pct <= 100);
        }

        #[test]
        fn recovery_count_is_minimal(total in 1u32..5_000, frac in 0.0f64..=1.0, pct in 1u32..100) {
            let attended = (f64::from(total) * frac).floor() as u32;
            let threshold = Threshold::from_percent(pct).unwrap();
            let x = classes_to_recover(attended, total, threshold);
            prop_assert!(threshold.is_met_by(attended + x, total + x));
            if x > 0 {
                prop_assert!(!threshold.is_met_by(attended + x - 1, total + x - 1));
            }
        }

        #[test]
        fn missable_count_is_maximal(total in 1u32..5_000, frac in 0.0f64..=1.0, pct in 1u32..100) {
            let attended = (f64::from(total) * frac).floor() as u32;
            let threshold = Threshold::from_percent(pct).unwrap();
            let x = missable_classes(attended, total, threshold);
            if threshold.is_met_by(attended, total) {
                prop_assert!(threshold.is_met_by(attended, total + x));
                prop_assert!(!threshold.is_met_by(attended, total + x + 1));
            } else {
                prop_assert_eq!(x, 0);
            }
        }

        #[test]
        fn arithmetic_is_idempotent(attended in 0u32..10_000, total in 0u32..10_000) {
            prop_assert_eq!(percentage(attended, total), percentage(attended, total));
            prop_assert_eq!(
                missable_classes_default(attended, total),
                missable_classes_default(attended, total)
            );
            prop_assert_eq!(
                classes_to_recover_default(attended, total),
                classes_to_recover_default(attended, total)
            );
        }
    }
}
