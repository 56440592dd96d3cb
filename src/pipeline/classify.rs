//! Status classification of extracted readings.

use crate::models::enums::ParameterStatus;

/// Blood pressure is normal below both of these (systolic, diastolic).
const BP_NORMAL_BELOW: (f64, f64) = (120.0, 80.0);
/// Borderline-high when either reading is below its threshold.
const BP_BORDERLINE_BELOW: (f64, f64) = (130.0, 85.0);

/// Classify a single value against its normal and optional borderline range.
///
/// Range bounds are inclusive for NORMAL. Outside the normal range, a value
/// still inside the borderline range is BORDERLINE_*, otherwise LOW/HIGH.
pub fn classify(
    value: f64,
    normal_range: (f64, f64),
    borderline_range: Option<(f64, f64)>,
) -> ParameterStatus {
    let (normal_min, normal_max) = normal_range;

    if value < normal_min {
        match borderline_range {
            Some((low, _)) if value >= low => ParameterStatus::BorderlineLow,
            _ => ParameterStatus::Low,
        }
    } else if value > normal_max {
        match borderline_range {
            Some((_, high)) if value <= high => ParameterStatus::BorderlineHigh,
            _ => ParameterStatus::High,
        }
    } else {
        ParameterStatus::Normal
    }
}

/// Fixed blood pressure thresholds.
///
/// There is no LOW state: hypotension is not classified.
pub fn classify_blood_pressure(systolic: f64, diastolic: f64) -> ParameterStatus {
    if systolic < BP_NORMAL_BELOW.0 && diastolic < BP_NORMAL_BELOW.1 {
        ParameterStatus::Normal
    } else if systolic < BP_BORDERLINE_BELOW.0 || diastolic < BP_BORDERLINE_BELOW.1 {
        ParameterStatus::BorderlineHigh
    } else {
        ParameterStatus::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORMAL: (f64, f64) = (12.0, 16.0);
    const BORDERLINE: Option<(f64, f64)> = Some((11.0, 17.0));

    #[test]
    fn inside_range_is_normal() {
        assert_eq!(classify(13.5, NORMAL, BORDERLINE), ParameterStatus::Normal);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(classify(12.0, NORMAL, BORDERLINE), ParameterStatus::Normal);
        assert_eq!(classify(16.0, NORMAL, BORDERLINE), ParameterStatus::Normal);
    }

    #[test]
    fn borderline_low_band() {
        assert_eq!(classify(11.0, NORMAL, BORDERLINE), ParameterStatus::BorderlineLow);
        assert_eq!(classify(11.9, NORMAL, BORDERLINE), ParameterStatus::BorderlineLow);
        assert_eq!(classify(10.9, NORMAL, BORDERLINE), ParameterStatus::Low);
    }

    #[test]
    fn borderline_high_band() {
        assert_eq!(classify(17.0, NORMAL, BORDERLINE), ParameterStatus::BorderlineHigh);
        assert_eq!(classify(17.1, NORMAL, BORDERLINE), ParameterStatus::High);
    }

    #[test]
    fn without_borderline_deviations_are_full() {
        assert_eq!(classify(11.9, NORMAL, None), ParameterStatus::Low);
        assert_eq!(classify(16.1, NORMAL, None), ParameterStatus::High);
    }

    #[test]
    fn open_upper_range() {
        assert_eq!(classify(85.0, (40.0, f64::INFINITY), None), ParameterStatus::Normal);
        assert_eq!(classify(30.0, (40.0, f64::INFINITY), None), ParameterStatus::Low);
    }

    #[test]
    fn blood_pressure_normal() {
        assert_eq!(classify_blood_pressure(118.0, 76.0), ParameterStatus::Normal);
    }

    #[test]
    fn blood_pressure_borderline_when_either_below_threshold() {
        assert_eq!(classify_blood_pressure(125.0, 82.0), ParameterStatus::BorderlineHigh);
        assert_eq!(classify_blood_pressure(140.0, 82.0), ParameterStatus::BorderlineHigh);
        assert_eq!(classify_blood_pressure(120.0, 70.0), ParameterStatus::BorderlineHigh);
    }

    #[test]
    fn blood_pressure_high() {
        assert_eq!(classify_blood_pressure(135.0, 90.0), ParameterStatus::High);
        assert_eq!(classify_blood_pressure(130.0, 85.0), ParameterStatus::High);
    }

    #[test]
    fn blood_pressure_has_no_low_state() {
        assert_eq!(classify_blood_pressure(80.0, 50.0), ParameterStatus::Normal);
    }
}
