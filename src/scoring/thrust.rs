//! Thrust and flight-time estimators
//!
//! Coarse rule-of-thumb numbers, not a propulsion model. Total thrust is
//! assumed to be 1000 g per motor-load point; flight time scales a nominal
//! pack capacity by weight. All weights are in grams.

use crate::types::{Battery, Weight};

/// Assumed thrust in grams per motor-load point
const THRUST_PER_LOAD_G: f64 = 1000.0;

/// Nominal capacity figures (mAh) behind the runtime estimate
const FOUR_S_CAPACITY_MAH: f64 = 1500.0;
const DEFAULT_CAPACITY_MAH: f64 = 2200.0;

const RUNTIME_FACTOR: f64 = 3.0;

/// Unrounded thrust-to-weight ratio
pub fn thrust_ratio_value(motor_load: u8, weight: Weight) -> f64 {
    motor_load as f64 * THRUST_PER_LOAD_G / weight.grams()
}

/// Thrust-to-weight ratio formatted as `"<ratio>:1"`, ratio rounded to 2 decimals
pub fn thrust_to_weight(motor_load: u8, weight: Weight) -> String {
    format!("{}:1", format_rounded(thrust_ratio_value(motor_load, weight), 2))
}

/// Estimated flight time formatted as `"<minutes> นาที"`, rounded to 1 decimal
pub fn battery_runtime(weight: Weight, battery: &Battery) -> String {
    let capacity = match battery {
        Battery::FourS => FOUR_S_CAPACITY_MAH,
        _ => DEFAULT_CAPACITY_MAH,
    };
    let minutes = capacity / weight.grams() * RUNTIME_FACTOR;
    format!("{} นาที", format_rounded(minutes, 1))
}

/// Round to `decimals` places and print the shortest form, keeping at least
/// one fractional digit (5.0 → "5.0", 8.8889 → "8.89", 2.50 → "2.5").
///
/// Exact halves round to even, so 0.125 → "0.12" and 1.25 → "1.2".
pub fn format_rounded(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round_ties_even() / scale;
    let text = format!("{}", rounded);
    if rounded.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(g: f64) -> Weight {
        Weight::from_grams(g).unwrap()
    }

    #[test]
    fn test_thrust_ratio_reference() {
        assert_eq!(thrust_to_weight(5, grams(1000.0)), "5.0:1");
    }

    #[test]
    fn test_thrust_ratio_rounding() {
        // 4000 / 450 = 8.888...
        assert_eq!(thrust_to_weight(4, grams(450.0)), "8.89:1");
        // 5000 / 2000 = 2.5
        assert_eq!(thrust_to_weight(5, grams(2000.0)), "2.5:1");
        assert_eq!(thrust_to_weight(0, grams(450.0)), "0.0:1");
    }

    #[test]
    fn test_thrust_ratio_accepts_kilograms() {
        let weight = Weight::from_kilograms(1.0).unwrap();
        assert_eq!(thrust_to_weight(5, weight), "5.0:1");
    }

    #[test]
    fn test_runtime_reference() {
        assert_eq!(battery_runtime(grams(500.0), &Battery::FourS), "9.0 นาที");
    }

    #[test]
    fn test_runtime_other_packs() {
        // 2200 / 450 * 3 = 14.666...
        assert_eq!(battery_runtime(grams(450.0), &Battery::SixS), "14.7 นาที");
        assert_eq!(
            battery_runtime(grams(450.0), &Battery::Other("3S".to_string())),
            "14.7 นาที"
        );
        // 1500 / 450 * 3 = 10.0
        assert_eq!(battery_runtime(grams(450.0), &Battery::FourS), "10.0 นาที");
    }

    #[test]
    fn test_format_rounded() {
        assert_eq!(format_rounded(5.0, 2), "5.0");
        assert_eq!(format_rounded(8.8889, 2), "8.89");
        assert_eq!(format_rounded(2.50, 2), "2.5");
        assert_eq!(format_rounded(14.6666, 1), "14.7");
        assert_eq!(format_rounded(1234.0, 1), "1234.0");
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        // 2000 / 16000 = 0.125
        assert_eq!(thrust_to_weight(2, grams(16000.0)), "0.12:1");
        // 1500 / 3600 * 3 = 1.25
        assert_eq!(battery_runtime(grams(3600.0), &Battery::FourS), "1.2 นาที");
        assert_eq!(format_rounded(0.375, 2), "0.38");
        assert_eq!(format_rounded(2.5, 0), "2.0");
    }
}
