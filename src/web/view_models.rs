//! View models for the app page
//!
//! Flattens an `AnalysisReport` into display strings so templates stay free
//! of Option handling. `ReportView::placeholder()` is what the page shows
//! before any analysis has run, with every value rendered as "-" or 0.

use crate::doctor::AnalysisReport;
use crate::types::PidGains;

const BLANK: &str = "-";

#[derive(Debug, Clone)]
pub struct PidRow {
    pub axis: &'static str,
    pub p: String,
    pub i: String,
    pub d: String,
}

impl PidRow {
    fn new(axis: &'static str, gains: &PidGains) -> Self {
        Self {
            axis,
            p: gains.p.to_string(),
            i: gains.i.to_string(),
            d: gains.d.map(|d| d.to_string()).unwrap_or_else(|| BLANK.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportView {
    pub style: String,
    pub weight_class: String,
    pub thrust_ratio: String,
    pub flight_time: String,
    pub summary: String,
    pub tips: Vec<String>,
    pub pid_rows: Vec<PidRow>,
    pub gyro_lpf2: String,
    pub dterm_lpf1: String,
    pub dyn_notch: String,
    pub prop_summary: String,
    pub noise: u8,
    pub motor_load: u8,
    pub efficiency: String,
    pub grip: String,
    pub recommendation: String,
    pub warning: String,
    pub has_warning: bool,
}

impl ReportView {
    pub fn placeholder() -> Self {
        let zero = PidGains::default();
        Self {
            style: BLANK.to_string(),
            weight_class: BLANK.to_string(),
            thrust_ratio: "0".to_string(),
            flight_time: "0".to_string(),
            summary: BLANK.to_string(),
            tips: Vec::new(),
            pid_rows: vec![
                PidRow::new("Roll", &PidGains { d: Some(0), ..zero }),
                PidRow::new("Pitch", &PidGains { d: Some(0), ..zero }),
                PidRow::new("Yaw", &zero),
            ],
            gyro_lpf2: "0".to_string(),
            dterm_lpf1: "0".to_string(),
            dyn_notch: "OFF".to_string(),
            prop_summary: BLANK.to_string(),
            noise: 0,
            motor_load: 0,
            efficiency: BLANK.to_string(),
            grip: BLANK.to_string(),
            recommendation: BLANK.to_string(),
            warning: String::new(),
            has_warning: false,
        }
    }
}

impl From<&AnalysisReport> for ReportView {
    fn from(report: &AnalysisReport) -> Self {
        let effect = &report.prop_result.effect;
        Self {
            style: report.style.display_name().to_string(),
            weight_class: report.weight_class.to_string(),
            thrust_ratio: report.thrust_ratio.clone(),
            flight_time: report.flight_time.clone(),
            summary: report.summary.clone(),
            tips: report.basic_tips.clone(),
            pid_rows: vec![
                PidRow::new("Roll", &report.pid.roll),
                PidRow::new("Pitch", &report.pid.pitch),
                PidRow::new("Yaw", &report.pid.yaw),
            ],
            gyro_lpf2: report.filter.gyro_lpf2.to_string(),
            dterm_lpf1: report.filter.dterm_lpf1.to_string(),
            dyn_notch: report.filter.dyn_notch.to_string(),
            prop_summary: report.prop_result.summary.clone(),
            noise: effect.noise,
            motor_load: effect.motor_load,
            efficiency: effect.efficiency.to_string(),
            grip: effect.grip.to_string(),
            recommendation: report.prop_result.recommendation.clone(),
            warning: report.warning.clone().unwrap_or_default(),
            has_warning: report.warning.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::analyze_build;
    use crate::form::{parse_build_inputs, FormFields};

    #[test]
    fn test_placeholder_is_blank() {
        let view = ReportView::placeholder();
        assert_eq!(view.summary, "-");
        assert_eq!(view.dyn_notch, "OFF");
        assert_eq!(view.pid_rows.len(), 3);
        assert_eq!(view.pid_rows[2].d, "-");
        assert!(!view.has_warning);
    }

    #[test]
    fn test_view_from_report_without_presets() {
        let inputs = parse_build_inputs(&FormFields::new()).unwrap();
        let report = analyze_build(&inputs, None);
        let view = ReportView::from(&report);

        assert!(view.has_warning);
        assert_eq!(view.style, "Freestyle");
        assert_eq!(view.grip, "soft/floaty");
        assert_eq!(view.pid_rows[0].axis, "Roll");
    }
}
