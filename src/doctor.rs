//! Build analysis
//!
//! Combines the propeller scorer, the style advisor and the thrust/runtime
//! estimators into one `AnalysisReport` per request.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::advisor::{select_preset, PresetTable};
use crate::scoring::{analyze_propeller, battery_runtime, thrust_ratio_value, thrust_to_weight};
use crate::types::{
    Battery, FilterSettings, FlightStyle, Mode, PidTable, PropAnalysisResult, PropellerSpec, Weight,
};

/// Below this thrust-to-weight ratio a build is flagged as underpowered
const LOW_THRUST_RATIO: f64 = 2.0;

pub const NO_PRESETS_WARNING: &str =
    "Preset table unavailable; showing propeller analysis only";

// ============================================================================
// Inputs
// ============================================================================

/// Fully validated inputs for one analysis
#[derive(Debug, Clone, Serialize)]
pub struct BuildInputs {
    /// Frame size in inches
    pub frame_size: f64,
    pub weight: Weight,
    pub battery: Battery,
    pub style: FlightStyle,
    pub mode: Mode,
    pub prop: PropellerSpec,
}

/// Weight bracket shown next to the thrust estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightClass {
    Micro,  // < 250 g
    Light,  // < 500 g
    Medium, // < 900 g
    Heavy,
}

impl WeightClass {
    pub fn from_weight(weight: Weight) -> Self {
        match weight.grams() {
            g if g < 250.0 => WeightClass::Micro,
            g if g < 500.0 => WeightClass::Light,
            g if g < 900.0 => WeightClass::Medium,
            _ => WeightClass::Heavy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightClass::Micro => "micro",
            WeightClass::Light => "light",
            WeightClass::Medium => "medium",
            WeightClass::Heavy => "heavy",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Report
// ============================================================================

/// Everything the result page shows for one build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub style: FlightStyle,
    pub mode: Mode,
    pub weight_class: WeightClass,
    pub thrust_ratio: String,
    pub flight_time: String,
    /// One-line overview of the build
    pub summary: String,
    pub basic_tips: Vec<String>,
    pub pid: PidTable,
    pub filter: FilterSettings,
    pub prop_result: PropAnalysisResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Analyze a build.
///
/// Never fails: without a preset table the fallback preset is used and the
/// report carries a warning.
pub fn analyze_build(inputs: &BuildInputs, presets: Option<&PresetTable>) -> AnalysisReport {
    let prop_result = analyze_propeller(&inputs.prop, inputs.style);
    let preset = select_preset(presets, inputs.style, inputs.mode);

    let motor_load = prop_result.effect.motor_load;
    let thrust_ratio = thrust_to_weight(motor_load, inputs.weight);
    let flight_time = battery_runtime(inputs.weight, &inputs.battery);
    let weight_class = WeightClass::from_weight(inputs.weight);

    let mut basic_tips = preset.tips;
    basic_tips.extend(build_tips(inputs, thrust_ratio_value(motor_load, inputs.weight)));

    let summary = format!(
        "{:.1}\" {} build, {:.0} g ({}) on {}: thrust {} / flight time {}",
        inputs.frame_size,
        inputs.style.display_name(),
        inputs.weight.grams(),
        weight_class,
        inputs.battery,
        thrust_ratio,
        flight_time,
    );

    tracing::debug!("Analyzed build: {}", summary);

    AnalysisReport {
        style: inputs.style,
        mode: inputs.mode,
        weight_class,
        thrust_ratio,
        flight_time,
        summary,
        basic_tips,
        pid: preset.pid,
        filter: preset.filter,
        prop_result,
        warning: presets.is_none().then(|| NO_PRESETS_WARNING.to_string()),
    }
}

/// Tips that depend on the frame and pack rather than the style
fn build_tips(inputs: &BuildInputs, thrust_ratio: f64) -> Vec<String> {
    let mut tips = Vec::new();

    if inputs.frame_size >= 7.0 {
        tips.push("7\"+ frames flex more: keep D conservative and watch for prop wash".to_string());
    } else if inputs.frame_size <= 3.0 {
        tips.push("Small frames react fast: lower rates before raising P".to_string());
    }

    match &inputs.battery {
        Battery::FourS => {}
        Battery::SixS => {
            tips.push("On 6S, check motor temperature and lower motor output limit if they run hot".to_string());
        }
        Battery::Other(label) => {
            tips.push(format!("Presets assume 4S or 6S; scale gains for {}", label));
        }
    }

    if thrust_ratio < LOW_THRUST_RATIO {
        tips.push(format!(
            "Thrust-to-weight below {:.0}:1; the build may feel sluggish",
            LOW_THRUST_RATIO
        ));
    }

    tips
}
