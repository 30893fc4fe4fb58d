//! Domain types shared by the scorer, the advisor and the web layer.
//!
//! String inputs (style, mode, battery) are mapped onto closed enums here,
//! at the boundary, so the scoring code only ever matches on variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DoctorError, Result};

// ============================================================================
// Enumerated inputs
// ============================================================================

/// Flight style that drives recommendation text and preset selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FlightStyle {
    #[default]
    Freestyle,
    Racing,
    #[serde(rename = "longrange")]
    LongRange,
}

impl FlightStyle {
    /// Parse a form value. Anything unrecognized is Freestyle.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "racing" => FlightStyle::Racing,
            "longrange" => FlightStyle::LongRange,
            _ => FlightStyle::Freestyle,
        }
    }

    /// Key used in the preset table
    pub fn key(&self) -> &'static str {
        match self {
            FlightStyle::Freestyle => "freestyle",
            FlightStyle::Racing => "racing",
            FlightStyle::LongRange => "longrange",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FlightStyle::Freestyle => "Freestyle",
            FlightStyle::Racing => "Racing",
            FlightStyle::LongRange => "Long Range",
        }
    }
}

impl From<String> for FlightStyle {
    fn from(raw: String) -> Self {
        FlightStyle::from_label(&raw)
    }
}

impl fmt::Display for FlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Advisor depth selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mode {
    #[default]
    Basic,
    Advanced,
    Pro,
}

impl Mode {
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "advanced" => Mode::Advanced,
            "pro" => Mode::Pro,
            _ => Mode::Basic,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Advanced => "advanced",
            Mode::Pro => "pro",
        }
    }
}

impl From<String> for Mode {
    fn from(raw: String) -> Self {
        Mode::from_label(&raw)
    }
}

/// Battery cell count as entered on the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Battery {
    #[default]
    FourS,
    SixS,
    Other(String),
}

impl Battery {
    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "4S" => Battery::FourS,
            "6S" => Battery::SixS,
            _ => Battery::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Battery::FourS => "4S",
            Battery::SixS => "6S",
            Battery::Other(label) => label,
        }
    }
}

impl From<String> for Battery {
    fn from(raw: String) -> Self {
        Battery::from_label(&raw)
    }
}

impl From<Battery> for String {
    fn from(battery: Battery) -> Self {
        battery.label().to_string()
    }
}

impl fmt::Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Validated numeric inputs
// ============================================================================

/// All-up weight with an explicit unit. Estimator formulas work in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weight {
    grams: f64,
}

impl Weight {
    pub fn from_grams(grams: f64) -> Result<Self> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(DoctorError::invalid("weight", "must be a positive number of grams"));
        }
        Ok(Weight { grams })
    }

    pub fn from_kilograms(kg: f64) -> Result<Self> {
        if !kg.is_finite() || kg <= 0.0 {
            return Err(DoctorError::invalid("weight", "must be a positive number of kilograms"));
        }
        Ok(Weight { grams: kg * 1000.0 })
    }

    pub fn grams(&self) -> f64 {
        self.grams
    }

    pub fn kilograms(&self) -> f64 {
        self.grams / 1000.0
    }
}

/// Propeller geometry (size and pitch in inches)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropellerSpec {
    pub size: f64,
    pub pitch: f64,
    pub blade_count: u32,
}

impl PropellerSpec {
    pub fn new(size: f64, pitch: f64, blade_count: u32) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(DoctorError::invalid("prop_size", "must be > 0"));
        }
        if !pitch.is_finite() || pitch <= 0.0 {
            return Err(DoctorError::invalid("pitch", "must be > 0"));
        }
        if blade_count < 1 {
            return Err(DoctorError::invalid("blades", "must be >= 1"));
        }
        Ok(PropellerSpec { size, pitch, blade_count })
    }
}

// ============================================================================
// Propeller analysis output
// ============================================================================

/// Efficiency band derived from pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Efficiency {
    #[serde(rename = "aggressive/power-hungry")]
    Aggressive,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "economical/soft")]
    Economical,
}

impl Efficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Efficiency::Aggressive => "aggressive/power-hungry",
            Efficiency::Balanced => "balanced",
            Efficiency::Economical => "economical/soft",
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grip feel derived from blade count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grip {
    #[serde(rename = "very locked-in")]
    VeryLockedIn,
    #[serde(rename = "locked-in")]
    LockedIn,
    #[serde(rename = "soft/floaty")]
    Floaty,
}

impl Grip {
    pub fn label(&self) -> &'static str {
        match self {
            Grip::VeryLockedIn => "very locked-in",
            Grip::LockedIn => "locked-in",
            Grip::Floaty => "soft/floaty",
        }
    }
}

impl fmt::Display for Grip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropEffect {
    /// 0-10
    pub noise: u8,
    /// 0-10
    pub motor_load: u8,
    pub efficiency: Efficiency,
    pub grip: Grip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropAnalysisResult {
    pub summary: String,
    pub effect: PropEffect,
    pub recommendation: String,
}

// ============================================================================
// Tuning presets
// ============================================================================

/// PID gains for one axis. Yaw usually carries no D term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PidGains {
    pub p: u16,
    pub i: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<u16>,
}

impl fmt::Display for PidGains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P:{} I:{}", self.p, self.i)?;
        if let Some(d) = self.d {
            write!(f, " D:{}", d)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PidTable {
    pub roll: PidGains,
    pub pitch: PidGains,
    pub yaw: PidGains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotchState {
    #[serde(rename = "ON")]
    On,
    #[default]
    #[serde(rename = "OFF")]
    Off,
}

impl fmt::Display for NotchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotchState::On => f.write_str("ON"),
            NotchState::Off => f.write_str("OFF"),
        }
    }
}

/// Filter cutoffs in Hz (0 = disabled) and the dynamic notch switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSettings {
    pub gyro_lpf2: u16,
    pub dterm_lpf1: u16,
    pub dyn_notch: NotchState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TuningPreset {
    pub pid: PidTable,
    pub filter: FilterSettings,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl TuningPreset {
    /// Minimal preset used when no preset table is available.
    /// All gains and cutoffs are zero and the dynamic notch is off.
    pub fn fallback() -> Self {
        TuningPreset::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing_defaults_to_freestyle() {
        assert_eq!(FlightStyle::from_label("racing"), FlightStyle::Racing);
        assert_eq!(FlightStyle::from_label("Racing"), FlightStyle::Racing);
        assert_eq!(FlightStyle::from_label("longrange"), FlightStyle::LongRange);
        assert_eq!(FlightStyle::from_label("Freestyle"), FlightStyle::Freestyle);
        assert_eq!(FlightStyle::from_label("cinewhoop"), FlightStyle::Freestyle);
        assert_eq!(FlightStyle::from_label(""), FlightStyle::Freestyle);
        assert_eq!(FlightStyle::from_label("long range"), FlightStyle::Freestyle);
        assert_eq!(FlightStyle::from_label("long-range"), FlightStyle::Freestyle);
    }

    #[test]
    fn test_style_serde() {
        let json = serde_json::to_string(&FlightStyle::LongRange).unwrap();
        assert_eq!(json, "\"longrange\"");
        let parsed: FlightStyle = serde_json::from_str("\"RACING\"").unwrap();
        assert_eq!(parsed, FlightStyle::Racing);
        let parsed: FlightStyle = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(parsed, FlightStyle::Freestyle);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(Mode::from_label("Advanced"), Mode::Advanced);
        assert_eq!(Mode::from_label("Pro"), Mode::Pro);
        assert_eq!(Mode::from_label("Expert"), Mode::Basic);
    }

    #[test]
    fn test_battery_labels() {
        assert_eq!(Battery::from_label("4S"), Battery::FourS);
        assert_eq!(Battery::from_label("6s"), Battery::SixS);
        assert_eq!(Battery::from_label(" 3S "), Battery::Other("3S".to_string()));
        assert_eq!(Battery::Other("3S".to_string()).label(), "3S");
        assert_eq!(serde_json::to_string(&Battery::SixS).unwrap(), "\"6S\"");
        assert_eq!(Battery::default(), Battery::FourS);
    }

    #[test]
    fn test_weight_units() {
        let w = Weight::from_kilograms(0.45).unwrap();
        assert!((w.grams() - 450.0).abs() < 1e-9);
        assert!(Weight::from_grams(0.0).is_err());
        assert!(Weight::from_grams(-5.0).is_err());
        assert!(Weight::from_grams(f64::NAN).is_err());
    }

    #[test]
    fn test_propeller_spec_preconditions() {
        assert!(PropellerSpec::new(5.0, 4.3, 3).is_ok());
        assert!(PropellerSpec::new(0.0, 4.3, 3).is_err());
        assert!(PropellerSpec::new(5.0, -1.0, 3).is_err());
        assert!(PropellerSpec::new(5.0, 4.3, 0).is_err());
    }

    #[test]
    fn test_effect_labels_serialize_as_text() {
        let effect = PropEffect {
            noise: 4,
            motor_load: 4,
            efficiency: Efficiency::Balanced,
            grip: Grip::LockedIn,
        };
        let value = serde_json::to_value(&effect).unwrap();
        assert_eq!(value["efficiency"], "balanced");
        assert_eq!(value["grip"], "locked-in");
    }

    #[test]
    fn test_fallback_preset_is_blank() {
        let preset = TuningPreset::fallback();
        assert_eq!(preset.pid.roll, PidGains { p: 0, i: 0, d: None });
        assert_eq!(preset.filter.dyn_notch, NotchState::Off);
        assert!(preset.tips.is_empty());
    }

    #[test]
    fn test_pid_display() {
        let gains = PidGains { p: 45, i: 80, d: Some(35) };
        assert_eq!(gains.to_string(), "P:45 I:80 D:35");
        let yaw = PidGains { p: 45, i: 80, d: None };
        assert_eq!(yaw.to_string(), "P:45 I:80");
    }
}
