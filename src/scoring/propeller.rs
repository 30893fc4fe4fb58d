//! PROPELLER SCORER
//!
//! Rates a propeller choice on two 0-10 scales and two qualitative labels:
//!
//! | Component | noise | motor_load | Label |
//! |---|---|---|---|
//! | pitch >= 4.5 / >= 4.0 / lower | +3 / +2 / +1 | +3 / +2 / +1 | efficiency |
//! | blades >= 4 / == 3 / fewer | +3 / +2 / +1 | +3 / +2 / +1 | grip |
//! | size >= 6 / >= 5 / smaller | - | +2 / +1 / +0 | - |
//!
//! Both scores saturate at `MAX_SCORE`.

use crate::types::{Efficiency, FlightStyle, Grip, PropAnalysisResult, PropEffect, PropellerSpec};

/// Upper bound for noise and motor load scores
pub const MAX_SCORE: u8 = 10;

const RACING_ADVICE: &str =
    "Suited to Racing: sharp response, but check motor heat and run lighter props";
const LONGRANGE_ADVICE: &str =
    "Suited to Long Range: efficient and easy to control; pick low to mid pitch props";
const FREESTYLE_ADVICE: &str = "Suited to Freestyle: a balance between punch and control";

/// Score a propeller for the given flight style.
///
/// Pure and deterministic: the same inputs always produce an identical result.
pub fn analyze_propeller(prop: &PropellerSpec, style: FlightStyle) -> PropAnalysisResult {
    let mut noise: u32 = 0;
    let mut motor_load: u32 = 0;

    // Pitch: more pitch bites more air per revolution
    let efficiency = if prop.pitch >= 4.5 {
        noise += 3;
        motor_load += 3;
        Efficiency::Aggressive
    } else if prop.pitch >= 4.0 {
        noise += 2;
        motor_load += 2;
        Efficiency::Balanced
    } else {
        noise += 1;
        motor_load += 1;
        Efficiency::Economical
    };

    // Blade count
    let grip = match prop.blade_count {
        n if n >= 4 => {
            noise += 3;
            motor_load += 3;
            Grip::VeryLockedIn
        }
        3 => {
            noise += 2;
            motor_load += 2;
            Grip::LockedIn
        }
        _ => {
            noise += 1;
            motor_load += 1;
            Grip::Floaty
        }
    };

    // Size only loads the motor
    if prop.size >= 6.0 {
        motor_load += 2;
    } else if prop.size >= 5.0 {
        motor_load += 1;
    }

    let effect = PropEffect {
        noise: saturate(noise),
        motor_load: saturate(motor_load),
        efficiency,
        grip,
    };

    tracing::debug!(
        "prop {:.1}x{:.1}x{} -> noise {}, motor_load {}",
        prop.size, prop.pitch, prop.blade_count, effect.noise, effect.motor_load
    );

    PropAnalysisResult {
        summary: format!(
            "{:.1}\" × {} ใบ (Pitch {:.1}) — {}, {}",
            prop.size, prop.blade_count, prop.pitch, grip, efficiency
        ),
        effect,
        recommendation: recommendation_for(style).to_string(),
    }
}

/// Fixed advisory text per flight style
pub fn recommendation_for(style: FlightStyle) -> &'static str {
    match style {
        FlightStyle::Racing => RACING_ADVICE,
        FlightStyle::LongRange => LONGRANGE_ADVICE,
        FlightStyle::Freestyle => FREESTYLE_ADVICE,
    }
}

fn saturate(score: u32) -> u8 {
    score.min(MAX_SCORE as u32) as u8
}
