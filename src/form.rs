//! Form parsing and validation
//!
//! Turns raw form fields (all strings) into `BuildInputs`. Missing or empty
//! fields take the documented default; everything else must parse and fall
//! inside its range. Enumerated fields never fail: unknown values map to the
//! enum's default variant.

use std::collections::HashMap;

use crate::doctor::BuildInputs;
use crate::error::{DoctorError, Result};
use crate::types::{Battery, FlightStyle, Mode, PropellerSpec, Weight};

/// Raw form fields keyed by input name
pub type FormFields = HashMap<String, String>;

/// Field bounds: (default, min, max)
const SIZE: (f64, f64, f64) = (5.0, 0.1, 100.0);
const WEIGHT_G: (f64, f64, f64) = (450.0, 1.0, 100_000.0);
const PROP_SIZE: (f64, f64, f64) = (5.0, 1.0, 30.0);
const PITCH: (f64, f64, f64) = (3.0, 0.1, 12.0);
const BLADES: (i64, i64, i64) = (2, 1, 8);

/// Fetch a field, treating empty strings as missing
fn raw<'a>(form: &'a FormFields, key: &str) -> Option<&'a str> {
    form.get(key).map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Parse a float field with default and inclusive range
pub fn parse_float(form: &FormFields, key: &str, default: f64, min: f64, max: f64) -> Result<f64> {
    let Some(text) = raw(form, key) else {
        return Ok(default);
    };

    let value: f64 = text
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| DoctorError::invalid(key, "must be a number"))?;

    check_range(key, value, min, max)
}

/// Parse an integer field with default and inclusive range
pub fn parse_int(form: &FormFields, key: &str, default: i64, min: i64, max: i64) -> Result<i64> {
    let Some(text) = raw(form, key) else {
        return Ok(default);
    };

    let value: i64 = text
        .parse()
        .map_err(|_| DoctorError::invalid(key, "must be an integer"))?;

    check_range(key, value, min, max)
}

fn check_range<T: PartialOrd + std::fmt::Display>(key: &str, value: T, min: T, max: T) -> Result<T> {
    if value < min {
        return Err(DoctorError::invalid(key, format!("must be >= {}", min)));
    }
    if value > max {
        return Err(DoctorError::invalid(key, format!("must be <= {}", max)));
    }
    Ok(value)
}

/// Parse the weight together with its unit (`weight_unit`: "g" or "kg", default "g")
fn parse_weight(form: &FormFields) -> Result<Weight> {
    let (default, min, max) = WEIGHT_G;
    let unit = raw(form, "weight_unit").unwrap_or("g").to_ascii_lowercase();

    let grams = match unit.as_str() {
        "g" => parse_float(form, "weight", default, f64::NEG_INFINITY, f64::INFINITY)?,
        "kg" => parse_float(form, "weight", default / 1000.0, f64::NEG_INFINITY, f64::INFINITY)? * 1000.0,
        other => {
            return Err(DoctorError::invalid(
                "weight_unit",
                format!("must be 'g' or 'kg', got '{}'", other),
            ))
        }
    };

    // Bounds are in grams whatever unit was entered
    if grams < min {
        return Err(DoctorError::invalid("weight", format!("must be >= {} g", min)));
    }
    if grams > max {
        return Err(DoctorError::invalid("weight", format!("must be <= {} g", max)));
    }

    Weight::from_grams(grams)
}

/// Validate a whole form submission
pub fn parse_build_inputs(form: &FormFields) -> Result<BuildInputs> {
    let frame_size = parse_float(form, "size", SIZE.0, SIZE.1, SIZE.2)?;
    let weight = parse_weight(form)?;
    let battery = Battery::from_label(raw(form, "battery").unwrap_or("4S"));
    let style = FlightStyle::from_label(raw(form, "style").unwrap_or("Freestyle"));
    let mode = Mode::from_label(raw(form, "mode").unwrap_or("Basic"));

    let prop_size = parse_float(form, "prop_size", PROP_SIZE.0, PROP_SIZE.1, PROP_SIZE.2)?;
    let blades = parse_int(form, "blades", BLADES.0, BLADES.1, BLADES.2)?;
    let pitch = parse_float(form, "pitch", PITCH.0, PITCH.1, PITCH.2)?;

    // blades is range-checked to 1..=8 above
    let prop = PropellerSpec::new(prop_size, pitch, blades as u32)?;

    Ok(BuildInputs {
        frame_size,
        weight,
        battery,
        style,
        mode,
        prop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_form_uses_defaults() {
        let inputs = parse_build_inputs(&FormFields::new()).unwrap();
        assert_relative_eq!(inputs.frame_size, 5.0);
        assert_relative_eq!(inputs.weight.grams(), 450.0);
        assert_eq!(inputs.battery, Battery::FourS);
        assert_eq!(inputs.style, FlightStyle::Freestyle);
        assert_eq!(inputs.mode, Mode::Basic);
        assert_eq!(inputs.prop.blade_count, 2);
        assert_relative_eq!(inputs.prop.pitch, 3.0);
    }

    #[test]
    fn test_blank_fields_take_defaults() {
        let inputs = parse_build_inputs(&form(&[("size", ""), ("pitch", "  ")])).unwrap();
        assert_relative_eq!(inputs.frame_size, 5.0);
        assert_relative_eq!(inputs.prop.pitch, 3.0);
    }

    #[test]
    fn test_full_submission() {
        let inputs = parse_build_inputs(&form(&[
            ("size", "7"),
            ("weight", "950"),
            ("battery", "6S"),
            ("style", "longrange"),
            ("prop_size", "7"),
            ("blades", "3"),
            ("pitch", "3.5"),
            ("mode", "Pro"),
        ]))
        .unwrap();

        assert_eq!(inputs.battery, Battery::SixS);
        assert_eq!(inputs.style, FlightStyle::LongRange);
        assert_eq!(inputs.mode, Mode::Pro);
        assert_eq!(inputs.prop.blade_count, 3);
        assert_relative_eq!(inputs.weight.grams(), 950.0);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = parse_build_inputs(&form(&[("size", "five")])).unwrap_err();
        assert_eq!(err.to_string(), "Field 'size' must be a number");

        let err = parse_build_inputs(&form(&[("blades", "2.5")])).unwrap_err();
        assert_eq!(err.to_string(), "Field 'blades' must be an integer");

        let err = parse_build_inputs(&form(&[("pitch", "NaN")])).unwrap_err();
        assert_eq!(err.to_string(), "Field 'pitch' must be a number");
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = parse_build_inputs(&form(&[("size", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Field 'size' must be >= 0.1");

        let err = parse_build_inputs(&form(&[("blades", "9")])).unwrap_err();
        assert_eq!(err.to_string(), "Field 'blades' must be <= 8");

        let err = parse_build_inputs(&form(&[("weight", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Field 'weight' must be >= 1 g");
        assert!(err.is_validation());
    }

    #[test]
    fn test_weight_in_kilograms() {
        let inputs = parse_build_inputs(&form(&[("weight", "0.65"), ("weight_unit", "kg")])).unwrap();
        assert_relative_eq!(inputs.weight.grams(), 650.0, epsilon = 1e-9);

        let err = parse_build_inputs(&form(&[("weight", "200"), ("weight_unit", "kg")])).unwrap_err();
        assert_eq!(err.to_string(), "Field 'weight' must be <= 100000 g");

        let err = parse_build_inputs(&form(&[("weight_unit", "lb")])).unwrap_err();
        assert!(err.to_string().contains("weight_unit"));
    }
}
