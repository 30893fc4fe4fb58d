//! Scoring functions for a drone build
//!
//! Both scorers are pure and total. Inputs arrive already validated
//! (see `crate::form`), so nothing here returns an error.
//!
//! - `propeller`: noise / motor load / efficiency / grip for a prop choice
//! - `thrust`: thrust-to-weight ratio and flight time estimates

pub mod propeller;
pub mod thrust;

pub use propeller::{analyze_propeller, recommendation_for, MAX_SCORE};
pub use thrust::{battery_runtime, format_rounded, thrust_ratio_value, thrust_to_weight};
