//! Config Doctor
//!
//! Starting-point tuning advice for FPV drone builds.
//!
//! Module layout:
//! - `types`: validated inputs and report value types
//! - `scoring/`: propeller scorer, thrust and flight-time estimators
//! - `advisor/`: versioned style → PID/filter preset table
//! - `doctor`: assembles one `AnalysisReport` per build
//! - `form`: raw form fields → `BuildInputs`
//! - `cli_check`: Betaflight CLI dump checker
//! - `analytics`: append-only CSV log of analyses
//! - `config`: server settings from the environment
//! - `api_server` / `web` (feature `api`): Axum router and Askama pages

pub mod error;
pub mod types;
pub mod scoring;
pub mod advisor;
pub mod doctor;
pub mod form;
pub mod cli_check;
pub mod analytics;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use error::{DoctorError, Result};
pub use types::{
    Battery, Efficiency, FilterSettings, FlightStyle, Grip, Mode, NotchState, PidGains, PidTable,
    PropAnalysisResult, PropEffect, PropellerSpec, TuningPreset, Weight,
};
pub use scoring::{analyze_propeller, battery_runtime, thrust_to_weight};
pub use advisor::{select_preset, PresetTable};
pub use doctor::{analyze_build, AnalysisReport, BuildInputs, WeightClass};
pub use form::{parse_build_inputs, FormFields};
pub use cli_check::{check_cli_dump, CliVerdict};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
