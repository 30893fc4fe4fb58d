//! Append-only CSV analytics log
//!
//! One row per successful analysis. The header is written only when the file
//! is new or empty, so restarts keep appending to the same table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::doctor::{AnalysisReport, BuildInputs};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct AnalyticsRow<'a> {
    timestamp: String,
    size: f64,
    weight_g: f64,
    battery: &'a str,
    style: &'a str,
    prop_size: f64,
    blades: u32,
    pitch: f64,
    thrust_ratio: &'a str,
    battery_est: &'a str,
}

pub struct AnalyticsLog {
    path: PathBuf,
    writer: Mutex<csv::Writer<File>>,
}

impl AnalyticsLog {
    pub fn open(path: &Path) -> Result<Self> {
        let is_new = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        tracing::info!("Analytics log: {:?} (new: {})", path, is_new);

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, inputs: &BuildInputs, report: &AnalysisReport) -> Result<()> {
        self.record_at(Utc::now(), inputs, report)
    }

    pub fn record_at(
        &self,
        timestamp: DateTime<Utc>,
        inputs: &BuildInputs,
        report: &AnalysisReport,
    ) -> Result<()> {
        let row = AnalyticsRow {
            timestamp: timestamp.to_rfc3339(),
            size: inputs.frame_size,
            weight_g: inputs.weight.grams(),
            battery: inputs.battery.label(),
            style: inputs.style.key(),
            prop_size: inputs.prop.size,
            blades: inputs.prop.blade_count,
            pitch: inputs.prop.pitch,
            thrust_ratio: &report.thrust_ratio,
            battery_est: &report.flight_time,
        };

        // Appends from concurrent requests are serialized here
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.serialize(row)?;
        writer.flush()?;
        Ok(())
    }
}
