//! Versioned preset table (style → PID / filter / tips)
//!
//! The table ships embedded in the binary (`data/presets.json`) and can be
//! replaced at startup by a JSON file of the same shape. Each style may carry
//! per-mode overrides; a mode without an override gets the base preset.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::{FilterSettings, FlightStyle, Mode, PidTable, TuningPreset};

const EMBEDDED_PRESETS: &str = include_str!("../../data/presets.json");

const REQUIRED_STYLES: [FlightStyle; 3] = [
    FlightStyle::Freestyle,
    FlightStyle::Racing,
    FlightStyle::LongRange,
];

/// All presets, keyed by style
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresetTable {
    pub version: String,
    styles: FxHashMap<String, StylePreset>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct StylePreset {
    #[serde(flatten)]
    base: TuningPreset,
    #[serde(default)]
    modes: FxHashMap<String, ModeOverride>,
}

/// Partial preset applied on top of the base for one mode
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct ModeOverride {
    #[serde(default)]
    pid: Option<PidTable>,
    #[serde(default)]
    filter: Option<FilterSettings>,
    #[serde(default)]
    extra_tips: Vec<String>,
}

impl PresetTable {
    /// Parse the table compiled into the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_PRESETS).context("Failed to parse embedded preset table")
    }

    /// Load a replacement table from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset table: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse preset table: {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let table: PresetTable = serde_json::from_str(json)?;

        // Every known style must have an entry
        for style in REQUIRED_STYLES {
            if !table.styles.contains_key(style.key()) {
                anyhow::bail!("Style '{}' not found in preset table", style.key());
            }
        }

        Ok(table)
    }

    /// Resolve the preset for a style and mode.
    ///
    /// Falls back to `TuningPreset::fallback()` if the style has no entry.
    pub fn select(&self, style: FlightStyle, mode: Mode) -> TuningPreset {
        let Some(entry) = self.styles.get(style.key()) else {
            tracing::warn!("No preset for style '{}', using fallback", style.key());
            return TuningPreset::fallback();
        };

        let mut preset = entry.base.clone();
        if let Some(over) = entry.modes.get(mode.key()) {
            if let Some(pid) = &over.pid {
                preset.pid = pid.clone();
            }
            if let Some(filter) = over.filter {
                preset.filter = filter;
            }
            preset.tips.extend(over.extra_tips.iter().cloned());
        }

        preset
    }

    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(|k| k.as_str())
    }
}

/// Load the preset table for the server.
///
/// Tries `path` first, then the embedded table. Returns None only if both
/// fail, in which case callers use the fallback preset.
pub fn load_or_embedded(path: Option<&Path>) -> Option<PresetTable> {
    if let Some(path) = path {
        match PresetTable::load(path) {
            Ok(table) => {
                tracing::info!("Loaded preset table {} from {:?}", table.version, path);
                return Some(table);
            }
            Err(e) => {
                tracing::warn!("{:#}; falling back to embedded presets", e);
            }
        }
    }

    match PresetTable::embedded() {
        Ok(table) => {
            tracing::info!("Using embedded preset table {}", table.version);
            Some(table)
        }
        Err(e) => {
            tracing::warn!("Preset table unavailable: {:#}", e);
            None
        }
    }
}

/// Preset lookup that is total even without a table
pub fn select_preset(table: Option<&PresetTable>, style: FlightStyle, mode: Mode) -> TuningPreset {
    match table {
        Some(table) => table.select(style, mode),
        None => TuningPreset::fallback(),
    }
}
