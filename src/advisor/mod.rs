//! Style advisor
//!
//! Maps (style, mode) onto a tuning preset. Selection only; no tuning
//! values are computed here.

pub mod presets;

pub use presets::{load_or_embedded, select_preset, PresetTable};
