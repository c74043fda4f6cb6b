//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per loadform scenario, flattened from the comparison sheet.
//!
//! ```csv
//! scenario,distance_optimized,distance_current,time_optimized,time_current
//! Loadform 1,412.5,655.0,0.210,0.335
//! Loadform 2,388.0,702.4,0.198,0.351
//! ```
//!
//! Blank lines are ignored.  Any row that fails to parse is an error; unlike
//! the layout loader there is nothing sensible to skip to.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::{MetricsError, ScenarioRecord, ScenarioTable};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioCsvRecord {
    scenario:           String,
    distance_optimized: f64,
    distance_current:   f64,
    time_optimized:     f64,
    time_current:       f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ScenarioTable`] from a CSV file.
pub fn load_scenarios_csv(path: &Path) -> Result<ScenarioTable, MetricsError> {
    let file = std::fs::File::open(path).map_err(MetricsError::Io)?;
    load_scenarios_reader(file)
}

/// Like [`load_scenarios_csv`] but accepts any `Read` source.
pub fn load_scenarios_reader<R: Read>(reader: R) -> Result<ScenarioTable, MetricsError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let records = csv_reader
        .deserialize::<ScenarioCsvRecord>()
        .map(|row| {
            let r = row.map_err(|e| MetricsError::Parse(e.to_string()))?;
            Ok(ScenarioRecord {
                name:               r.scenario,
                distance_optimized: r.distance_optimized,
                distance_current:   r.distance_current,
                time_optimized:     r.time_optimized,
                time_current:       r.time_current,
            })
        })
        .collect::<Result<Vec<_>, MetricsError>>()?;

    let table = ScenarioTable::new(records)?;
    info!(scenarios = table.len(), "loaded loadform scenarios");
    Ok(table)
}
