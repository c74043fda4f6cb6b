//! CSV layout loader.
//!
//! # CSV format
//!
//! One row per location, exported from the layout sheet.  Extra columns are
//! ignored.
//!
//! ```csv
//! Location,x,y
//! Start,0,0
//! Rack 1,10,6
//! Rack 2,20,6
//! ```
//!
//! **`Location`** field:
//!
//! | Value     | Meaning                   |
//! |-----------|---------------------------|
//! | `Start`   | the depot, `LocationId(0)`|
//! | `Rack N`  | `LocationId(N)`           |
//! | *u32*     | `LocationId(n)`           |
//!
//! Fields are trimmed.  Rows with a blank `Location`, `x` or `y` are skipped
//! with a warning, the same way the spreadsheet export drops incomplete rows.
//! A non-numeric coordinate is a parse error; `NaN` or infinite coordinates
//! are [`LayoutError::InvalidCoordinate`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use wh_core::{LocationId, Point};

use crate::{LayoutError, LocationTable, LocationTableBuilder};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LayoutRecord {
    #[serde(rename = "Location")]
    location: String,
    x:        Option<f64>,
    y:        Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`LocationTable`] from a CSV file.
pub fn load_layout_csv(path: &Path) -> Result<LocationTable, LayoutError> {
    let file = std::fs::File::open(path).map_err(LayoutError::Io)?;
    load_layout_reader(file)
}

/// Like [`load_layout_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for layouts embedded in
/// the application binary.
pub fn load_layout_reader<R: Read>(reader: R) -> Result<LocationTable, LayoutError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut builder = LocationTableBuilder::new();
    let mut skipped = 0usize;

    for (row, result) in csv_reader.deserialize::<LayoutRecord>().enumerate() {
        let record = result.map_err(|e| LayoutError::Parse(e.to_string()))?;
        if record.location.is_empty() {
            warn!(row, "skipping layout row with blank location");
            skipped += 1;
            continue;
        }
        let (Some(x), Some(y)) = (record.x, record.y) else {
            warn!(row, location = %record.location, "skipping layout row with blank coordinate");
            skipped += 1;
            continue;
        };
        let id = LocationId::from_label(&record.location)?;
        builder.add(id, record.location, Point::new(x, y));
    }

    let table = builder.build()?;
    info!(locations = table.len(), skipped, "loaded warehouse layout");
    Ok(table)
}
