//! `wh-output` — rendering adapter and animation exporters for rust_wh.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                     |
//! |-----------|---------|-----------------------------------|
//! | *(none)*  | CSV     | `agents.csv`, `agent_frames.csv`  |
//! | `json`    | JSON    | `animation.json`                  |
//!
//! Both implement [`AnimationWriter`] and are driven by
//! [`AnimationExporter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use wh_output::{AnimationExporter, CsvWriter};
//!
//! let mut exporter = AnimationExporter::new(CsvWriter::new(Path::new("./output"))?);
//! let summary = exporter.export(&routes, &paths, &animation)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod marker;
pub mod row;
pub mod writer;

#[cfg(feature = "json")]
pub mod json;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{AnimationExporter, ExportSummary};
pub use marker::{marker_at, MarkerState, MarkerStyle};
pub use row::{AgentRow, FrameRow};
pub use writer::AnimationWriter;

#[cfg(feature = "json")]
pub use crate::json::JsonWriter;
