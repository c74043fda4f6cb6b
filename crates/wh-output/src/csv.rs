//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agents.csv`
//! - `agent_frames.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::AnimationWriter;
use crate::{AgentRow, FrameRow, OutputResult};

pub const AGENT_HEADER: [&str; 7] =
    ["agent_id", "name", "color", "symbol", "stop_count", "raw_frames", "path_distance"];

pub const FRAME_HEADER: [&str; 7] =
    ["agent_id", "step", "x", "y", "stop_index", "is_dwelling", "is_finished"];

/// Writes an animation to two CSV files.  Booleans are written as `0`/`1`.
pub struct CsvWriter {
    agents:   Writer<File>,
    frames:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record(AGENT_HEADER)?;

        let mut frames = Writer::from_path(dir.join("agent_frames.csv"))?;
        frames.write_record(FRAME_HEADER)?;

        Ok(Self { agents, frames, finished: false })
    }
}

impl AnimationWriter for CsvWriter {
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.name.clone(),
                row.color.clone(),
                row.symbol.to_owned(),
                row.stop_count.to_string(),
                row.raw_frames.to_string(),
                format!("{:.3}", row.path_distance),
            ])?;
        }
        Ok(())
    }

    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.stop_index.to_string(),
                (row.is_dwelling as u8).to_string(),
                (row.is_finished as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.frames.flush()?;
        Ok(())
    }
}
