//! JSON output backend.
//!
//! Buffers every row and writes a single `animation.json` on
//! [`finish`][AnimationWriter::finish]:
//!
//! ```json
//! { "max_frames": 49, "agents": [ ... ], "frames": [ ... ] }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::writer::AnimationWriter;
use crate::{AgentRow, FrameRow, OutputResult};

#[derive(Serialize)]
struct AnimationDocument<'a> {
    max_frames: u64,
    agents:     &'a [AgentRow],
    frames:     &'a [FrameRow],
}

/// Writes an animation as one JSON document.
pub struct JsonWriter {
    path:     PathBuf,
    agents:   Vec<AgentRow>,
    frames:   Vec<FrameRow>,
    finished: bool,
}

impl JsonWriter {
    /// Target `dir/animation.json`.  The file is created on `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("output directory {} does not exist", dir.display()),
            )
            .into());
        }
        Ok(Self {
            path:     dir.join("animation.json"),
            agents:   Vec::new(),
            frames:   Vec::new(),
            finished: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnimationWriter for JsonWriter {
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        self.agents.extend_from_slice(rows);
        Ok(())
    }

    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        self.frames.extend_from_slice(rows);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let doc = AnimationDocument {
            max_frames: self.frames.iter().map(|f| f.step + 1).max().unwrap_or(0),
            agents:     &self.agents,
            frames:     &self.frames,
        };
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut out, &doc)?;
        out.flush()?;
        Ok(())
    }
}
