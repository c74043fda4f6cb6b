//! The `AnimationWriter` trait implemented by all backend writers.

use crate::{AgentRow, FrameRow, OutputResult};

/// Trait implemented by the CSV and JSON writers.
pub trait AnimationWriter {
    /// Write the per-agent description rows.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Write a batch of frame rows.
    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
