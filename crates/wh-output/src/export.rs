//! `AnimationExporter<W>`: turns an `Animation` into rows for any
//! `AnimationWriter`.

use tracing::debug;

use wh_anim::Animation;
use wh_layout::{RouteDefinition, WaypointPath};

use crate::row::{AgentRow, FrameRow};
use crate::writer::AnimationWriter;
use crate::{OutputError, OutputResult};

/// Counts of what one [`AnimationExporter::export`] call wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub agents:     usize,
    pub frame_rows: usize,
}

/// Writes agent descriptions and every synchronized frame to `W`.
pub struct AnimationExporter<W: AnimationWriter> {
    writer: W,
}

impl<W: AnimationWriter> AnimationExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one agent row per route, then every frame agent by agent, then
    /// finish the writer.
    ///
    /// `routes[k]`, `paths[k]` and the `k`-th frame sequence describe the
    /// same agent.
    pub fn export(
        &mut self,
        routes:    &[RouteDefinition],
        paths:     &[WaypointPath],
        animation: &Animation,
    ) -> OutputResult<ExportSummary> {
        let sequences = animation.sequences();
        if routes.len() != paths.len() || routes.len() != sequences.len() {
            return Err(OutputError::AgentCountMismatch {
                routes:    routes.len(),
                paths:     paths.len(),
                sequences: sequences.len(),
            });
        }

        let agents: Vec<AgentRow> = routes
            .iter()
            .zip(paths)
            .zip(sequences)
            .enumerate()
            .map(|(i, ((route, path), seq))| AgentRow {
                agent_id:      i as u32,
                name:          route.name.clone(),
                color:         route.color.clone(),
                symbol:        route.symbol.as_str(),
                stop_count:    route.stop_count(),
                raw_frames:    seq.raw_len(),
                path_distance: path.total_distance(),
            })
            .collect();
        self.writer.write_agents(&agents)?;

        let mut frame_rows = 0;
        let mut batch = Vec::with_capacity(animation.max_frames());
        for (i, seq) in sequences.iter().enumerate() {
            batch.clear();
            batch.extend(seq.frames().iter().enumerate().map(|(step, f)| FrameRow {
                agent_id:    i as u32,
                step:        step as u64,
                x:           f.pos.x,
                y:           f.pos.y,
                stop_index:  f.stop_index,
                is_dwelling: f.is_dwelling,
                is_finished: f.is_finished,
            }));
            self.writer.write_frames(&batch)?;
            frame_rows += batch.len();
        }
        self.writer.finish()?;

        debug!(agents = agents.len(), frame_rows, "exported animation");
        Ok(ExportSummary { agents: agents.len(), frame_rows })
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
