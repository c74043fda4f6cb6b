//! The Frame Synthesizer: raw expansion, then timeline synchronization.

use tracing::debug;

use wh_core::{AgentId, AnimationConfig, Point};

use crate::segment::expand;
use crate::{AnimError, AnimResult, Frame};

// ── FrameSequence ─────────────────────────────────────────────────────────────

/// One agent's frames over the whole shared timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    frames:  Vec<Frame>,
    raw_len: usize,
}

impl FrameSequence {
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Always equal to the owning [`Animation::max_frames`].
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames produced by the agent's own route, before padding.
    #[inline]
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Number of padding frames appended to reach the shared length.
    #[inline]
    pub fn padding(&self) -> usize {
        self.frames.len() - self.raw_len
    }

    #[inline]
    pub fn get(&self, step: usize) -> Option<&Frame> {
        self.frames.get(step)
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// First step at which the agent is marked finished, if any.
    pub fn finished_from(&self) -> Option<usize> {
        self.frames.iter().position(|f| f.is_finished)
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.frames.iter().map(|f| f.pos)
    }
}

// ── Animation ─────────────────────────────────────────────────────────────────

/// Synchronized frame sequences for every agent, indexed by `(agent, step)`.
///
/// Agent `k` corresponds to the `k`-th path passed to [`synthesize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Animation {
    sequences:  Vec<FrameSequence>,
    max_frames: usize,
}

impl Animation {
    /// No agents, zero frames.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn max_frames(&self) -> usize {
        self.max_frames
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.sequences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn sequences(&self) -> &[FrameSequence] {
        &self.sequences
    }

    pub fn sequence(&self, agent: AgentId) -> Option<&FrameSequence> {
        self.sequences.get(agent.index())
    }

    /// The frame of `agent` at global `step`.
    #[inline]
    pub fn frame(&self, agent: AgentId, step: usize) -> Option<&Frame> {
        self.sequences.get(agent.index())?.get(step)
    }

    /// Every agent's frame at `step`, in agent order.  Empty past the end of
    /// the timeline.
    pub fn step(&self, step: usize) -> impl Iterator<Item = &Frame> + '_ {
        self.sequences.iter().filter_map(move |s| s.get(step))
    }

    /// Step at which `agent` is first shown finished, or `None` for the
    /// agent(s) that define the timeline length.
    pub fn finish_step(&self, agent: AgentId) -> Option<usize> {
        self.sequence(agent)?.finished_from()
    }
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

/// Expand and synchronize one frame sequence per path.
///
/// `paths[k]` becomes agent `AgentId(k)`.  An empty `paths` slice yields
/// [`Animation::empty`].
///
/// # Errors
///
/// Checked before any frame is produced:
///
/// - [`AnimError::InvalidArgument`] if `steps_between < 1`.
/// - [`AnimError::ShortPath`] if any path has fewer than two waypoints.
pub fn synthesize<P>(paths: &[P], steps_between: usize, dwell_time: usize) -> AnimResult<Animation>
where
    P: AsRef<[Point]> + Sync,
{
    if steps_between < 1 {
        return Err(AnimError::InvalidArgument(format!(
            "steps_between must be >= 1, got {steps_between}"
        )));
    }
    for (i, path) in paths.iter().enumerate() {
        let waypoints = path.as_ref().len();
        if waypoints < 2 {
            return Err(AnimError::ShortPath { agent: AgentId(i as u32), waypoints });
        }
    }
    if paths.is_empty() {
        return Ok(Animation::empty());
    }

    let raw = expand_all(paths, steps_between, dwell_time);
    let max_frames = raw.iter().map(Vec::len).max().unwrap_or(0);

    let sequences: Vec<FrameSequence> = raw
        .into_iter()
        .zip(paths)
        .map(|(frames, path)| pad(frames, path.as_ref(), max_frames))
        .collect();

    debug!(
        agents = sequences.len(),
        max_frames,
        steps_between,
        dwell_time,
        "synthesized route animation"
    );

    Ok(Animation { sequences, max_frames })
}

/// [`synthesize`] with parameters taken from a validated [`AnimationConfig`].
///
/// # Errors
///
/// [`AnimError::Config`] if the config fails
/// [`AnimationConfig::validate`], plus everything [`synthesize`] returns.
pub fn synthesize_with<P>(paths: &[P], config: &AnimationConfig) -> AnimResult<Animation>
where
    P: AsRef<[Point]> + Sync,
{
    config.validate()?;
    let steps_between = usize::try_from(config.steps_between)
        .map_err(|e| AnimError::InvalidArgument(format!("steps_between: {e}")))?;
    let dwell_time = usize::try_from(config.dwell_time)
        .map_err(|e| AnimError::InvalidArgument(format!("dwell_time: {e}")))?;
    synthesize(paths, steps_between, dwell_time)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[cfg(not(feature = "parallel"))]
fn expand_all<P>(paths: &[P], steps_between: usize, dwell_time: usize) -> Vec<Vec<Frame>>
where
    P: AsRef<[Point]> + Sync,
{
    paths
        .iter()
        .map(|p| expand(p.as_ref(), steps_between, dwell_time))
        .collect()
}

#[cfg(feature = "parallel")]
fn expand_all<P>(paths: &[P], steps_between: usize, dwell_time: usize) -> Vec<Vec<Frame>>
where
    P: AsRef<[Point]> + Sync,
{
    use rayon::prelude::*;

    // `collect` on an indexed parallel iterator preserves input order.
    paths
        .par_iter()
        .map(|p| expand(p.as_ref(), steps_between, dwell_time))
        .collect()
}

/// Repeat the final frame until the sequence is `max_frames` long.
///
/// Padding is marked finished when the path closes on its first waypoint
/// (the depot), which every resolved route does.
fn pad(mut frames: Vec<Frame>, path: &[Point], max_frames: usize) -> FrameSequence {
    let raw_len = frames.len();
    if let Some(last) = frames.last().copied() {
        let closes = path.first() == path.last();
        frames.resize(max_frames, Frame::hold(&last, closes));
    }
    FrameSequence { frames, raw_len }
}
