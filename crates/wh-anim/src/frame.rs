//! Per-agent, per-step animation state.

use wh_core::Point;

/// What an agent is doing at one time step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FramePhase {
    /// Travelling along a leg (includes the leg's start and end frames).
    Moving,
    /// Holding position at a pick stop.
    Dwelling,
    /// Back at the depot with nothing left to do; held until the slowest
    /// agent completes.
    Finished,
}

/// One agent at one global time step.
///
/// `is_dwelling` and `is_finished` come straight from segment bookkeeping in
/// the synthesizer; they are never re-derived by comparing positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub pos: Point,

    /// Completed stop-to-stop legs so far.  Non-decreasing along a sequence.
    pub stop_index: u32,

    /// `true` while holding position at a pick stop.
    pub is_dwelling: bool,

    /// `true` on the padding frames after the agent is back at the depot.
    pub is_finished: bool,
}

impl Frame {
    #[inline]
    pub fn moving(pos: Point, stop_index: u32) -> Self {
        Self { pos, stop_index, is_dwelling: false, is_finished: false }
    }

    #[inline]
    pub fn dwelling(pos: Point, stop_index: u32) -> Self {
        Self { pos, stop_index, is_dwelling: true, is_finished: false }
    }

    /// The frame used to pad a completed sequence: same position and stop
    /// index as `last`, never dwelling.
    #[inline]
    pub fn hold(last: &Frame, is_finished: bool) -> Self {
        Self {
            pos:         last.pos,
            stop_index:  last.stop_index,
            is_dwelling: false,
            is_finished,
        }
    }

    pub fn phase(&self) -> FramePhase {
        if self.is_finished {
            FramePhase::Finished
        } else if self.is_dwelling {
            FramePhase::Dwelling
        } else {
            FramePhase::Moving
        }
    }
}
