//! Plain data row types written by output backends.

use serde::Serialize;

/// Static description of one animated agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRow {
    pub agent_id:      u32,
    pub name:          String,
    /// Display colour as given on the route, e.g. `#e74c3c`.
    pub color:         String,
    pub symbol:        &'static str,
    pub stop_count:    usize,
    /// Frames before synchronization padding.
    pub raw_frames:    usize,
    /// Euclidean length of the waypoint polyline.
    pub path_distance: f64,
}

/// One agent at one global step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRow {
    pub agent_id:    u32,
    pub step:        u64,
    pub x:           f64,
    pub y:           f64,
    pub stop_index:  u32,
    pub is_dwelling: bool,
    pub is_finished: bool,
}
