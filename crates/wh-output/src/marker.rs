//! Rendering adapter: `(agent, step)` to display attributes.
//!
//! A renderer asks for one marker per agent per step and draws it.  Nothing
//! here depends on the order in which a plotting library stores its traces;
//! the agent id alone selects the route's colour and symbol.

use wh_anim::{Animation, Frame, FramePhase};
use wh_core::{AgentId, MarkerSymbol, Point};
use wh_layout::RouteDefinition;

/// What the marker should convey at one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerState {
    Moving,
    /// Holding at a pick stop.
    Picking,
    /// Back at the depot; the route is done.
    Finished,
}

impl From<&Frame> for MarkerState {
    fn from(frame: &Frame) -> Self {
        match frame.phase() {
            FramePhase::Moving   => MarkerState::Moving,
            FramePhase::Dwelling => MarkerState::Picking,
            FramePhase::Finished => MarkerState::Finished,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle<'a> {
    pub color:  &'a str,
    pub symbol: MarkerSymbol,
    pub state:  MarkerState,
    pub pos:    Point,
}

/// Display attributes of `agent` at `step`, or `None` when either is out of
/// range.
pub fn marker_at<'a>(
    animation: &Animation,
    routes:    &'a [RouteDefinition],
    agent:     AgentId,
    step:      usize,
) -> Option<MarkerStyle<'a>> {
    let route = routes.get(agent.index())?;
    let frame = animation.frame(agent, step)?;
    Some(MarkerStyle {
        color:  &route.color,
        symbol: route.symbol,
        state:  MarkerState::from(frame),
        pos:    frame.pos,
    })
}
