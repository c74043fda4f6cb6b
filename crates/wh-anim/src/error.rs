use thiserror::Error;

use wh_core::{AgentId, CoreError};

#[derive(Debug, Error)]
pub enum AnimError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{agent} path has {waypoints} waypoint(s); at least 2 are required")]
    ShortPath { agent: AgentId, waypoints: usize },

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type AnimResult<T> = Result<T, AnimError>;
