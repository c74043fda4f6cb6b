//! Layout-subsystem error type.

use thiserror::Error;

use wh_core::{CoreError, LocationId};

/// Errors produced by `wh-layout`.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("location {0} not found in layout")]
    MissingLocation(LocationId),

    #[error("location {0} defined more than once")]
    DuplicateLocation(LocationId),

    #[error("location {0} has a non-finite coordinate")]
    InvalidCoordinate(LocationId),

    #[error("layout has no depot (location 0 / \"Start\")")]
    MissingDepot,

    #[error("layout parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
