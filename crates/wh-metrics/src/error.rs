use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("scenario {0:?} not found")]
    ScenarioNotFound(String),

    #[error("no scenario data found")]
    NoScenarios,

    #[error("scenario {0:?} listed more than once")]
    DuplicateScenario(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MetricsResult<T> = Result<T, MetricsError>;
