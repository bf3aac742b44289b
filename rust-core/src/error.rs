//! Error types shared by the statistics routines

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported option: {0}")]
    UnsupportedOption(String),

    #[error("Distribution error: {0}")]
    Distribution(String),
}

pub type StatsResult<T> = Result<T, StatsError>;
