//! Error types for chart orchestration.

use kundli_core::ProviderError;
use kundli_time::TimeError;
use kundli_vedic::VedicError;
use thiserror::Error;

/// Input rejected before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Vedic(VedicError),
    #[error("{0}")]
    Request(&'static str),
}

/// Errors from chart operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("place not found: {0}")]
    PlaceNotFound(String),
    #[error("JD {query_jd} outside dasha horizon [{start_jd}, {end_jd})")]
    OutOfRange {
        query_jd: f64,
        start_jd: f64,
        end_jd: f64,
    },
    #[error("position provider: {0}")]
    Provider(#[from] ProviderError),
    #[error("configuration: {0}")]
    Config(String),
}

impl ChartError {
    pub(crate) fn request(msg: &'static str) -> Self {
        Self::Validation(ValidationError::Request(msg))
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Validation(ValidationError::Time(e))
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::OutOfRange {
                query_jd,
                start_jd,
                end_jd,
            } => Self::OutOfRange {
                query_jd,
                start_jd,
                end_jd,
            },
            other => Self::Validation(ValidationError::Vedic(other)),
        }
    }
}
