//! Position-provider errors.

use thiserror::Error;

use crate::Body;

/// Errors from a [`PositionProvider`](crate::PositionProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The backend cannot answer at all (offline, not configured, failed to load).
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    /// The backend does not model this body.
    #[error("unsupported body: {0:?}")]
    UnsupportedBody(Body),
    /// Time value outside the backend's validity range, or non-finite.
    #[error("invalid time: JD {jd_ut} ({reason})")]
    InvalidTime { jd_ut: f64, reason: &'static str },
    /// Observer location non-finite or outside geographic bounds.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}

impl ProviderError {
    /// Whether a fallback backend may answer instead.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
