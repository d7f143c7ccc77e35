/// Convenience result type used across Muxfeed.
pub type MuxfeedResult<T> = Result<T, MuxfeedError>;

/// Fault raised by a container muxer implementation during track registration or sample write.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct MuxerError(#[from] anyhow::Error);

impl MuxerError {
    /// Build a [`MuxerError`] from a plain message.
    pub fn msg(msg: impl Into<String>) -> Self {
        Self(anyhow::Error::msg(msg.into()))
    }
}

/// Top-level error taxonomy surfaced by the feeding stage.
///
/// Transient no-progress conditions (format pending, no sample pending, sink backpressure) are
/// not errors; they are reported by `step` returning `false`.
#[derive(thiserror::Error, Debug)]
pub enum MuxfeedError {
    /// No encoding is supported by both the upstream producer and the muxer.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The muxer failed while registering a track or writing a sample.
    #[error("muxing failed: {0}")]
    Muxing(#[source] MuxerError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MuxfeedError {
    /// Build a [`MuxfeedError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Stable machine-readable code classifying the fault.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "encoding-format-unsupported",
            Self::Muxing(_) => "muxing-failed",
            Self::Other(_) => "unspecified",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
