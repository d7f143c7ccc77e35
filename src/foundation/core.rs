/// Media kind identifying one logical track within a multiplexed output.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum TrackKind {
    /// Audio track.
    Audio,
    /// Video track.
    Video,
    /// Any other track kind (subtitles, metadata, ...).
    Other,
}

/// Negotiated output format for one track.
///
/// The descriptor is opaque to the feeding stage: it is produced by upstream negotiation and
/// handed to the muxer verbatim. It may be unavailable for several steps before negotiation
/// completes, and is registered with the muxer exactly once per track.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackFormat {
    /// Track kind this format belongs to.
    pub kind: TrackKind,
    /// Codec identifier, e.g. `"h264"` or `"aac"`.
    pub codec: String,
    /// Codec-specific initialization blobs (parameter sets, codec config).
    pub init_data: Vec<Vec<u8>>,
}

impl TrackFormat {
    /// Create a format with no initialization data.
    pub fn new(kind: TrackKind, codec: impl Into<String>) -> Self {
        Self {
            kind,
            codec: codec.into(),
            init_data: Vec::new(),
        }
    }
}

/// One encoded access unit.
///
/// Samples are owned by the upstream source and only borrowed by the feeder for the duration of
/// a single write attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Presentation timestamp in microseconds, relative to the source.
    pub pts_us: i64,
    /// Encoded payload bytes.
    pub payload: Vec<u8>,
    /// Whether this sample is a key frame (sync sample).
    pub key_frame: bool,
}

impl Sample {
    /// Create a sample.
    pub fn new(pts_us: i64, payload: impl Into<Vec<u8>>, key_frame: bool) -> Self {
        Self {
            pts_us,
            payload: payload.into(),
            key_frame,
        }
    }
}
