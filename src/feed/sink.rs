use crate::foundation::core::{TrackFormat, TrackKind};
use crate::foundation::error::MuxerError;

/// Container muxer accepting one format registration per track, ordered sample writes, and
/// end-of-track signals. A single sink is shared across every track of an output.
///
/// Ordering contract: `write_sample` is called in retrieval order within a track. A `false`
/// return signals transient rejection (backpressure); the caller retries the same sample later,
/// unchanged.
pub trait SampleSink {
    /// Whether the sink can accept `format` at all.
    ///
    /// This is the binary compatible/not-compatible signal; the details of capability
    /// negotiation live inside the sink.
    fn supports_format(&self, format: &TrackFormat) -> bool;

    /// Register one track. Called at most once per track, before any write for it.
    fn add_track(&mut self, format: &TrackFormat) -> Result<(), MuxerError>;

    /// Offer one sample. Returns `Ok(false)` to reject transiently (buffer full).
    fn write_sample(
        &mut self,
        kind: TrackKind,
        payload: &[u8],
        key_frame: bool,
        pts_us: i64,
    ) -> Result<bool, MuxerError>;

    /// Signal that no further samples will arrive for `kind`.
    fn end_track(&mut self, kind: TrackKind);
}

/// One recorded `write_sample` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenSample {
    /// Track the sample was written to.
    pub kind: TrackKind,
    /// Payload bytes as received.
    pub payload: Vec<u8>,
    /// Key-frame flag as received.
    pub key_frame: bool,
    /// Timestamp as received (already offset-adjusted by the feeder).
    pub pts_us: i64,
}

/// In-memory sink for tests and debugging.
///
/// Records every accepted call in order. Codec support and transient write rejection are
/// scriptable so feeding scenarios can be replayed deterministically.
#[derive(Debug, Default)]
pub struct InMemorySink {
    supported: Option<Vec<String>>,
    reject_next: usize,
    tracks: Vec<TrackFormat>,
    samples: Vec<WrittenSample>,
    ended: Vec<TrackKind>,
}

impl InMemorySink {
    /// Create a sink that accepts every codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that only supports the given codec identifiers.
    pub fn with_supported(codecs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            supported: Some(codecs.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Reject the next `n` writes with backpressure before accepting again.
    pub fn reject_next(&mut self, n: usize) {
        self.reject_next = n;
    }

    /// Formats registered so far, in order.
    pub fn tracks(&self) -> &[TrackFormat] {
        &self.tracks
    }

    /// Samples accepted so far, in order.
    pub fn samples(&self) -> &[WrittenSample] {
        &self.samples
    }

    /// Tracks ended so far, in order.
    pub fn ended(&self) -> &[TrackKind] {
        &self.ended
    }
}

impl SampleSink for InMemorySink {
    fn supports_format(&self, format: &TrackFormat) -> bool {
        match &self.supported {
            Some(codecs) => codecs.iter().any(|c| *c == format.codec),
            None => true,
        }
    }

    fn add_track(&mut self, format: &TrackFormat) -> Result<(), MuxerError> {
        self.tracks.push(format.clone());
        Ok(())
    }

    fn write_sample(
        &mut self,
        kind: TrackKind,
        payload: &[u8],
        key_frame: bool,
        pts_us: i64,
    ) -> Result<bool, MuxerError> {
        if self.reject_next > 0 {
            self.reject_next -= 1;
            return Ok(false);
        }
        self.samples.push(WrittenSample {
            kind,
            payload: payload.to_vec(),
            key_frame,
            pts_us,
        });
        Ok(true)
    }

    fn end_track(&mut self, kind: TrackKind) {
        self.ended.push(kind);
    }
}
