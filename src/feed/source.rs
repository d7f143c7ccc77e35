use crate::foundation::core::{Sample, TrackFormat};
use crate::foundation::error::MuxfeedResult;
use std::collections::VecDeque;

/// Upstream producer of terminal (already-encoded) samples for exactly one logical track.
///
/// Concrete producers (decode-only, transcode, passthrough) implement this trait and are
/// composed into a feeder by delegation. All methods are non-blocking: "not yet" is an absent
/// value, never a sentinel, so absence of data and faults are not confusable.
pub trait SampleSource {
    /// The negotiated output format, or `None` while negotiation is still in flight.
    ///
    /// Once returned, the format must stay stable for the track's lifetime.
    fn output_format(&mut self) -> Option<TrackFormat>;

    /// Whether every sample has been delivered and released.
    ///
    /// Pending samples still owned by the source must be drained before this turns `true`.
    fn is_ended(&self) -> bool;

    /// Borrow the next pending sample without consuming it.
    ///
    /// The source retains ownership; repeated calls return the same sample until
    /// [`release_sample`](Self::release_sample) is invoked.
    fn next_sample(&mut self) -> Option<&Sample>;

    /// Consume the sample last returned by [`next_sample`](Self::next_sample).
    ///
    /// Called exactly once per successfully written sample, and only after a successful
    /// `next_sample`.
    fn release_sample(&mut self);

    /// Advance internal work that does not touch the muxer (decoding, encoding, transforms).
    ///
    /// Returns whether progress was made. Pure passthrough producers have no internal work and
    /// keep the default.
    fn process(&mut self) -> MuxfeedResult<bool> {
        Ok(false)
    }
}

/// Producer that forwards already-encoded samples as-is.
///
/// This is the direct-passthrough variant of [`SampleSource`], and doubles as the in-memory
/// source for tests. Samples are delivered in push order; the format may be supplied up front
/// or deferred to model asynchronous negotiation.
#[derive(Debug, Default)]
pub struct PassthroughSource {
    format: Option<TrackFormat>,
    queue: VecDeque<Sample>,
    finished: bool,
}

impl PassthroughSource {
    /// Create a source whose format is already negotiated.
    pub fn new(format: TrackFormat) -> Self {
        Self {
            format: Some(format),
            queue: VecDeque::new(),
            finished: false,
        }
    }

    /// Create a source whose format is not yet available.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Supply the negotiated format after construction.
    pub fn set_format(&mut self, format: TrackFormat) {
        self.format = Some(format);
    }

    /// Queue one sample for delivery.
    pub fn push_sample(&mut self, sample: Sample) {
        self.queue.push_back(sample);
    }

    /// Mark end-of-stream: the source ends once the queue is drained.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Number of samples still owned by the source.
    pub fn pending_samples(&self) -> usize {
        self.queue.len()
    }
}

impl SampleSource for PassthroughSource {
    fn output_format(&mut self) -> Option<TrackFormat> {
        self.format.clone()
    }

    fn is_ended(&self) -> bool {
        self.finished && self.queue.is_empty()
    }

    fn next_sample(&mut self) -> Option<&Sample> {
        self.queue.front()
    }

    fn release_sample(&mut self) {
        self.queue.pop_front();
    }
}
