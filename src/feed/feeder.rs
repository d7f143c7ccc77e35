use crate::feed::sink::SampleSink;
use crate::feed::source::SampleSource;
use crate::foundation::core::TrackKind;
use crate::foundation::error::{MuxfeedError, MuxfeedResult};

/// Track lifecycle within the muxer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrackState {
    Unregistered,
    Registered,
    Ended,
}

/// Drives one track's output from registration through termination, one discrete unit of work
/// per invocation.
///
/// The feeder owns its upstream [`SampleSource`]; the muxer is shared across tracks and borrowed
/// per call. Execution is cooperative: [`step`](Self::step) never blocks, and all waiting is
/// expressed by returning `false` to a driver that re-invokes later.
#[derive(Debug)]
pub struct SampleFeeder<S> {
    source: S,
    kind: TrackKind,
    stream_start_us: i64,
    state: TrackState,
}

impl<S: SampleSource> SampleFeeder<S> {
    /// Create a feeder for one `kind` track.
    ///
    /// `stream_start_us` is fixed for the track's lifetime and subtracted from every sample's
    /// timestamp before it is written.
    pub fn new(kind: TrackKind, stream_start_us: i64, source: S) -> Self {
        Self {
            source,
            kind,
            stream_start_us,
            state: TrackState::Unregistered,
        }
    }

    /// The media kind of the track this feeder drives.
    pub fn track_kind(&self) -> TrackKind {
        self.kind
    }

    /// Whether the track's format has been registered with the muxer.
    pub fn is_registered(&self) -> bool {
        self.state != TrackState::Unregistered
    }

    /// Whether the track has been ended at the muxer.
    pub fn is_ended(&self) -> bool {
        self.state == TrackState::Ended
    }

    /// Borrow the upstream source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the upstream source, e.g. to queue data into a passthrough producer.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Attempt to pass encoded data to the muxer, returning whether it may be possible to pass
    /// more data immediately by calling again.
    ///
    /// One invocation performs at most one unit of work: registering the track's format, ending
    /// the track, or writing a single sample. Transient conditions (format pending, no sample
    /// pending, muxer backpressure) return `Ok(false)` without a fault; a rejected sample stays
    /// owned by the source and is retried unchanged on a later step.
    #[tracing::instrument(skip(self, muxer))]
    pub fn step(&mut self, muxer: &mut dyn SampleSink) -> MuxfeedResult<bool> {
        if self.state == TrackState::Unregistered {
            let Some(format) = self.source.output_format() else {
                return Ok(false);
            };
            if format.kind != self.kind {
                return Err(MuxfeedError::configuration(format!(
                    "negotiated format kind {:?} does not match track kind {:?}",
                    format.kind, self.kind
                )));
            }
            if !muxer.supports_format(&format) {
                return Err(MuxfeedError::configuration(format!(
                    "no encoding is supported by both the producer and the muxer (codec '{}')",
                    format.codec
                )));
            }
            muxer.add_track(&format).map_err(MuxfeedError::Muxing)?;
            self.state = TrackState::Registered;
            tracing::debug!(kind = ?self.kind, codec = %format.codec, "track registered");
        }

        if self.state == TrackState::Ended {
            return Ok(false);
        }

        if self.source.is_ended() {
            muxer.end_track(self.kind);
            self.state = TrackState::Ended;
            tracing::debug!(kind = ?self.kind, "track ended");
            return Ok(false);
        }

        let Some(sample) = self.source.next_sample() else {
            return Ok(false);
        };
        let pts_us = sample.pts_us - self.stream_start_us;
        let accepted = muxer
            .write_sample(self.kind, &sample.payload, sample.key_frame, pts_us)
            .map_err(MuxfeedError::Muxing)?;
        if !accepted {
            return Ok(false);
        }

        self.source.release_sample();
        Ok(true)
    }

    /// One unit of overall pipeline work: feed the muxer, or failing that, let the source
    /// advance its internal (pre-muxer) work.
    ///
    /// Returns whether either side made progress.
    pub fn process(&mut self, muxer: &mut dyn SampleSink) -> MuxfeedResult<bool> {
        Ok(self.step(muxer)? || self.source.process()?)
    }

    /// Step until no further immediate progress is possible, returning the number of samples
    /// the muxer accepted.
    ///
    /// Stops at backpressure, at end-of-stream, and while data is pending upstream; the caller
    /// decides when to come back.
    #[tracing::instrument(skip(self, muxer))]
    pub fn drain(&mut self, muxer: &mut dyn SampleSink) -> MuxfeedResult<u64> {
        let mut written = 0;
        while self.step(muxer)? {
            written += 1;
        }
        Ok(written)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feed/feeder.rs"]
mod tests;
