//! Muxfeed is the output-feeding stage of a media transcoding pipeline.
//!
//! It drains encoded samples from an upstream producer (decode-only, transcode, or direct
//! passthrough) and delivers them, in order, to a container muxer that assembles them into an
//! output bitstream. The crate owns the feeding protocol only; codecs, effects, and container
//! layout live behind the [`SampleSource`] and [`SampleSink`] seams.
//!
//! # Feeding protocol
//!
//! 1. **Register**: poll the source for its negotiated [`TrackFormat`] and register it with the
//!    muxer exactly once (fail fast when producer and muxer share no supported encoding)
//! 2. **Feed**: borrow one pending [`Sample`] per step, normalize its timestamp against the
//!    stream start offset, and offer it to the muxer (transient rejection means retry later,
//!    unchanged)
//! 3. **End**: once the source is drained, notify the muxer of end-of-track exactly once
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Non-blocking**: [`SampleFeeder::step`] never blocks or suspends; all waiting is expressed
//!   by returning `false` to a driver that re-invokes later.
//! - **Single ownership**: a sample buffer has exactly one owner at any time — the source before
//!   delivery, the feeder during one write attempt, the source again after release.
//! - **In-order delivery**: samples reach the muxer in exact retrieval order; there is no
//!   reordering buffer at this layer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod feed;
mod foundation;

pub use feed::feeder::SampleFeeder;
pub use feed::sink::{InMemorySink, SampleSink, WrittenSample};
pub use feed::source::{PassthroughSource, SampleSource};
pub use foundation::core::{Sample, TrackFormat, TrackKind};
pub use foundation::error::{MuxerError, MuxfeedError, MuxfeedResult};
