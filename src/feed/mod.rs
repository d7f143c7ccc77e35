//! The sample feeding stage.
//!
//! A [`feeder::SampleFeeder`] drives one track from registration through termination, pulling
//! encoded samples from a [`source::SampleSource`] and delivering them to a
//! [`sink::SampleSink`], one unit of work per step.

/// Track feeder state machine.
pub mod feeder;
/// Container muxer contract and built-in sinks.
pub mod sink;
/// Upstream sample producer contract and built-in sources.
pub mod source;
