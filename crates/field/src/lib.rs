#![deny(unsafe_code)]
//! Field sampling for aerowave.
//!
//! - [`flow`]: closed-form vector fields over a point cloud (radial sink,
//!   drift stream)
//! - [`wave`]: random incoming rays and their ground-plane reflections
//! - [`stats`]: ground-hit percentage over a batch of reflections

pub mod flow;
pub mod stats;
pub mod wave;

pub use flow::{DriftStream, FlowKind, FlowSource, RadialSink};
pub use stats::{summarize, ReflectionSummary};
pub use wave::{reflect, sample_waves, Pairing, WaveDraw, WaveSet};
