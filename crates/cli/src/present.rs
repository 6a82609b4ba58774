//! Scene sinks for terminal output.
//!
//! The CLI has no window; it presents a scene either as JSON for an external
//! viewer or as a short human-readable digest. A failed write means nobody
//! is listening, which surfaces as `SimError::RenderingUnavailable`.

use std::io::Write;

use aerowave_core::{RaySegment, Scene, SceneSink, SimError};

fn mean_length(rays: &[RaySegment]) -> f64 {
    if rays.is_empty() {
        return 0.0;
    }
    rays.iter().map(RaySegment::length).sum::<f64>() / rays.len() as f64
}

fn unavailable(e: impl std::fmt::Display) -> SimError {
    SimError::RenderingUnavailable(e.to_string())
}

/// Writes each scene as one pretty-printed JSON document.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SceneSink for JsonSink<W> {
    fn present(&mut self, scene: &Scene) -> Result<(), SimError> {
        serde_json::to_writer_pretty(&mut self.out, scene).map_err(unavailable)?;
        writeln!(self.out).map_err(unavailable)
    }
}

/// Writes counts, bounds and overlay text.
pub struct DigestSink<W: Write> {
    out: W,
}

impl<W: Write> DigestSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SceneSink for DigestSink<W> {
    fn present(&mut self, scene: &Scene) -> Result<(), SimError> {
        let out = &mut self.out;
        writeln!(out, "points:    {}", scene.cloud.len()).map_err(unavailable)?;
        if let Some((lo, hi)) = scene.cloud.bounds() {
            writeln!(
                out,
                "bounds:    ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
                lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
            )
            .map_err(unavailable)?;
        }
        if let Some(field) = &scene.field {
            writeln!(
                out,
                "vectors:   {} (max |v| {:.4})",
                field.len(),
                field.max_magnitude()
            )
            .map_err(unavailable)?;
        }
        if !scene.incoming.is_empty() || !scene.scattered.is_empty() {
            writeln!(
                out,
                "rays:      {} incoming, {} scattered",
                scene.incoming.len(),
                scene.scattered.len()
            )
            .map_err(unavailable)?;
            writeln!(
                out,
                "ray span:  {:.3} incoming, {:.3} scattered (mean length)",
                mean_length(&scene.incoming),
                mean_length(&scene.scattered)
            )
            .map_err(unavailable)?;
        }
        for line in &scene.overlay {
            writeln!(out, "{line}").map_err(unavailable)?;
        }
        Ok(())
    }
}
