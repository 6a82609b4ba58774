//! Incoming and scattered wave rays.
//!
//! One draw takes five numbers from the random source, in this order:
//! θ ∈ [0, 2π), φ ∈ [0, π), then the target's x, y, z ∈ [−size, size).
//! The incoming origin is the point at (θ, φ) on the sphere of radius `size`,
//! negated. The scattered ray starts at the target and ends at the mirror
//! image of the incoming origin about the ground plane, negated.

use std::f64::consts::{PI, TAU};

use aerowave_core::params::{require_count, require_positive};
use aerowave_core::{Point3, RandomSource, RaySegment, SimError, Vector3};
use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};

/// Normal of the mirror (ground) plane.
pub const GROUND_NORMAL: DVec3 = DVec3::Z;

/// Mirror reflection of `d` about the plane with unit normal `n`.
pub fn reflect(d: Vector3, n: Vector3) -> Vector3 {
    d - 2.0 * d.dot(n) * n
}

/// The drawn end point of a scattered ray: the reflection of `incoming`
/// about the ground plane, negated.
pub fn scatter_direction(incoming: Vector3) -> Vector3 {
    -reflect(incoming, GROUND_NORMAL)
}

/// Incoming origin for a random direction on the sphere of radius `size`.
pub fn incoming_origin(rng: &mut dyn RandomSource, size: f64) -> Point3 {
    let theta = rng.next_range(0.0, TAU);
    let phi = rng.next_range(0.0, PI);
    -size * DVec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

/// Uniform point in the cube [−size, size)³.
pub fn random_target(rng: &mut dyn RandomSource, size: f64) -> Point3 {
    let x = rng.next_range(-size, size);
    let y = rng.next_range(-size, size);
    let z = rng.next_range(-size, size);
    DVec3::new(x, y, z)
}

/// One random wave: where it comes from and where it lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveDraw {
    pub origin: Point3,
    pub target: Point3,
}

impl WaveDraw {
    /// Draws θ, φ, then the target, from `rng`.
    pub fn draw(rng: &mut dyn RandomSource, size: f64) -> Self {
        let origin = incoming_origin(rng, size);
        let target = random_target(rng, size);
        Self { origin, target }
    }

    /// Line from the incoming origin to the target.
    pub fn incoming(&self) -> RaySegment {
        RaySegment::new(self.origin, self.target)
    }

    /// Line from the target to the negated ground reflection of the origin.
    pub fn scattered(&self) -> RaySegment {
        RaySegment::new(self.target, scatter_direction(self.origin))
    }
}

/// Whether incoming and scattered rays share their draws.
///
/// `Paired` makes scattered ray `i` the reflection of incoming ray `i`.
/// `Independent` draws each set separately, so the two sets are unrelated
/// index by index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    #[default]
    Paired,
    Independent,
}

const PAIRING_NAMES: &[&str] = &["paired", "independent"];

impl Pairing {
    /// Returns `SimError::InvalidParameter` for an unrecognized name.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "paired" => Ok(Pairing::Paired),
            "independent" => Ok(Pairing::Independent),
            other => Err(SimError::invalid(
                "pairing",
                format!("expected one of {}, got '{other}'", PAIRING_NAMES.join(", ")),
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pairing::Paired => "paired",
            Pairing::Independent => "independent",
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        PAIRING_NAMES
    }
}

/// Incoming and scattered ray sets of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSet {
    pub incoming: Vec<RaySegment>,
    pub scattered: Vec<RaySegment>,
}

/// Draws `num_points` incoming and scattered rays around a body of `size`.
///
/// Returns `SimError::InvalidParameter` for a non-positive `size` or a zero
/// `num_points`.
pub fn sample_waves(
    rng: &mut dyn RandomSource,
    size: f64,
    num_points: usize,
    pairing: Pairing,
) -> Result<WaveSet, SimError> {
    require_positive("size", size)?;
    require_count("num_points", num_points)?;

    let set = match pairing {
        Pairing::Paired => {
            let draws: Vec<WaveDraw> = (0..num_points)
                .map(|_| WaveDraw::draw(rng, size))
                .collect();
            WaveSet {
                incoming: draws.iter().map(WaveDraw::incoming).collect(),
                scattered: draws.iter().map(WaveDraw::scattered).collect(),
            }
        }
        Pairing::Independent => {
            let incoming = (0..num_points)
                .map(|_| WaveDraw::draw(rng, size).incoming())
                .collect();
            let scattered = (0..num_points)
                .map(|_| WaveDraw::draw(rng, size).scattered())
                .collect();
            WaveSet {
                incoming,
                scattered,
            }
        }
    };
    debug!(
        "sampled {num_points} {} wave pairs (size {size})",
        pairing.name()
    );
    Ok(set)
}
