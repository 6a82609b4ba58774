//! Ground-hit statistics over sampled reflections.
//!
//! A reflection "hits the ground" when its z component is negative.

use std::fmt;

use aerowave_core::params::{require_count, require_positive};
use aerowave_core::{RandomSource, RaySegment, SimError};
use log::info;
use serde::{Deserialize, Serialize};

use crate::wave::{incoming_origin, scatter_direction};

/// Count of ground hits out of a batch of reflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionSummary {
    ground_hits: usize,
    total: usize,
}

impl ReflectionSummary {
    /// Returns `SimError::InvalidParameter` if `total` is zero or smaller
    /// than `ground_hits`.
    pub fn new(ground_hits: usize, total: usize) -> Result<Self, SimError> {
        require_count("num_points", total)?;
        if ground_hits > total {
            return Err(SimError::invalid(
                "ground_hits",
                format!("{ground_hits} exceeds total {total}"),
            ));
        }
        Ok(Self { ground_hits, total })
    }

    /// Summarizes the end points of scattered rays drawn by
    /// [`sample_waves`](crate::wave::sample_waves).
    pub fn from_scattered(rays: &[RaySegment]) -> Result<Self, SimError> {
        let hits = rays.iter().filter(|r| r.target.z < 0.0).count();
        Self::new(hits, rays.len())
    }

    pub fn ground_hits(&self) -> usize {
        self.ground_hits
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `100 * ground_hits / total`, always in [0, 100].
    pub fn percentage(&self) -> f64 {
        100.0 * self.ground_hits as f64 / self.total as f64
    }
}

impl fmt::Display for ReflectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ground Hit Percentage: {:.2}%", self.percentage())
    }
}

/// Draws `num_points` fresh incoming directions, reflects each off the
/// ground plane and counts the ones that point downward.
///
/// Returns `SimError::InvalidParameter` for a zero `num_points` or a
/// non-positive `size`.
pub fn summarize(
    rng: &mut dyn RandomSource,
    size: f64,
    num_points: usize,
) -> Result<ReflectionSummary, SimError> {
    require_positive("size", size)?;
    require_count("num_points", num_points)?;

    let hits = (0..num_points)
        .filter(|_| scatter_direction(incoming_origin(rng, size)).z < 0.0)
        .count();
    let summary = ReflectionSummary::new(hits, num_points)?;
    info!("{summary} ({hits}/{num_points})");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{sample_waves, Pairing};
    use aerowave_core::Xorshift64;
    use glam::DVec3;

    #[test]
    fn percentage_is_hits_over_total() {
        let s = ReflectionSummary::new(1, 4).unwrap();
        assert_eq!(s.percentage(), 25.0);
        assert_eq!(s.ground_hits(), 1);
        assert_eq!(s.total(), 4);
    }

    #[test]
    fn display_matches_overlay_format() {
        let s = ReflectionSummary::new(1, 3).unwrap();
        assert_eq!(s.to_string(), "Ground Hit Percentage: 33.33%");
    }

    #[test]
    fn zero_total_is_invalid() {
        assert!(matches!(
            ReflectionSummary::new(0, 0),
            Err(SimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn more_hits_than_total_is_invalid() {
        assert!(ReflectionSummary::new(5, 4).is_err());
    }

    #[test]
    fn summarize_zero_points_is_invalid() {
        let err = summarize(&mut Xorshift64::new(1), 1.0, 0).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { ref name, .. } if name == "num_points"));
    }

    #[test]
    fn from_scattered_counts_downward_end_points() {
        let rays = [
            RaySegment::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0)),
            RaySegment::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0)),
            RaySegment::new(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0)),
        ];
        let s = ReflectionSummary::from_scattered(&rays).unwrap();
        assert_eq!(s.ground_hits(), 1);
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn paired_scattered_hits_match_reflected_origins() {
        let mut rng = Xorshift64::new(77);
        let set = sample_waves(&mut rng, 1.0, 500, Pairing::Paired).unwrap();
        let manual = set
            .incoming
            .iter()
            .filter(|r| scatter_direction(r.origin).z < 0.0)
            .count();
        let s = ReflectionSummary::from_scattered(&set.scattered).unwrap();
        assert_eq!(s.ground_hits(), manual);
    }

    #[test]
    fn fixed_seed_is_reproducible_over_ten_thousand_draws() {
        let a = summarize(&mut Xorshift64::new(42), 1.0, 10_000).unwrap();
        let b = summarize(&mut Xorshift64::new(42), 1.0, 10_000).unwrap();
        assert_eq!(a, b);
        assert!((a.percentage() - b.percentage()).abs() <= 2.0);
        // Half of all directions come from above the ground plane.
        assert!((a.percentage() - 50.0).abs() < 3.0, "got {}", a.percentage());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn percentage_in_range_for_any_input(
                seed: u64,
                size in 1e-3_f64..1e3,
                num_points in 1_usize..300,
            ) {
                let s = summarize(&mut Xorshift64::new(seed), size, num_points).unwrap();
                prop_assert!((0.0..=100.0).contains(&s.percentage()));
                prop_assert_eq!(s.total(), num_points);
            }
        }
    }
}
