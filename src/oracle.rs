//! Oracle traits - the injected spatial query capability.
//!
//! The builder and the slice selector never inspect geometry themselves.
//! They consume these traits, so any backend satisfying the contracts works:
//! a physics-engine collider query, mesh voxelization, SDF sampling.

use glam::DVec3;

use crate::error::OracleUnavailable;
use crate::occupant::OccupantId;

/// Boolean occupancy test for axis-aligned cubes.
///
/// # Contract
///
/// - Deterministic and side-effect-free: repeated calls with identical
///   arguments within one build must return the same answer.
/// - Monotonic under subdivision: a cube reported empty must not contain any
///   occupied sub-cube. The builder trusts a single "empty" answer for the
///   whole cube and never re-tests smaller regions inside it, so a
///   probabilistic or thresholded oracle that violates this will silently
///   lose occupied sub-regions.
pub trait OccupancyOracle: Send + Sync {
  /// Returns true if any modeled geometry intersects the axis-aligned cube
  /// with the given center and half edge length.
  fn test_cube(&self, center: DVec3, half_extent: f64) -> Result<bool, OracleUnavailable>;
}

/// Overlap query over materialized occupants.
///
/// Returns the handles of all occupants whose colliders overlap the given
/// axis-aligned box. Overlap semantics (open vs. closed boundaries, behavior
/// outside the root volume) are the oracle's own; the slice selector does
/// not second-guess them.
pub trait OverlapOracle: Send + Sync {
  /// Returns the occupant handles overlapping the box with the given center
  /// and per-axis half-extents.
  fn query_box(
    &self,
    center: DVec3,
    half_extents: DVec3,
  ) -> Result<Vec<OccupantId>, OracleUnavailable>;
}
