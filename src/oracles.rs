//! Simple spatial oracles for testing and debugging.
//!
//! These oracles implement deterministic geometric membership tests that are
//! easy to verify by hand. Use them to exercise builds and selections
//! without a physics engine behind the query seam. All of them honor the
//! monotonicity contract on [`OccupancyOracle`]: an empty cube never
//! contains occupied sub-cubes.

use glam::DVec3;

use crate::bounds::{Aabb3, Cube};
use crate::error::OracleUnavailable;
use crate::occupant::OccupantId;
use crate::octree::IdealVolume;
use crate::oracle::{OccupancyOracle, OverlapOracle};

/// Constant oracle - reports the same occupancy everywhere.
///
/// Use `all_occupied` to force full subdivision, `all_empty` for the
/// degenerate empty-root case.
#[derive(Clone, Copy, Debug)]
pub struct ConstantOracle {
  pub occupied: bool,
}

impl ConstantOracle {
  /// Every cube is occupied (worst-case full subdivision).
  pub fn all_occupied() -> Self {
    Self { occupied: true }
  }

  /// Every cube is empty (build terminates at the root).
  pub fn all_empty() -> Self {
    Self { occupied: false }
  }
}

impl OccupancyOracle for ConstantOracle {
  fn test_cube(&self, _center: DVec3, _half_extent: f64) -> Result<bool, OracleUnavailable> {
    Ok(self.occupied)
  }
}

/// Sphere occupancy oracle.
///
/// A cube is occupied iff it intersects a solid sphere. Closest-point test,
/// boundary inclusive.
#[derive(Clone, Copy, Debug)]
pub struct SphereOracle {
  /// Center of the sphere in world coordinates.
  pub center: DVec3,
  /// Radius of the sphere.
  pub radius: f64,
}

impl SphereOracle {
  /// Sphere at the origin with the given radius.
  pub fn new(radius: f64) -> Self {
    Self {
      center: DVec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: DVec3) -> Self {
    self.center = center;
    self
  }
}

impl OccupancyOracle for SphereOracle {
  fn test_cube(&self, center: DVec3, half_extent: f64) -> Result<bool, OracleUnavailable> {
    let aabb = Aabb3::from_center_half_extents(center, DVec3::splat(half_extent));
    let closest = self.center.clamp(aabb.min, aabb.max);
    Ok(closest.distance_squared(self.center) <= self.radius * self.radius)
  }
}

/// Point-set occupancy oracle.
///
/// A cube is occupied iff it contains at least one of the points, boundary
/// inclusive. A point strictly inside one leaf cell produces exactly one
/// branch through the tree.
#[derive(Clone, Debug, Default)]
pub struct PointOracle {
  pub points: Vec<DVec3>,
}

impl PointOracle {
  pub fn new(points: Vec<DVec3>) -> Self {
    Self { points }
  }

  /// Single-point oracle.
  pub fn single(point: DVec3) -> Self {
    Self {
      points: vec![point],
    }
  }
}

impl OccupancyOracle for PointOracle {
  fn test_cube(&self, center: DVec3, half_extent: f64) -> Result<bool, OracleUnavailable> {
    let cube = Cube::new(center, half_extent);
    Ok(self.points.iter().any(|p| cube.contains_point(*p)))
  }
}

/// Overlap oracle backed by a static registry of axis-aligned cubes.
///
/// The reference [`OverlapOracle`] implementation: one cube collider per
/// occupant, closed-interval overlap. This is the collider-query substitute
/// a host without a physics engine can use for slice selection.
#[derive(Clone, Debug, Default)]
pub struct CubeRegistry {
  entries: Vec<(OccupantId, Cube)>,
}

impl CubeRegistry {
  /// Empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an occupant with its collider cube.
  pub fn insert(&mut self, id: OccupantId, cube: Cube) {
    self.entries.push((id, cube));
  }

  /// Materialize one occupant per occupied leaf of an ideal volume.
  ///
  /// Generates a fresh [`OccupantId`] per leaf, with a cube collider of the
  /// given edge length at the leaf position. Registry order follows the
  /// ideal volume's accumulation order.
  pub fn materialize(volume: &IdealVolume, leaf_size: f64) -> Self {
    let mut registry = Self::new();
    for leaf in volume.iter() {
      registry.insert(OccupantId::new(), Cube::from_center_size(leaf.position, leaf_size));
    }
    registry
  }

  /// Number of registered occupants.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Check if empty.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// All registered occupant handles, in registration order.
  pub fn ids(&self) -> Vec<OccupantId> {
    self.entries.iter().map(|(id, _)| *id).collect()
  }

  /// Iterate over (handle, collider cube) pairs.
  pub fn iter(&self) -> impl Iterator<Item = &(OccupantId, Cube)> {
    self.entries.iter()
  }
}

impl OverlapOracle for CubeRegistry {
  fn query_box(
    &self,
    center: DVec3,
    half_extents: DVec3,
  ) -> Result<Vec<OccupantId>, OracleUnavailable> {
    let region = Aabb3::from_center_half_extents(center, half_extents);
    Ok(
      self
        .entries
        .iter()
        .filter(|(_, cube)| cube.aabb().overlaps(&region))
        .map(|(id, _)| *id)
        .collect(),
    )
  }
}

#[cfg(test)]
#[path = "oracles_test.rs"]
mod oracles_test;
