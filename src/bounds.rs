//! Axis-aligned boxes and cubes with double precision for huge worlds.

use glam::DVec3;

/// Double-precision axis-aligned bounding box.
///
/// Overlap and containment use closed intervals: boxes that merely touch at
/// a face, edge, or corner count as overlapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
  /// Minimum corner (inclusive).
  pub min: DVec3,
  /// Maximum corner (inclusive).
  pub max: DVec3,
}

impl Aabb3 {
  /// Create a new AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: DVec3, max: DVec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Create a new AABB from center and half-extents.
  pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
    Self {
      min: center - half_extents,
      max: center + half_extents,
    }
  }

  /// Check if this AABB overlaps with another.
  ///
  /// Two AABBs overlap if they share any interior or boundary points.
  #[inline]
  pub fn overlaps(&self, other: &Aabb3) -> bool {
    self.min.x <= other.max.x
      && self.max.x >= other.min.x
      && self.min.y <= other.max.y
      && self.max.y >= other.min.y
      && self.min.z <= other.max.z
      && self.max.z >= other.min.z
  }

  /// Check if this AABB contains a point (boundary inclusive).
  #[inline]
  pub fn contains_point(&self, point: DVec3) -> bool {
    point.x >= self.min.x
      && point.x <= self.max.x
      && point.y >= self.min.y
      && point.y <= self.max.y
      && point.z >= self.min.z
      && point.z <= self.max.z
  }

  /// Get the size of the AABB (max - min).
  #[inline]
  pub fn size(&self) -> DVec3 {
    self.max - self.min
  }

  /// Get the center of the AABB.
  #[inline]
  pub fn center(&self) -> DVec3 {
    (self.min + self.max) * 0.5
  }
}

/// Axis-aligned cube described by center and half edge length.
///
/// This is the unit of space the octree subdivides and the shape occupancy
/// oracles are asked about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
  /// Center of the cube in world space.
  pub center: DVec3,
  /// Half of the edge length. Must be positive.
  pub half_size: f64,
}

impl Cube {
  /// Create a new cube from center and half edge length.
  ///
  /// # Panics
  /// Debug-asserts that `half_size` is positive.
  pub fn new(center: DVec3, half_size: f64) -> Self {
    debug_assert!(half_size > 0.0, "cube half_size must be positive");
    Self { center, half_size }
  }

  /// Create a new cube from center and full edge length.
  pub fn from_center_size(center: DVec3, size: f64) -> Self {
    Self::new(center, size * 0.5)
  }

  /// Full edge length.
  #[inline]
  pub fn size(&self) -> f64 {
    self.half_size * 2.0
  }

  /// Convert to an AABB.
  #[inline]
  pub fn aabb(&self) -> Aabb3 {
    Aabb3::from_center_half_extents(self.center, DVec3::splat(self.half_size))
  }

  /// Check if the cube contains a point (boundary inclusive).
  #[inline]
  pub fn contains_point(&self, point: DVec3) -> bool {
    self.aabb().contains_point(point)
  }
}
