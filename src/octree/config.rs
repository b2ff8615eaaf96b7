//! BuildConfig - root cube placement and subdivision depth math.

use glam::DVec3;

use crate::error::BuildError;

/// Relative tolerance when checking the size ratio for an exact power of
/// two. Absorbs rounding from host-side arithmetic on the sizes without
/// accepting genuinely inexact ratios.
const RATIO_TOLERANCE: f64 = 1e-9;

/// Configuration for one octree build.
///
/// The root cube must be an exact power-of-two multiple of the minimum leaf
/// size, otherwise leaves would not be uniform. Inexact ratios are rejected
/// by [`BuildConfig::max_depth`] instead of being truncated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildConfig {
  /// Center of the root cube in world space.
  pub root_center: DVec3,

  /// Full edge length of the root cube.
  pub root_size: f64,

  /// Minimum (target) leaf edge length. Subdivision stops once cells reach
  /// this size.
  pub min_leaf_size: f64,
}

impl BuildConfig {
  pub fn new(root_center: DVec3, root_size: f64, min_leaf_size: f64) -> Self {
    Self {
      root_center,
      root_size,
      min_leaf_size,
    }
  }

  pub fn with_root_center(mut self, center: DVec3) -> Self {
    self.root_center = center;
    self
  }

  pub fn with_root_size(mut self, size: f64) -> Self {
    self.root_size = size;
    self
  }

  pub fn with_min_leaf_size(mut self, size: f64) -> Self {
    self.min_leaf_size = size;
    self
  }

  /// Compute the leaf depth, validating the configuration.
  ///
  /// `max_depth = log2(root_size / min_leaf_size)`, with depth 0 for the
  /// degenerate `min_leaf_size >= root_size` case (the root itself is the
  /// single leaf). All validation happens here, before any oracle query.
  pub fn max_depth(&self) -> Result<u32, BuildError> {
    // `!(x > 0)` also rejects NaN.
    if !(self.root_size > 0.0) {
      return Err(BuildError::NonPositiveRootSize(self.root_size));
    }
    if !(self.min_leaf_size > 0.0) {
      return Err(BuildError::NonPositiveLeafSize(self.min_leaf_size));
    }

    // Leaves at least as large as the root: single-node tree.
    if self.min_leaf_size >= self.root_size {
      return Ok(0);
    }

    let ratio = self.root_size / self.min_leaf_size;
    let depth = ratio.log2().round();
    let reconstructed = self.min_leaf_size * depth.exp2();
    if (reconstructed - self.root_size).abs() > self.root_size * RATIO_TOLERANCE {
      return Err(BuildError::NonPowerOfTwoRatio {
        root_size: self.root_size,
        min_leaf_size: self.min_leaf_size,
      });
    }

    Ok(depth as u32)
  }
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      root_center: DVec3::ZERO,
      root_size: 16.0,
      min_leaf_size: 1.0,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
