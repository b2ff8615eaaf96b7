//! Error types for octree builds and slice selection.

use thiserror::Error;

/// The spatial oracle could not answer a query.
///
/// Raised by oracle implementations when the underlying spatial data is not
/// ready (e.g. a collision index still being rebuilt). The in-progress build
/// or selection pass aborts; any previously returned tree or selection stays
/// valid and usable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("spatial oracle unavailable: {0}")]
pub struct OracleUnavailable(pub String);

impl OracleUnavailable {
  /// Convenience constructor from any displayable reason.
  pub fn new(reason: impl Into<String>) -> Self {
    Self(reason.into())
  }
}

/// Fatal failure of a [`VolumeTree::build`](crate::VolumeTree::build) call.
///
/// Configuration errors are detected before any oracle query is issued.
/// An oracle failure mid-build aborts the whole build; partial trees are
/// never returned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BuildError {
  /// Root cube edge length was zero, negative, or NaN.
  #[error("root size must be positive, got {0}")]
  NonPositiveRootSize(f64),

  /// Minimum leaf edge length was zero, negative, or NaN.
  #[error("minimum leaf size must be positive, got {0}")]
  NonPositiveLeafSize(f64),

  /// `root_size / min_leaf_size` is not an exact power of two, so uniform
  /// leaves cannot be produced. Inexact ratios are rejected rather than
  /// silently truncated.
  #[error(
    "root size {root_size} is not a power-of-two multiple of min leaf size {min_leaf_size}"
  )]
  NonPowerOfTwoRatio {
    root_size: f64,
    min_leaf_size: f64,
  },

  /// The occupancy oracle failed mid-build.
  #[error(transparent)]
  Oracle(#[from] OracleUnavailable),
}
