//! Test utilities: instrumented and failing oracle wrappers.
//!
//! Used by the builder and slice tests to assert query counts, pruning
//! behavior, and abort-on-failure semantics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use glam::DVec3;

use crate::error::OracleUnavailable;
use crate::occupant::OccupantId;
use crate::oracle::{OccupancyOracle, OverlapOracle};

/// Counts queries passing through to an inner occupancy oracle.
pub struct CountingOracle<O> {
  pub inner: O,
  count: AtomicUsize,
}

impl<O> CountingOracle<O> {
  pub fn new(inner: O) -> Self {
    Self {
      inner,
      count: AtomicUsize::new(0),
    }
  }

  /// Number of queries answered so far.
  pub fn count(&self) -> usize {
    self.count.load(Ordering::Relaxed)
  }
}

impl<O: OccupancyOracle> OccupancyOracle for CountingOracle<O> {
  fn test_cube(&self, center: DVec3, half_extent: f64) -> Result<bool, OracleUnavailable> {
    self.count.fetch_add(1, Ordering::Relaxed);
    self.inner.test_cube(center, half_extent)
  }
}

/// Records every queried cube (center, half-extent) in query order.
pub struct RecordingOracle<O> {
  pub inner: O,
  queries: Mutex<Vec<(DVec3, f64)>>,
}

impl<O> RecordingOracle<O> {
  pub fn new(inner: O) -> Self {
    Self {
      inner,
      queries: Mutex::new(Vec::new()),
    }
  }

  /// Snapshot of the queries issued so far.
  pub fn queries(&self) -> Vec<(DVec3, f64)> {
    self.queries.lock().unwrap().clone()
  }
}

impl<O: OccupancyOracle> OccupancyOracle for RecordingOracle<O> {
  fn test_cube(&self, center: DVec3, half_extent: f64) -> Result<bool, OracleUnavailable> {
    self.queries.lock().unwrap().push((center, half_extent));
    self.inner.test_cube(center, half_extent)
  }
}

/// Answers through an inner oracle a fixed number of times, then fails.
pub struct FailingOracle<O> {
  pub inner: O,
  fail_after: usize,
  seen: AtomicUsize,
}

impl<O> FailingOracle<O> {
  pub fn new(inner: O, fail_after: usize) -> Self {
    Self {
      inner,
      fail_after,
      seen: AtomicUsize::new(0),
    }
  }
}

impl<O: OccupancyOracle> OccupancyOracle for FailingOracle<O> {
  fn test_cube(&self, center: DVec3, half_extent: f64) -> Result<bool, OracleUnavailable> {
    let seen = self.seen.fetch_add(1, Ordering::Relaxed);
    if seen >= self.fail_after {
      return Err(OracleUnavailable::new("collision data not ready"));
    }
    self.inner.test_cube(center, half_extent)
  }
}

/// Overlap oracle that always reports itself unavailable.
pub struct UnavailableOverlapOracle;

impl OverlapOracle for UnavailableOverlapOracle {
  fn query_box(
    &self,
    _center: DVec3,
    _half_extents: DVec3,
  ) -> Result<Vec<OccupantId>, OracleUnavailable> {
    Err(OracleUnavailable::new("spatial index offline"))
  }
}
