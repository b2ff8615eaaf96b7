//! Opaque occupant handles.
//!
//! The driving process materializes one occupant per occupied leaf. The core
//! only ever sees occupants as opaque handles plus a position; display state
//! lives entirely in the visualization layer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique OccupantIds.
static OCCUPANT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque occupant identifier.
///
/// Generated atomically - guaranteed unique within process lifetime.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct OccupantId(u64);

impl OccupantId {
  /// Generate a new unique OccupantId.
  pub fn new() -> Self {
    Self(OCCUPANT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  /// Build an id from a raw value (for engine bridges that manage their own
  /// handle space).
  pub fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  /// Get the raw id value.
  pub fn raw(&self) -> u64 {
    self.0
  }
}

impl Default for OccupantId {
  fn default() -> Self {
    Self::new()
  }
}
