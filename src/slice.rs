//! Slice selection over materialized occupants.
//!
//! A slice is a movable selection box used to pick a subset of the
//! occupants materialized from an ideal volume. Every selection pass fully
//! replaces the previous one: each previously selected occupant is
//! deselected (an observable transition, even if it immediately reselects)
//! and each overlapping candidate is selected. The visualization layer
//! recolors on each reported transition.

use std::collections::HashSet;

use glam::DVec3;

use crate::error::OracleUnavailable;
use crate::occupant::OccupantId;
use crate::oracle::OverlapOracle;

/// The set of occupant handles currently selected by the slice tool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
  selected: HashSet<OccupantId>,
}

impl SelectionSet {
  /// Empty selection.
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of selected occupants.
  pub fn len(&self) -> usize {
    self.selected.len()
  }

  /// Check if nothing is selected.
  pub fn is_empty(&self) -> bool {
    self.selected.is_empty()
  }

  /// Check if a handle is selected.
  pub fn contains(&self, id: OccupantId) -> bool {
    self.selected.contains(&id)
  }

  /// Iterate over selected handles (unordered).
  pub fn iter(&self) -> impl Iterator<Item = &OccupantId> {
    self.selected.iter()
  }
}

impl FromIterator<OccupantId> for SelectionSet {
  fn from_iter<I: IntoIterator<Item = OccupantId>>(iter: I) -> Self {
    Self {
      selected: iter.into_iter().collect(),
    }
  }
}

/// The observable transitions of one selection pass.
///
/// Handles carried over from the previous selection appear in both lists:
/// first deselected, then selected again. Both lists are sorted by handle
/// for deterministic consumption.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SliceTransitions {
  /// Every handle selected before this pass, all of which were deselected.
  pub deselected: Vec<OccupantId>,
  /// Every handle selected by this pass.
  pub selected: Vec<OccupantId>,
}

/// Stateful slice tool: owns the current selection and replaces it on every
/// pass.
#[derive(Clone, Debug, Default)]
pub struct SliceSelector {
  current: SelectionSet,
}

impl SliceSelector {
  /// Selector with an empty selection.
  pub fn new() -> Self {
    Self::default()
  }

  /// The current selection.
  pub fn current(&self) -> &SelectionSet {
    &self.current
  }

  /// Run one selection pass for the box with the given center and per-axis
  /// half-extents.
  ///
  /// The oracle is consulted before any state changes, so a failing oracle
  /// leaves the previous selection untouched and usable. Oracle hits
  /// outside `candidates` are ignored. An empty candidate list or a
  /// zero-volume box (any half-extent not positive, NaN included) clears
  /// the selection without consulting the oracle.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "slice::select")
  )]
  pub fn select_slice<O: OverlapOracle>(
    &mut self,
    center: DVec3,
    half_extents: DVec3,
    candidates: &[OccupantId],
    oracle: &O,
  ) -> Result<SliceTransitions, OracleUnavailable> {
    // `!(x > 0)` also treats NaN extents as zero-volume.
    let degenerate = candidates.is_empty() || !(half_extents.min_element() > 0.0);
    let hits = if degenerate {
      Vec::new()
    } else {
      oracle.query_box(center, half_extents)?
    };

    let candidate_set: HashSet<OccupantId> = candidates.iter().copied().collect();

    let mut deselected: Vec<OccupantId> = self.current.iter().copied().collect();
    deselected.sort_unstable();

    let mut selected: Vec<OccupantId> = hits
      .into_iter()
      .filter(|id| candidate_set.contains(id))
      .collect();
    selected.sort_unstable();
    selected.dedup();

    self.current = selected.iter().copied().collect();

    Ok(SliceTransitions {
      deselected,
      selected,
    })
  }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;
