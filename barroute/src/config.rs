//! Search settings shared by every case of a run.

use serde::{Deserialize, Serialize};

/// What to do when a branch of the search comes back to a location which is already on
/// the current path
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
  /// Abandon the branch. Only simple paths are enumerated.
  Prune,
  /// Keep walking around the cycle. Only the depth limit stops such a search.
  Follow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  /// Maximum number of locations on a path, start included. `None` leaves pruned searches
  /// unbounded and caps followed cycles at [`SearchConfig::DEFAULT_FOLLOW_MAX_DEPTH`].
  pub max_depth: Option<usize>,
  pub cycles: CyclePolicy,
}

impl SearchConfig {
  pub const DEFAULT_FOLLOW_MAX_DEPTH: usize = 1024;

  pub fn with_max_depth(mut self, max_depth: usize) -> Self {
    self.max_depth = Some(max_depth);
    self
  }

  pub fn with_cycles(mut self, cycles: CyclePolicy) -> Self {
    self.cycles = cycles;
    self
  }

  /// Depth at which the search gives up, if any
  pub fn depth_limit(&self) -> Option<usize> {
    match self.cycles {
      CyclePolicy::Prune => self.max_depth,
      CyclePolicy::Follow => Some(self.max_depth.unwrap_or(Self::DEFAULT_FOLLOW_MAX_DEPTH)),
    }
  }
}

impl Default for SearchConfig {
  fn default() -> Self {
    SearchConfig {
      max_depth: None,
      cycles: CyclePolicy::Prune,
    }
  }
}
