//! Errors reported for a single case.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors which stop the evaluation of one case. None of them affect other cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
  /// A road or the objective names a location which is not part of the case
  #[error("unknown location '{name}'")]
  MalformedGraphReference { name: String },

  /// The case has no delivery objective
  #[error("case has no objective")]
  MissingObjective,

  #[error("invalid objective: {reason}")]
  InvalidObjective { reason: String },

  /// A path grew beyond the configured number of locations
  #[error("search exhausted: a path exceeded {max_depth} locations")]
  SearchExhausted { max_depth: usize },
}
