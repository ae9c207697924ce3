//! Cheapest delivery route selection.

use crate::case::{Case, Objective};
use crate::config::SearchConfig;
use crate::error::{Result, RouteError};
use crate::graph::*;
use crate::graph_impl::Idx;
use crate::paths::PathSearch;
use crate::toll::path_total;

use tracing::{debug, info, warn};

/// Total reported for an unreachable case by the legacy output format
pub const UNREACHABLE_SENTINEL: u64 = 9999;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<N: Identifier> {
  pub total: u64,
  pub ids: Vec<N>,
}

/// Scores every path from `start` to `end` and keeps the cheapest. On equal totals the
/// path found first wins. `None` means there is no path at all.
pub fn cheapest_route<G: Copy + IntoNeighbors + Tolled>(
  graph: G,
  start: G::NodeId,
  end: G::NodeId,
  bars: u32,
  config: &SearchConfig,
) -> Result<Option<Route<G::NodeId>>> {
  let mut best: Option<Route<G::NodeId>> = None;

  for path in PathSearch::new(graph, start, end, *config) {
    let path = path?;
    let total = path_total(graph, &path, bars as u64);
    debug!(path = ?path, total, "possible path");

    let improves = match &best {
      Some(route) => total < route.total,
      None => true,
    };
    if improves {
      best = Some(Route { total, ids: path });
    }
  }

  Ok(best)
}

/// Result of evaluating one case
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
  Cheapest(Route<Idx>),
  Unreachable,
  Failed(RouteError),
}

impl CaseOutcome {
  pub fn total(&self) -> Option<u64> {
    match self {
      CaseOutcome::Cheapest(route) => Some(route.total),
      _ => None,
    }
  }

  pub fn is_unreachable(&self) -> bool {
    matches!(self, CaseOutcome::Unreachable)
  }
}

fn route_case(
  case: &Case,
  objective: &Objective,
  config: &SearchConfig,
) -> Result<Option<Route<Idx>>> {
  let graph = case.graph();
  cheapest_route(graph, objective.start, objective.end, objective.bars, config)
}

/// Finds the cheapest delivery of a case. Errors are kept in the outcome so that the
/// remaining cases can still be evaluated.
pub fn evaluate_case(case: &Case, config: &SearchConfig) -> CaseOutcome {
  let objective = match case.objective() {
    Some(objective) => objective,
    None => {
      warn!(case = %case, "case has no objective");
      return CaseOutcome::Failed(RouteError::MissingObjective);
    }
  };

  match route_case(case, objective, config) {
    Ok(Some(route)) => {
      let names: Vec<&str> = route.ids.iter().map(|&id| case.location(id).name()).collect();
      info!(case = %case, total = route.total, route = ?names, "cheapest route");
      CaseOutcome::Cheapest(route)
    }
    Ok(None) => {
      info!(
        case = %case,
        from = %case.location(objective.start),
        to = %case.location(objective.end),
        "no route found"
      );
      CaseOutcome::Unreachable
    }
    Err(err) => {
      warn!(case = %case, error = %err, "case failed");
      CaseOutcome::Failed(err)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::case::CaseId;
  use crate::config::CyclePolicy;
  use crate::location::Category;
  use crate::test_utils::{case_from_roads, graph_from_data_and_edges};

  fn names(case: &Case, outcome: &CaseOutcome) -> Vec<String> {
    match outcome {
      CaseOutcome::Cheapest(route) => route
        .ids
        .iter()
        .map(|&id| case.location(id).name().to_string())
        .collect(),
      _ => Vec::new(),
    }
  }

  #[test]
  fn test_town_detour_costs_more() {
    let case = case_from_roads(&[("A", "b"), ("b", "C"), ("A", "C")], 20, "A", "C");

    let outcome = evaluate_case(&case, &SearchConfig::default());
    assert_eq!(outcome.total(), Some(22));
    assert_eq!(names(&case, &outcome), vec!["A", "C"]);
  }

  #[test]
  fn test_start_is_end_costs_the_bars() {
    let case = case_from_roads(&[("A", "b"), ("b", "A")], 40, "A", "A");

    let outcome = evaluate_case(&case, &SearchConfig::default());
    assert_eq!(outcome.total(), Some(40));
    assert_eq!(names(&case, &outcome), vec!["A"]);
  }

  #[test]
  fn test_disconnected_case_is_unreachable() {
    let case = case_from_roads(&[("A", "b"), ("C", "d")], 20, "A", "d");

    let outcome = evaluate_case(&case, &SearchConfig::default());
    assert!(outcome.is_unreachable());
    assert_eq!(outcome.total(), None);
  }

  #[test]
  fn test_self_loop_case() {
    let case = case_from_roads(&[("A", "A"), ("A", "B"), ("B", "E")], 20, "A", "E");

    let outcome = evaluate_case(&case, &SearchConfig::default());
    assert_eq!(names(&case, &outcome), vec!["A", "B", "E"]);
    // two villages: 20 + 2 = 22, surcharge to 24
    assert_eq!(outcome.total(), Some(24));
  }

  #[test]
  fn test_first_path_wins_ties() {
    // Both detours pass one town
    let case = case_from_roads(
      &[("A", "x"), ("x", "B"), ("A", "y"), ("y", "B")],
      20,
      "A",
      "B",
    );

    let outcome = evaluate_case(&case, &SearchConfig::default());
    assert_eq!(outcome.total(), Some(23));
    assert_eq!(names(&case, &outcome), vec!["A", "x", "B"]);
  }

  #[test]
  fn test_cheaper_path_found_later_replaces_best() {
    let case = case_from_roads(
      &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "d"), ("d", "D")],
      25,
      "A",
      "D",
    );

    // A B C D: 25 + 2 * 3 = 31, surcharge to 34
    // A d D: 25 + 1 + 2 = 28, surcharge to 29
    let outcome = evaluate_case(&case, &SearchConfig::default());
    assert_eq!(outcome.total(), Some(29));
    assert_eq!(names(&case, &outcome), vec!["A", "d", "D"]);
  }

  #[test]
  fn test_cheapest_route_with_classifier() {
    let graph = graph_from_data_and_edges(vec!["a", "b", "c"], vec![(0, 1), (1, 2), (0, 2)]);

    // Every location a village: direct road 20 + 1 = 21, surcharge to 22
    let villages = (&graph, |_: &&str| Category::Village);
    let route = cheapest_route(villages, 0, 2, 20, &SearchConfig::default()).unwrap();
    assert_eq!(route, Some(Route { total: 22, ids: vec![0, 2] }));

    assert_eq!(cheapest_route(villages, 2, 0, 20, &SearchConfig::default()), Ok(None));
  }

  #[test]
  fn test_missing_objective() {
    let mut case = Case::new(CaseId(7));
    case.add_location("A", Category::Village);

    assert_eq!(
      evaluate_case(&case, &SearchConfig::default()),
      CaseOutcome::Failed(RouteError::MissingObjective)
    );
  }

  #[test]
  fn test_follow_cycles_reports_exhausted_search() {
    let case = case_from_roads(&[("A", "B"), ("B", "A"), ("A", "C")], 20, "A", "C");

    let config = SearchConfig::default()
      .with_cycles(CyclePolicy::Follow)
      .with_max_depth(32);
    assert_eq!(
      evaluate_case(&case, &config),
      CaseOutcome::Failed(RouteError::SearchExhausted { max_depth: 32 })
    );

    assert_eq!(evaluate_case(&case, &SearchConfig::default()).total(), Some(22));
  }

  #[test]
  fn test_selection_ignores_enumeration_order() {
    let forward = case_from_roads(
      &[("A", "x"), ("x", "B"), ("A", "B"), ("A", "C"), ("C", "B")],
      30,
      "A",
      "B",
    );
    let backward = case_from_roads(
      &[("A", "C"), ("C", "B"), ("A", "B"), ("A", "x"), ("x", "B")],
      30,
      "A",
      "B",
    );

    let config = SearchConfig::default();
    assert_eq!(
      evaluate_case(&forward, &config).total(),
      evaluate_case(&backward, &config).total()
    );
  }
}
