//! Toll accrual along a delivery path.
//!
//! Every location entered after the start takes its toll out of the delivery: a town takes
//! a single bar, a village takes one bar for every started batch of [`BARS_PER_TOLL`] bars.
//! The result is the number of bars which must leave the start so that the requested
//! quantity arrives at the end.

use crate::graph::Tolled;
use crate::location::Category;

pub const BARS_PER_TOLL: u64 = 20;

/// Number of towns and villages entered along a path
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TollCount {
  pub towns: u64,
  pub villages: u64,
}

impl TollCount {
  /// Counts the categories of every node after the first one
  pub fn from_path<G: Tolled>(graph: G, path: &[G::NodeId]) -> Self {
    path
      .iter()
      .skip(1)
      .fold(TollCount::default(), |mut count, &id| {
        match graph.category(id) {
          Category::Town => count.towns += 1,
          Category::Village => count.villages += 1,
        }
        count
      })
  }
}

fn div_ceil(value: u64, divisor: u64) -> u64 {
  (value + divisor - 1) / divisor
}

/// Bars needed at the start to deliver `bars` past the given tolls.
///
/// The village surcharge is re-applied once when the running total is not a whole number of
/// batches. The new total is not checked again.
pub fn toll_total(bars: u64, count: TollCount) -> u64 {
  let mut total = bars + count.towns + div_ceil(bars, BARS_PER_TOLL) * count.villages;
  if total % BARS_PER_TOLL != 0 {
    total += count.villages;
  }
  total
}

pub fn path_total<G: Tolled>(graph: G, path: &[G::NodeId], bars: u64) -> u64 {
  toll_total(bars, TollCount::from_path(graph, path))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::location::Location;
  use crate::test_utils::{category_by_case, graph_from_data_and_edges};
  use proptest::prelude::*;

  fn count(towns: u64, villages: u64) -> TollCount {
    TollCount { towns, villages }
  }

  #[test]
  fn test_toll_total() {
    assert_eq!(toll_total(20, count(0, 0)), 20);
    assert_eq!(toll_total(20, count(0, 1)), 22);
    assert_eq!(toll_total(20, count(1, 1)), 23);
    assert_eq!(toll_total(20, count(3, 0)), 23);
    // 19 + 1 lands on a batch boundary, no surcharge
    assert_eq!(toll_total(19, count(0, 1)), 20);
    // 39 + 2 * 2 = 43, surcharge once to 45
    assert_eq!(toll_total(39, count(0, 2)), 45);
  }

  #[test]
  fn test_surcharge_is_not_repeated() {
    // 18 + 1 * 1 = 19, surcharge to 20 is a round total
    assert_eq!(toll_total(18, count(0, 1)), 20);
    // 17 + 1 = 18, surcharge to 19 which is still not round and stays
    assert_eq!(toll_total(17, count(0, 1)), 19);
  }

  #[test]
  fn test_start_is_not_tolled() {
    let graph = graph_from_data_and_edges(
      ["A", "b", "C"]
        .iter()
        .map(|name| Location::new(*name, category_by_case(name)))
        .collect(),
      vec![(0, 1), (1, 2), (0, 2)],
    );

    assert_eq!(TollCount::from_path(&graph, &[0]), count(0, 0));
    assert_eq!(TollCount::from_path(&graph, &[0, 2]), count(0, 1));
    assert_eq!(TollCount::from_path(&graph, &[0, 1, 2]), count(1, 1));
    assert_eq!(TollCount::from_path(&graph, &[1, 0]), count(0, 1));

    assert_eq!(path_total(&graph, &[0, 2], 20), 22);
    assert_eq!(path_total(&graph, &[0, 1, 2], 20), 23);
    assert_eq!(path_total(&graph, &[0], 20), 20);
  }

  #[test]
  fn test_classifier_tuple() {
    let graph = graph_from_data_and_edges(vec!["a", "b"], vec![(0, 1)]);
    let everything_is_a_town = (&graph, |_: &&str| Category::Town);
    assert_eq!(TollCount::from_path(&everything_is_a_town, &[0, 1]), count(1, 0));

    let by_name = (&graph, |name: &&str| category_by_case(name));
    assert_eq!(path_total(&by_name, &[0, 1], 20), 21);
  }

  #[test]
  fn test_surcharge_can_drop_when_a_village_is_added() {
    // 17 + 2 = 19 gets the surcharge, 17 + 3 = 20 does not
    assert_eq!(toll_total(17, count(0, 2)), 21);
    assert_eq!(toll_total(17, count(0, 3)), 20);
  }

  proptest! {
    #[test]
    fn prop_total_stays_within_one_surcharge(bars in 1u64..10_000, towns in 0u64..50, villages in 0u64..50) {
      let base = bars + towns + div_ceil(bars, BARS_PER_TOLL) * villages;
      let total = toll_total(bars, count(towns, villages));
      prop_assert!(total >= base);
      prop_assert!(total <= base + villages);
    }

    #[test]
    fn prop_adding_a_location_never_decreases_by_more_than_the_surcharge(
      bars in 1u64..10_000,
      towns in 0u64..50,
      villages in 0u64..50,
      town in any::<bool>()
    ) {
      let before = toll_total(bars, count(towns, villages));
      let after = if town {
        toll_total(bars, count(towns + 1, villages))
      } else {
        toll_total(bars, count(towns, villages + 1))
      };
      prop_assert!(after + villages >= before);
    }

    #[test]
    fn prop_tolls_without_villages_are_monotonic(bars in 1u64..10_000, towns in 0u64..50) {
      prop_assert!(toll_total(bars, count(towns + 1, 0)) > toll_total(bars, count(towns, 0)));
    }

    #[test]
    fn prop_total_is_deterministic(bars in 1u64..10_000, towns in 0u64..50, villages in 0u64..50) {
      prop_assert_eq!(
        toll_total(bars, count(towns, villages)),
        toll_total(bars, count(towns, villages))
      );
    }
  }
}
