#![cfg(test)]

use crate::case::{Case, CaseId};
use crate::graph_impl::*;
use crate::location::Category;

pub fn graph_from_data_and_edges<T>(data: Vec<T>, edges: Vec<(usize, usize)>) -> DynamicGraph<T> {
  let mut graph = DynamicGraph::new_with_data(data);
  for (from, to) in edges {
    graph.add_edge(from as u32, to as u32);
  }
  graph
}

/// Lower-case names are towns, everything else is a village
pub fn category_by_case(name: &str) -> Category {
  if name.chars().any(char::is_lowercase) && !name.chars().any(char::is_uppercase) {
    Category::Town
  } else {
    Category::Village
  }
}

/// Builds a case from named roads, in the order given. Locations are created in the order
/// they first appear.
pub fn case_from_roads(roads: &[(&str, &str)], bars: u32, start: &str, end: &str) -> Case {
  let mut case = Case::new(CaseId(1));
  for (from, to) in roads {
    case.add_location(*from, category_by_case(from));
    case.add_location(*to, category_by_case(to));
  }
  for (from, to) in roads {
    case.add_connection(from, to).unwrap();
  }
  case.set_objective(bars, start, end).unwrap();
  case
}
