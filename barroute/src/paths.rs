//! Exhaustive enumeration of directed paths between two nodes.

use crate::config::{CyclePolicy, SearchConfig};
use crate::error::{Result, RouteError};
use crate::graph::*;

/// Depth-first search over every path from `start` to `end`.
///
/// The search keeps one iterator of unexplored neighbors per node of the current path, so
/// memory grows with the path length and not with the number of paths. Paths are yielded
/// in the order given by the edge insertion order of the graph. A path stops at the first
/// arrival at `end`; it is never extended past it.
pub struct PathSearch<G: IntoNeighbors> {
  graph: G,
  start: G::NodeId,
  end: G::NodeId,
  config: SearchConfig,
  path: Vec<G::NodeId>,
  frontier: Vec<G::Neighbors>,
  started: bool,
  finished: bool,
}

impl<G: Copy + IntoNeighbors> PathSearch<G> {
  pub fn new(graph: G, start: G::NodeId, end: G::NodeId, config: SearchConfig) -> Self {
    PathSearch {
      graph,
      start,
      end,
      config,
      path: Vec::new(),
      frontier: Vec::new(),
      started: false,
      finished: false,
    }
  }

  fn descend(&mut self, node: G::NodeId) {
    self.path.push(node);
    self.frontier.push(neighbors(self.graph, node));
  }

  fn backtrack(&mut self) {
    self.frontier.pop();
    self.path.pop();
  }
}

impl<G: Copy + IntoNeighbors> Iterator for PathSearch<G> {
  type Item = Result<Vec<G::NodeId>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }

    if !self.started {
      self.started = true;
      if self.start == self.end {
        self.finished = true;
        return Some(Ok(vec![self.start]));
      }
      self.descend(self.start);
    }

    loop {
      let next = match self.frontier.last_mut() {
        Some(unexplored) => unexplored.next(),
        None => {
          self.finished = true;
          return None;
        }
      };

      let node = match next {
        Some(node) => node,
        None => {
          self.backtrack();
          continue;
        }
      };

      if self.config.cycles == CyclePolicy::Prune && self.path.contains(&node) {
        continue;
      }

      if let Some(max_depth) = self.config.depth_limit() {
        if self.path.len() >= max_depth {
          self.finished = true;
          return Some(Err(RouteError::SearchExhausted { max_depth }));
        }
      }

      if node == self.end {
        let mut found = self.path.clone();
        found.push(node);
        return Some(Ok(found));
      }

      self.descend(node);
    }
  }
}

/// Collects every path from `start` to `end`. An empty result means `end` can't be reached.
pub fn all_paths<G: Copy + IntoNeighbors>(
  graph: G,
  start: G::NodeId,
  end: G::NodeId,
  config: &SearchConfig,
) -> Result<Vec<Vec<G::NodeId>>> {
  PathSearch::new(graph, start, end, *config).collect()
}
