//! A single delivery case: one network of locations and one objective.

use crate::error::{Result, RouteError};
use crate::graph::{neighbors, GraphData};
use crate::graph_impl::{DynamicGraph, Idx};
use crate::location::{Category, Location};

use std::collections::HashMap;
use std::fmt;

/// Ordinal of the case within its input, starting from 1
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseId(pub u32);

impl fmt::Display for CaseId {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Case {}", self.0)
  }
}

/// Quantity of bars to deliver from `start` to `end`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Objective {
  pub bars: u32,
  pub start: Idx,
  pub end: Idx,
}

pub struct Case {
  id: CaseId,
  graph: DynamicGraph<Location>,
  names: HashMap<String, Idx>,
  objective: Option<Objective>,
}

impl Case {
  pub fn new(id: CaseId) -> Self {
    Case {
      id,
      graph: DynamicGraph::new(),
      names: HashMap::new(),
      objective: None,
    }
  }

  pub fn id(&self) -> CaseId {
    self.id
  }

  pub fn graph(&self) -> &DynamicGraph<Location> {
    &self.graph
  }

  /// Adds a location and returns its node id. A name which is already known keeps its
  /// node and the category it was first added with.
  pub fn add_location<S: Into<String>>(&mut self, name: S, category: Category) -> Idx {
    let name = name.into();
    if let Some(&id) = self.names.get(&name) {
      return id;
    }
    let id = self.graph.add_node(Location::new(name.clone(), category));
    self.names.insert(name, id);
    id
  }

  pub fn locations(&self) -> impl Iterator<Item = &Location> {
    self.graph.nodes().map(|(_, location)| location)
  }

  pub fn location_id(&self, name: &str) -> Result<Idx> {
    self
      .names
      .get(name)
      .cloned()
      .ok_or_else(|| RouteError::MalformedGraphReference {
        name: name.to_string(),
      })
  }

  pub fn location(&self, id: Idx) -> &Location {
    self.graph.data(id)
  }

  /// Adds a road from one known location to another
  pub fn add_connection(&mut self, from: &str, to: &str) -> Result<&mut Self> {
    let from = self.location_id(from)?;
    let to = self.location_id(to)?;
    self.graph.add_edge(from, to);
    Ok(self)
  }

  pub fn connections_of(&self, name: &str) -> Result<Vec<&Location>> {
    let id = self.location_id(name)?;
    Ok(
      neighbors(&self.graph, id)
        .map(|to| self.location(to))
        .collect(),
    )
  }

  pub fn category_of(&self, name: &str) -> Result<Category> {
    let id = self.location_id(name)?;
    Ok(self.location(id).category())
  }

  pub fn set_objective(&mut self, bars: u32, start: &str, end: &str) -> Result<()> {
    if bars == 0 {
      return Err(RouteError::InvalidObjective {
        reason: "the number of bars must be positive".to_string(),
      });
    }
    let start = self.location_id(start)?;
    let end = self.location_id(end)?;
    self.objective = Some(Objective { bars, start, end });
    Ok(())
  }

  pub fn objective(&self) -> Option<&Objective> {
    self.objective.as_ref()
  }
}

impl fmt::Display for Case {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.id)
  }
}
