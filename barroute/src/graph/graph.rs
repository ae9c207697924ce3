use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
pub trait Identifier: Eq + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

/// Defines data associated with each node. For delivery networks the data is a
/// [`Location`](crate::location::Location), which carries the category used for tolls.
pub trait GraphData: GraphBase {
  type Data;
  fn data(&self, node: Self::NodeId) -> &Self::Data;
}

// ====== Neighbors access =====

/// Trait for defining directed graph connectivity
///
/// `neighbors()` for node with id `u` must return all nodes `v` such that there is an edge
/// from `u` to `v` in the graph, in the order the edges were added. An edge added twice is
/// returned twice and a self-loop returns `u` itself.
pub trait IntoNeighbors: GraphBase {
  type Neighbors: Iterator<Item = Self::NodeId>;
  fn neighbors(self, node: Self::NodeId) -> Self::Neighbors;
}

/// Returns an iterator over all outgoing neighbors of the node
pub fn neighbors<G: IntoNeighbors>(graph: G, node_id: G::NodeId) -> G::Neighbors {
  graph.neighbors(node_id)
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}

impl<'a, G: GraphData> GraphData for &'a G {
  type Data = G::Data;

  fn data(&self, node: Self::NodeId) -> &Self::Data {
    (*self).data(node)
  }
}

impl<G: GraphBase, T> GraphBase for (G, T) {
  type NodeId = G::NodeId;
}

impl<G: IntoNeighbors, T> IntoNeighbors for (G, T) {
  type Neighbors = G::Neighbors;

  fn neighbors(self, node_id: G::NodeId) -> Self::Neighbors {
    self.0.neighbors(node_id)
  }
}
