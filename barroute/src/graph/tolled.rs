use crate::graph::{GraphBase, GraphData};
use crate::location::Category;

/// Graph whose nodes are charged a toll depending on their category.
///
/// barroute never charges edges: the toll is paid when a delivery enters a node, so the
/// category of the node is all the cost function needs to know.
pub trait Tolled: GraphBase {
  fn category(&self, node: Self::NodeId) -> Category;
}

/// The tuple of a graph plus classifier can implement a tolled graph
impl<G: GraphData, C: Fn(&G::Data) -> Category> Tolled for (G, C) {
  fn category(&self, node: Self::NodeId) -> Category {
    (self.1)(self.0.data(node))
  }
}

impl<'a, G: Tolled> Tolled for &'a G {
  fn category(&self, node: Self::NodeId) -> Category {
    (*self).category(node)
  }
}

