use crate::graph::*;
use crate::location::{Category, Location};
use super::common::*;

/// Simple graph implementation which stores outgoing edge references as a vector in each
/// node. Nodes and edges can be added at any time; edges keep their insertion order.
#[derive(Clone, Debug)]
pub struct DynamicGraph<NodeData> {
  out_edges: Vec<Vec<Idx>>,
  data: Vec<NodeData>,
}

impl<NodeData> Default for DynamicGraph<NodeData> {
  fn default() -> Self {
    Self::new()
  }
}

impl<NodeData> DynamicGraph<NodeData> {
  pub fn new() -> Self {
    Self {
      out_edges: Vec::new(),
      data: Vec::new(),
    }
  }

  pub fn new_with_data(data: Vec<NodeData>) -> Self {
    Self {
      out_edges: vec![Vec::new(); data.len()],
      data,
    }
  }

  pub fn add_node(&mut self, data: NodeData) -> Idx {
    let size = self.data.len();
    self.out_edges.push(Vec::new());
    self.data.push(data);
    size as Idx
  }

  /// Adds a directed edge. Self-loops and repeated edges are kept as given.
  pub fn add_edge(&mut self, from: Idx, to: Idx) -> &mut Self {
    self.out_edges[from as usize].push(to);
    self
  }

  pub fn nodes(&self) -> impl Iterator<Item = (Idx, &NodeData)> {
    self.data.iter().enumerate().map(|(i, data)| (i as Idx, data))
  }

  pub fn number_of_nodes(&self) -> usize {
    self.data.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self.out_edges.iter().map(Vec::len).sum()
  }
}

impl<NodeData> GraphBase for DynamicGraph<NodeData> {
  type NodeId = Idx;
}

impl<'a, NodeData> IntoNeighbors for &'a DynamicGraph<NodeData> {
  type Neighbors = std::iter::Cloned<std::slice::Iter<'a, Idx>>;

  fn neighbors(self, node_id: Idx) -> Self::Neighbors {
    self.out_edges[node_id as usize].iter().cloned()
  }
}

impl<NodeData> GraphData for DynamicGraph<NodeData> {
  type Data = NodeData;

  fn data(&self, node_id: Idx) -> &Self::Data {
    &self.data[node_id as usize]
  }
}

impl Tolled for DynamicGraph<Location> {
  fn category(&self, node_id: Idx) -> Category {
    self.data(node_id).category()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::graph_from_data_and_edges;

  #[test]
  fn test_dynamic_graph() {
    let graph = graph_from_data_and_edges(
      vec!["1", "2", "3", "4", "5"],
      vec![(0, 1), (2, 0), (2, 1), (2, 4), (1, 2), (0, 3), (4, 3)],
    );

    assert_eq!(graph.number_of_nodes(), 5);
    assert_eq!(graph.number_of_edges(), 7);

    let n1_out_edges: Vec<_> = neighbors(&graph, 0).collect();
    assert_eq!(n1_out_edges, vec![1, 3]);

    let n3_out_edges: Vec<_> = neighbors(&graph, 2).collect();
    assert_eq!(n3_out_edges, vec![0, 1, 4]);

    assert_eq!(neighbors(&graph, 3).count(), 0);
  }

  #[test]
  fn test_self_loops_and_duplicates_are_kept() {
    let graph = graph_from_data_and_edges(vec!["A", "B"], vec![(0, 0), (0, 1), (0, 1)]);

    assert_eq!(graph.number_of_edges(), 3);
    assert_eq!(neighbors(&graph, 0).collect::<Vec<_>>(), vec![0, 1, 1]);
  }

  #[test]
  fn test_category() {
    let mut graph = DynamicGraph::new();
    let a = graph.add_node(Location::new("A", Category::Village));
    let b = graph.add_node(Location::new("b", Category::Town));

    assert_eq!(graph.category(a), Category::Village);
    assert_eq!(graph.category(b), Category::Town);
    assert_eq!(graph.nodes().map(|(id, _)| id).collect::<Vec<_>>(), vec![a, b]);
  }
}
