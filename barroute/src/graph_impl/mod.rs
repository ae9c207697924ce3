//! Graph data structures.
//!
//! [`DynamicGraph`] allows growing a graph by adding nodes or edges. Delivery networks are
//! small, so an adjacency list per node is all that is needed.

mod dynamic_graph;
mod common;

pub use dynamic_graph::*;
pub use common::*;
