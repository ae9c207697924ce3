//! Set of traits for defining a graph abstraction.
//!
//! The module contains traits for defining a directed graph with node data, and a tolled
//! graph where every node belongs to a toll [`Category`](crate::location::Category).
//!
mod graph;
mod tolled;

pub use graph::*;
pub use tolled::*;
