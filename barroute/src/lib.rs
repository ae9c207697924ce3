//! Cheapest delivery routes through networks of towns and villages.
//!
//! A [`Case`](case::Case) holds one directed network and one delivery objective. Every path
//! from the start to the end is enumerated, tolls are charged for each location entered and
//! the cheapest total is reported.

pub mod location;
pub mod graph;
pub mod graph_impl;
pub mod case;
pub mod config;
pub mod error;
pub mod paths;
pub mod toll;
pub mod route;

mod test_utils;

pub use case::{Case, CaseId, Objective};
pub use config::{CyclePolicy, SearchConfig};
pub use error::RouteError;
pub use location::{Category, Location};
pub use route::{evaluate_case, CaseOutcome, Route};
