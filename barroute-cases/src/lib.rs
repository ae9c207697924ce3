mod casefile;
mod case_builder;
mod report;
mod settings;

pub use casefile::{categorize, parse_cases, read_cases, RawCase, RawObjective, ReadError, Road};
pub use case_builder::*;
pub use report::*;
pub use settings::*;
