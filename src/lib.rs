// #![warn(missing_docs)]

//! # hospital_locator
//!
//! Picks the best place for a facility (a hospital) in a weighted graph of locations
//! and splits the locations into zones with a greedy coloring.
//!
//! Pipeline: text lines → [`input::build`] → [`WeightedGraph`] → [`LocationAnalyzer`] → [`LocationReport`].
//!
//! ```
//! use hospital_locator::{analyze, input};
//!
//! let graph = input::from_str("3\n1 5\n0 5\n").unwrap();
//! let report = analyze(&graph);
//! assert_eq!(report.colors, vec![0, 1, 0]);
//! ```
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod analyzer;
pub mod coloring;
pub mod eccentricity;
pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod types;

#[cfg(test)]
mod testing;

pub use analyzer::{AnalyzerConfig, EccentricityMode, LocationAnalyzer, LocationReport, analyze};
pub use error::{GraphError, ParseErrorKind};
pub use graph::WeightedGraph;
pub use types::UnGraph;
