//! Core crate contains the building blocks to solve ***Resource Constrained Shortest Path*** problems:
//! a best-first label setting search over a weighted graph where every move has to respect side
//! constraints such as edge/node capacity, battery budget or time windows.
//!
//! # Examples
//!
//! A minimal example which builds a graph with two alternative paths and finds the cheapest one:
//!
//! ```
//! use rcsp_core::prelude::*;
//!
//! let graph = GraphBuilder::default()
//!     .add_nodes(["A", "B", "C"].into_iter().map(Node::new))
//!     .add_edge("A", "B", EdgeAttributes::with_weight(4.))
//!     .add_edge("B", "C", EdgeAttributes::with_weight(4.))
//!     .add_edge("A", "C", EdgeAttributes::with_weight(10.))
//!     .build()
//!     .expect("valid graph");
//!
//! let solver = Solver::new(graph.into(), SearchConfig::default(), Environment::default().into());
//! let result = solver.solve(&Query::new("A", "C")).expect("valid query");
//!
//! let route = result.route().expect("route should be found");
//! assert_eq!(route.nodes, vec!["A", "B", "C"]);
//! assert_eq!(route.cost, 8.);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod search;
pub mod simulation;
pub mod utils;
