//! Pragmatic crate allows users to specify resource constrained shortest path problems via simple
//! **pragmatic** json format: a graph with node and edge attributes, a list of queries, current
//! loads and an objective.
//!
//! # Examples
//!
//! ```
//! use rcsp_core::prelude::Environment;
//! use rcsp_pragmatic::format::problem::PragmaticProblem;
//! use rcsp_pragmatic::format::solution::create_solution;
//! use std::sync::Arc;
//!
//! let problem = r#"{
//!   "nodes": [{ "id": "A" }, { "id": "B" }, { "id": "C" }],
//!   "edges": [
//!     { "from": "A", "to": "B", "distance": 5 },
//!     { "from": "B", "to": "C", "distance": 3 }
//!   ],
//!   "queries": [{ "id": "q1", "starts": ["A"], "goal": "C" }]
//! }"#;
//!
//! let problem = problem.to_string().read_pragmatic().expect("valid problem");
//! let solution = create_solution(&problem, Arc::new(Environment::default()));
//!
//! assert_eq!(solution.routes.len(), 1);
//! assert_eq!(solution.routes[0].nodes, vec!["A", "B", "C"]);
//! assert_eq!(solution.routes[0].cost, 8.);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

mod utils;
mod validation;

pub mod format;

pub use self::format::problem::{deserialize_problem, serialize_problem, CoreProblem, PragmaticProblem};
pub use self::format::solution::{create_solution, PragmaticSolution};
pub use self::format::{FormatError, MultiFormatError};
