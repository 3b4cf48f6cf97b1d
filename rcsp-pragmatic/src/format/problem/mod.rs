//! Specifies logic to read problem from json input.

use super::*;
use rcsp_core::models::LoadStore;
use rcsp_core::models::graph::Graph;
use rcsp_core::search::{Query as CoreQuery, SearchConfig};
use std::io::{BufReader, Read};
use std::sync::Arc;

pub(crate) type ApiProblem = Problem;

mod model;
pub use self::model::*;

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

mod reader;
use self::reader::map_to_problem;

/// A problem mapped onto core models.
pub struct CoreProblem {
    /// A graph shared by all queries.
    pub graph: Arc<Graph>,
    /// Query ids in the same order as queries.
    pub query_ids: Vec<String>,
    /// Queries to solve.
    pub queries: Vec<CoreQuery>,
    /// Loads observed before queries are solved.
    pub loads: LoadStore,
    /// Search configuration.
    pub config: SearchConfig,
}

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(self)?;

        map_to_problem(problem)
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(BufReader::new(self.as_bytes()))?;

        map_to_problem(problem)
    }
}

impl PragmaticProblem for ApiProblem {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(self)
    }
}
