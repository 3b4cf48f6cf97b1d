//! A collection of models to represent a graph, its attributes and a state shared between queries.

pub mod common;
pub mod graph;

mod store;
pub use self::store::LoadStore;
