//! This module contains generic algorithms and data structures used by the search.

pub mod structures;
