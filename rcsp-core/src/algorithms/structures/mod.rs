//! This module contains helper data structures.

mod bitvec;
pub use self::bitvec::BitVec;
