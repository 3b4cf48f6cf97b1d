//! Contains helper functionality.

mod collections;
pub use self::collections::*;
