//! Specifies logic to create a solution of the problem and write it in json format.

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::*;
