use crate::utils::Float;

/// Represents a time duration.
pub type Duration = Float;

/// Represents a timestamp.
pub type Timestamp = Float;

/// Represents a distance.
pub type Distance = Float;

/// Represents an amount of energy (battery charge).
pub type Energy = Float;

/// Specifies cost value.
pub type Cost = Float;

/// Represents a load (demand or occupancy) measured in discrete units.
pub type Load = i32;
