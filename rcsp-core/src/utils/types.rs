/// Alias to a scalar floating type.
///
/// NOTE: all time, distance and cost related values share this type, so mixing them in arithmetic
/// does not require conversions.
pub type Float = f64;
