/// Token that marks an attribute value as unknown.
pub const MISSING_VALUE: &str = "NA";
/// Tolerance used when checking that a distribution sums to one.
#[cfg(test)]
pub(crate) const PROBABILITY_EPS: f64 = 1e-9;
