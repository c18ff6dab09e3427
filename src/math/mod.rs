mod angle;
mod decimal;
mod vector;

pub use angle::AngleUnit;
pub use decimal::{Decimal, IntoDecimal};
pub use vector::Vector;

/// Global tolerance for approximate equality, zero tests and the
/// parallel-angle band.
pub const EPS: f64 = 1e-10;

/// Number of significant digits every [`Decimal`] result is rounded to.
pub const PRECISION: u64 = 30;
