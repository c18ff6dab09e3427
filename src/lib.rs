//! Exact, dimension-checked vectors together with 2D lines and 3D planes.
//!
//! Coordinates are fixed-precision [`Decimal`](math::Decimal)s; equality and
//! zero tests use the tolerance [`EPS`](math::EPS).

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{LingeoError, Result};
pub use geometry::{Hyperplane, Line, LineIntersection, Plane};
pub use math::{AngleUnit, Decimal, IntoDecimal, Vector};
