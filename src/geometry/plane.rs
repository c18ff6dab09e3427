use std::fmt;

use crate::error::{Result, VectorError};
use crate::math::{Decimal, IntoDecimal, Vector};

use super::{derive_base_point, write_equation, Hyperplane};

/// A plane in 3D given by `A*X + B*Y + C*Z = K`, where `(A, B, C)` is the
/// normal.
#[derive(Debug, Clone)]
pub struct Plane {
    normal_vector: Vector,
    constant: Decimal,
    base_point: Option<Vector>,
}

impl Plane {
    /// Creates a plane from its normal vector and constant.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if `normal_vector` is not
    /// 3D, or [`VectorError::InvalidNumber`] if `constant` is not finite.
    pub fn new(normal_vector: Vector, constant: impl IntoDecimal) -> Result<Self> {
        VectorError::check_dimension(Self::DIMENSION, normal_vector.dimension())?;
        let constant = constant.into_decimal()?;
        let base_point = derive_base_point(&normal_vector, &constant);
        Ok(Self {
            normal_vector,
            constant,
            base_point,
        })
    }

    /// Creates a plane through the origin, with constant `0`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if `normal_vector` is not
    /// 3D.
    pub fn through_origin(normal_vector: Vector) -> Result<Self> {
        Self::new(normal_vector, Decimal::zero())
    }

    /// Alias of `==`.
    #[must_use]
    pub fn is_equal_with(&self, other: &Self) -> bool {
        self == other
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal_vector: Vector::from_decimals(vec![Decimal::zero(); Self::DIMENSION]),
            constant: Decimal::zero(),
            base_point: None,
        }
    }
}

impl Hyperplane for Plane {
    const DIMENSION: usize = 3;
    const KIND: &'static str = "plane";

    fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    fn constant(&self) -> &Decimal {
        &self.constant
    }

    fn base_point(&self) -> Option<&Vector> {
        self.base_point.as_ref()
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.is_coincident_with(other)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_equation(f, &self.normal_vector, &self.constant, &['X', 'Y', 'Z'])
    }
}
