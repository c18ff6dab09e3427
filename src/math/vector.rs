use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;

use nalgebra::DVector;

use crate::error::{Result, VectorError};

use super::{AngleUnit, Decimal, IntoDecimal, EPS};

/// An immutable N-dimensional vector of fixed-precision decimals.
///
/// Equality is approximate: two vectors of the same dimension are equal when
/// every coordinate pair differs by less than [`EPS`](super::EPS). Chains of
/// such comparisons are therefore not transitive beyond that tolerance.
#[derive(Debug, Clone)]
pub struct Vector {
    coordinates: Vec<Decimal>,
}

impl Vector {
    /// Creates a vector from a non-empty sequence of numeric values.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidInput`] if the sequence is empty, or
    /// [`VectorError::InvalidNumber`] if an element is not a finite number.
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoDecimal,
    {
        let coordinates = coordinates
            .into_iter()
            .map(IntoDecimal::into_decimal)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if coordinates.is_empty() {
            return Err(VectorError::InvalidInput("coordinates must be non-empty".into()).into());
        }
        Ok(Self { coordinates })
    }

    /// Creates the zero vector of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidInput`] if `dimension` is zero.
    pub fn zero(dimension: usize) -> Result<Self> {
        Self::new(vec![0; dimension])
    }

    /// Builds a vector from already-converted coordinates.
    ///
    /// Callers guarantee `coordinates` is non-empty.
    pub(crate) fn from_decimals(coordinates: Vec<Decimal>) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self { coordinates }
    }

    /// Creates a vector from an `nalgebra` column vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `v` is empty or holds non-finite values.
    pub fn from_nalgebra(v: &DVector<f64>) -> Result<Self> {
        Self::new(v.iter().copied())
    }

    /// Converts to an `nalgebra` column vector, or `None` if a coordinate
    /// does not fit in an `f64`.
    #[must_use]
    pub fn to_nalgebra(&self) -> Option<DVector<f64>> {
        let values = self
            .coordinates
            .iter()
            .map(Decimal::to_f64)
            .collect::<Option<Vec<_>>>()?;
        Some(DVector::from_vec(values))
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns the coordinates in order.
    #[must_use]
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    fn check_same_dimension(&self, other: &Self) -> Result<()> {
        VectorError::check_dimension(self.dimension(), other.dimension())?;
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&Decimal, &Decimal) -> Decimal) -> Result<Self> {
        self.check_same_dimension(other)?;
        Ok(Self::from_decimals(
            self.coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(a, b)| f(a, b))
                .collect(),
        ))
    }

    /// Approximate equality that reports a dimension mismatch instead of
    /// answering `false`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn approx_eq(&self, other: &Self) -> Result<bool> {
        self.check_same_dimension(other)?;
        Ok(self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .all(|(a, b)| (a - b).is_negligible()))
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every coordinate by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Decimal) -> Self {
        Self::from_decimals(self.coordinates.iter().map(|c| c * factor).collect())
    }

    /// Multiplies every coordinate by a numeric scalar.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidNumber`] if `factor` is not finite.
    pub fn times_scalar(&self, factor: impl IntoDecimal) -> Result<Self> {
        let factor = factor.into_decimal()?;
        Ok(self.scale(&factor))
    }

    /// Returns `true` if the sum of absolute coordinates is below `EPS`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coordinates
            .iter()
            .map(Decimal::abs)
            .sum::<Decimal>()
            .is_negligible()
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> Decimal {
        let sum_sq: Decimal = self.coordinates.iter().map(|c| c * c).sum();
        // A sum of squares is never negative.
        sum_sq.sqrt().unwrap_or_default()
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroMagnitude`] if the magnitude is exactly zero.
    pub fn normalized(&self) -> Result<Self> {
        let inverse = Decimal::one()
            .checked_div(&self.magnitude())
            .ok_or(VectorError::ZeroMagnitude)?;
        Ok(self.scale(&inverse))
    }

    /// Sum of elementwise products.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn dot_product(&self, other: &Self) -> Result<Decimal> {
        self.check_same_dimension(other)?;
        Ok(self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(a, b)| a * b)
            .sum())
    }

    fn cosine_with(&self, other: &Self) -> Result<Decimal> {
        let dot = self.dot_product(other)?;
        let lengths = self.magnitude() * other.magnitude();
        Ok(dot
            .checked_div(&lengths)
            .ok_or(VectorError::ZeroMagnitude)?)
    }

    /// Angle between `self` and `other` in radians.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ,
    /// or [`VectorError::ZeroMagnitude`] if either vector is zero.
    pub fn angle_with(&self, other: &Self) -> Result<f64> {
        self.angle_with_unit(other, AngleUnit::Radians)
    }

    /// Angle between `self` and `other` in the requested unit.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so rounding never
    /// produces NaN.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::angle_with`].
    pub fn angle_with_unit(&self, other: &Self, unit: AngleUnit) -> Result<f64> {
        let cosine = self.cosine_with(other)?;
        let cosine = cosine
            .to_f64()
            .ok_or_else(|| VectorError::InvalidNumber(cosine.to_string()))?;
        Ok(unit.express(cosine.clamp(-1.0, 1.0).acos()))
    }

    /// Returns `true` if either vector is zero, or the angle between them is
    /// within `EPS` of `0` or `π`.
    ///
    /// The angle goes through `f64`, so any cosine that rounds to `±1.0`
    /// yields exactly `0` or `π` and counts as parallel.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn is_parallel_with(&self, other: &Self) -> Result<bool> {
        self.check_same_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_with(other)?;
        let parallel = angle < EPS || PI - angle < EPS;
        tracing::trace!(angle, parallel, "parallel test");
        Ok(parallel)
    }

    /// Returns `true` if `|self · other| < EPS`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn is_orthogonal_with(&self, other: &Self) -> Result<bool> {
        Ok(self.dot_product(other)?.is_negligible())
    }

    /// Component of `self` along the direction of `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ,
    /// or [`VectorError::ZeroVectorProjection`] if `basis` is zero.
    pub fn component_project_to(&self, basis: &Self) -> Result<Self> {
        self.check_same_dimension(basis)?;
        if basis.is_zero() {
            return Err(VectorError::ZeroVectorProjection.into());
        }
        let unit = basis.normalized()?;
        let weight = self.dot_product(&unit)?;
        Ok(unit.scale(&weight))
    }

    /// Component of `self` orthogonal to `basis`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::component_project_to`].
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self> {
        self.minus(&self.component_project_to(basis)?)
    }

    fn as_3d(&self) -> Result<[Decimal; 3]> {
        match self.coordinates.as_slice() {
            [x, y] => Ok([x.clone(), y.clone(), Decimal::zero()]),
            [x, y, z] => Ok([x.clone(), y.clone(), z.clone()]),
            _ => Err(VectorError::UnsupportedDimension(self.dimension()).into()),
        }
    }

    /// Cross product. 2D operands are promoted to 3D with a zero third
    /// coordinate, so the result is always 3D.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UnsupportedDimension`] outside dimensions 2 and
    /// 3, or [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn cross_product(&self, other: &Self) -> Result<Self> {
        let [x1, y1, z1] = self.as_3d()?;
        self.check_same_dimension(other)?;
        let [x2, y2, z2] = other.as_3d()?;
        Ok(Self::from_decimals(vec![
            &y1 * &z2 - &y2 * &z1,
            &x2 * &z1 - &x1 * &z2,
            &x1 * &y2 - &x2 * &y1,
        ]))
    }

    /// Area of the parallelogram spanned by `self` and `other`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::cross_product`].
    pub fn area_of_parallelogram(&self, other: &Self) -> Result<Decimal> {
        Ok(self.cross_product(other)?.magnitude())
    }

    /// Area of the triangle spanned by `self` and `other`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::cross_product`].
    pub fn area_of_triangle(&self, other: &Self) -> Result<Decimal> {
        let area = self.area_of_parallelogram(other)?;
        Ok(area.checked_div(&Decimal::from(2)).unwrap_or_default())
    }
}

impl PartialEq for Vector {
    /// Vectors of different dimensions compare unequal; use
    /// [`Vector::approx_eq`] to surface the mismatch as an error.
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other).unwrap_or(false)
    }
}

impl Index<usize> for Vector {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Decimal {
        &self.coordinates[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector: (")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
