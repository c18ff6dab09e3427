use std::fmt;

use crate::error::{GeometryError, Result, VectorError};
use crate::math::{Decimal, IntoDecimal, Vector};

use super::{derive_base_point, write_equation, Hyperplane};

/// A line in 2D given by `A*X + B*Y = C`, where `(A, B)` is the normal.
#[derive(Debug, Clone)]
pub struct Line {
    normal_vector: Vector,
    constant: Decimal,
    base_point: Option<Vector>,
}

/// Result of intersecting two lines.
#[derive(Debug, Clone, PartialEq)]
pub enum LineIntersection {
    /// The lines coincide; every point of the returned line is shared.
    Coincident(Line),
    /// The lines cross at exactly one point.
    Point(Vector),
    /// The lines are parallel and distinct.
    Empty,
}

impl Line {
    /// Creates a line from its normal vector and constant.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if `normal_vector` is not
    /// 2D, or [`VectorError::InvalidNumber`] if `constant` is not finite.
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

    /// Creates a line through the origin, with constant `0`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if `normal_vector` is not
    /// 2D.
    pub fn through_origin(normal_vector: Vector) -> Result<Self> {
        Self::new(normal_vector, Decimal::zero())
    }

    /// Alias of `==`.
    #[must_use]
    pub fn is_equal_with(&self, other: &Self) -> bool {
        self == other
    }

    /// Intersects `self` with `other`.
    ///
    /// Non-parallel lines are solved with Cramer's rule.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if either normal is zero,
    /// or [`GeometryError::SingularSystem`] if the determinant vanishes for
    /// lines not classified as parallel.
    pub fn intersection_with(&self, other: &Self) -> Result<LineIntersection> {
        if self.is_parallel_with(other)? {
            if self == other {
                tracing::debug!(line = %self, other = %other, "coincident lines");
                return Ok(LineIntersection::Coincident(self.clone()));
            }
            tracing::debug!(line = %self, other = %other, "parallel lines do not intersect");
            return Ok(LineIntersection::Empty);
        }

        let (a, b) = (&self.normal_vector[0], &self.normal_vector[1]);
        let (c, d) = (&other.normal_vector[0], &other.normal_vector[1]);
        let (k1, k2) = (&self.constant, &other.constant);

        let det = a * d - b * c;
        let x = (d * k1 - b * k2)
            .checked_div(&det)
            .ok_or(GeometryError::SingularSystem)?;
        let y = (a * k2 - c * k1)
            .checked_div(&det)
            .ok_or(GeometryError::SingularSystem)?;
        let point = Vector::from_decimals(vec![x, y]);
        tracing::debug!(%point, "lines intersect");
        Ok(LineIntersection::Point(point))
    }
}

impl Default for Line {
    /// The degenerate line `0*X + 0*Y = 0`.
    fn default() -> Self {
        Self {
            normal_vector: Vector::from_decimals(vec![Decimal::zero(); Self::DIMENSION]),
            constant: Decimal::zero(),
            base_point: None,
        }
    }
}

impl Hyperplane for Line {
    const DIMENSION: usize = 2;
    const KIND: &'static str = "line";

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

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.is_coincident_with(other)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_equation(f, &self.normal_vector, &self.constant, &['X', 'Y'])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LingeoError;

    fn line<T: IntoDecimal>(normal: [T; 2], constant: impl IntoDecimal) -> Line {
        Line::new(Vector::new(normal).unwrap(), constant).unwrap()
    }

    #[test]
    fn base_point_derivation() {
        assert_eq!(
            line([2, 3], 6).base_point().unwrap(),
            &Vector::new([3, 0]).unwrap()
        );
        assert_eq!(
            line([0.0, -1.5], 3).base_point().unwrap(),
            &Vector::new([0, -2]).unwrap()
        );
        assert!(Line::default().base_point().is_none());
    }

    #[test]
    fn rejects_non_2d_normal() {
        let err = Line::new(Vector::new([1, 2, 3]).unwrap(), 0).unwrap_err();
        assert_eq!(
            err,
            LingeoError::Vector(VectorError::DimensionMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    fn parallelism() {
        let l2 = line([2, 3], 6);
        let l3 = line([1, 0], 1);
        assert!(!l2.is_parallel_with(&l3).unwrap());
        assert!(l2.is_parallel_with(&line([-8, -12], 0)).unwrap());
    }

    #[test]
    fn parallelism_with_degenerate_line_fails() {
        let err = Line::default().is_parallel_with(&line([1, 0], 1)).unwrap_err();
        assert_eq!(err, LingeoError::Geometry(GeometryError::DegenerateLine("line")));
    }

    #[test]
    fn equality() {
        let l1 = Line::default();
        let l2 = line([2, 3], 6);
        let l3 = line([1, 0], 1);
        assert_eq!(l1, l1);
        assert_ne!(l3, l2);
        assert_eq!(l2, l2);
        assert_eq!(l3, line([2, 0], 2));
        assert_eq!(line([0.0, -1.5], 3), line([0.0, -4.5], 9));
        assert_ne!(l1, l2);
        assert!(l3.is_equal_with(&line([2, 0], 2)));
    }

    #[test]
    fn proportional_normals_with_other_constant_are_parallel_not_equal() {
        let a = line([2, 3], 6);
        let b = line([4, 6], 13);
        assert!(a.is_parallel_with(&b).unwrap());
        assert_ne!(a, b);
        assert_eq!(a, line([4, 6], 12));
    }

    #[test]
    fn through_origin_has_zero_constant() {
        let l = Line::through_origin(Vector::new([-8, -12]).unwrap()).unwrap();
        assert!(l.constant().is_zero());
        assert_eq!(l, line([2, 3], 0));
        assert!(Line::through_origin(Vector::new([1, 2, 3]).unwrap()).is_err());
    }

    #[test]
    fn normals_equal_within_tolerance_give_coincident_lines() {
        let a = line([1e-3, 0.0], 1);
        let b = line([1e-3, 1e-11], 1);
        assert!(a.is_parallel_with(&b).unwrap());
        assert_eq!(a, b);
        assert_eq!(
            a.intersection_with(&b).unwrap(),
            LineIntersection::Coincident(a.clone())
        );
    }

    #[test]
    fn coincident_intersection() {
        let a = line([4.046, 2.836], 1.21);
        let b = line([10.115, 7.09], 3.025);
        match a.intersection_with(&b).unwrap() {
            LineIntersection::Coincident(l) => assert_eq!(l, b),
            other => panic!("expected coincident lines, got {other:?}"),
        }
    }

    #[test]
    fn point_intersection() {
        let a = line([7.204, 3.182], 8.68);
        let b = line([8.172, 4.114], 9.883);
        assert_eq!(
            a.intersection_with(&b).unwrap(),
            LineIntersection::Point(
                Vector::new([1.172_776_635_464_6, 0.072_695_511_663_3]).unwrap()
            )
        );
    }

    #[test]
    fn perpendicular_axes_intersect_at_constants() {
        let a = line([1, 0], 3);
        let b = line([0, 1], -2);
        assert_eq!(
            a.intersection_with(&b).unwrap(),
            LineIntersection::Point(Vector::new([3, -2]).unwrap())
        );
    }

    #[test]
    fn distinct_parallel_lines_do_not_intersect() {
        let a = line([1.182, 5.562], 6.744);
        let b = line([1.773, 8.343], 9.525);
        assert_eq!(a.intersection_with(&b).unwrap(), LineIntersection::Empty);
    }

    #[test]
    fn display() {
        assert_eq!(line([2, 3], 6).to_string(), "2*X + 3*Y = 6");
        assert_eq!(line([2, -3], 6).to_string(), "2*X - 3*Y = 6");
        assert_eq!(line([0, -3], 1).to_string(), "-3*Y = 1");
        assert_eq!(Line::default().to_string(), "0 = 0");
    }
}
