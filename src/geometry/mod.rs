mod line;
mod plane;

pub use line::{Line, LineIntersection};
pub use plane::Plane;

use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Decimal, Vector};

/// An affine set `N · X = k` described by a normal vector `N` and a
/// constant `k`.
///
/// Implementors derive their base point once at construction.
pub trait Hyperplane {
    /// Fixed dimension of the ambient space.
    const DIMENSION: usize;

    /// Name used in error messages.
    const KIND: &'static str;

    /// The coefficient vector of the defining equation.
    fn normal_vector(&self) -> &Vector;

    /// The right-hand side of the defining equation.
    fn constant(&self) -> &Decimal;

    /// A point known to lie on the set, or `None` for a zero normal.
    fn base_point(&self) -> Option<&Vector>;

    /// Returns `true` if the normal vector is zero.
    fn is_degenerate(&self) -> bool {
        self.normal_vector().is_zero()
    }

    /// Returns `true` if the normals of `self` and `other` are parallel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if either normal is zero.
    fn is_parallel_with(&self, other: &Self) -> Result<bool>
    where
        Self: Sized,
    {
        if self.is_degenerate() || other.is_degenerate() {
            return Err(GeometryError::DegenerateLine(Self::KIND).into());
        }
        self.normal_vector().is_parallel_with(other.normal_vector())
    }

    /// Returns `true` if `self` and `other` describe the same point set.
    ///
    /// Two degenerate sets are coincident; a degenerate set is never
    /// coincident with a non-degenerate one.
    fn is_coincident_with(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        match (self.is_degenerate(), other.is_degenerate()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        if !self.is_parallel_with(other).unwrap_or(false) {
            return false;
        }
        self.base_point() == other.base_point()
    }
}

/// Picks the first axis whose normal coefficient exceeds `EPS` and solves
/// the equation there with every other coordinate set to zero.
pub(crate) fn derive_base_point(normal: &Vector, constant: &Decimal) -> Option<Vector> {
    let eps = Decimal::epsilon();
    let coordinates = normal.coordinates();
    let Some(axis) = coordinates.iter().position(|c| c.abs() > eps) else {
        tracing::debug!(%normal, "zero normal, no base point");
        return None;
    };
    let value = constant.checked_div(&coordinates[axis])?;
    let mut point = vec![Decimal::zero(); coordinates.len()];
    point[axis] = value;
    Some(Vector::from_decimals(point))
}

/// Writes `A*X + B*Y [+ C*Z] = K`, omitting negligible terms.
pub(crate) fn write_equation(
    f: &mut fmt::Formatter<'_>,
    normal: &Vector,
    constant: &Decimal,
    variables: &[char],
) -> fmt::Result {
    let eps = Decimal::epsilon();
    let mut wrote_term = false;
    for (coefficient, variable) in normal.coordinates().iter().zip(variables) {
        if coefficient.abs() <= eps {
            continue;
        }
        if !wrote_term {
            write!(f, "{coefficient}*{variable}")?;
        } else if coefficient.is_negative() {
            write!(f, " - {}*{variable}", -coefficient)?;
        } else {
            write!(f, " + {coefficient}*{variable}")?;
        }
        wrote_term = true;
    }
    if !wrote_term {
        f.write_str("0")?;
    }
    write!(f, " = {constant}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_point_uses_first_significant_axis() {
        let normal = Vector::new([0.0, 1e-12, 4.0]).unwrap();
        let point = derive_base_point(&normal, &Decimal::from(2)).unwrap();
        assert_eq!(point, Vector::new([0.0, 0.0, 0.5]).unwrap());
    }

    #[test]
    fn zero_normal_has_no_base_point() {
        let normal = Vector::zero(3).unwrap();
        assert!(derive_base_point(&normal, &Decimal::from(7)).is_none());
    }
}
