use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use crate::error::VectorError;

use super::PRECISION;

/// A decimal scalar held at a fixed working precision.
///
/// Every arithmetic result is rounded to [`PRECISION`] significant digits,
/// so the precision is a property of the value and never of a shared
/// context.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

impl Decimal {
    fn rounded(value: BigDecimal) -> Self {
        Self(value.with_prec(PRECISION).normalized())
    }

    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        Self(BigDecimal::from(1))
    }

    /// The comparison tolerance `1e-10` as a decimal.
    #[must_use]
    pub fn epsilon() -> Self {
        Self(BigDecimal::new(1.into(), 10))
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if `|self| < EPS`.
    #[must_use]
    pub fn is_negligible(&self) -> bool {
        self.abs() < Self::epsilon()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Square root, or `None` for negative values.
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        self.0.sqrt().map(Self::rounded)
    }

    /// Divides `self` by `rhs`, returning `None` when `rhs` is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        Some(Self::rounded(&self.0 / &rhs.0))
    }

    /// Nearest `f64`, if representable.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Decimal {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim())
            .map(Self::rounded)
            .map_err(|_| VectorError::InvalidNumber(s.to_owned()))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Self::rounded(BigDecimal::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for Decimal {
    fn from(value: usize) -> Self {
        Self::rounded(BigDecimal::from(value as u64))
    }
}

impl From<isize> for Decimal {
    fn from(value: isize) -> Self {
        Self::rounded(BigDecimal::from(value as i64))
    }
}

impl TryFrom<f64> for Decimal {
    type Error = VectorError;

    /// Converts the exact binary value of `value`, then rounds it to the
    /// working precision.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(VectorError::InvalidNumber(value.to_string()));
        }
        BigDecimal::from_f64(value)
            .map(Self::rounded)
            .ok_or_else(|| VectorError::InvalidNumber(value.to_string()))
    }
}

impl TryFrom<f32> for Decimal {
    type Error = VectorError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

/// Numeric-like values accepted wherever a coordinate or scalar is expected.
pub trait IntoDecimal {
    /// Converts `self` into a [`Decimal`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidNumber`] for non-finite floats or
    /// malformed decimal strings.
    fn into_decimal(self) -> Result<Decimal, VectorError>;
}

macro_rules! impl_into_decimal_exact {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> Result<Decimal, VectorError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_decimal_exact!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoDecimal for f64 {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        Decimal::try_from(self)
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        Decimal::try_from(self)
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        self.parse()
    }
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> Result<Decimal, VectorError> {
        Ok(self.clone())
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&Decimal> for &Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Decimal {
                Decimal::rounded(&self.0 $op &rhs.0)
            }
        }

        impl $trait<Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                &self $op &rhs
            }
        }

        impl $trait<&Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Decimal {
                &self $op rhs
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
impl_binary_op!(Mul, mul, *);

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-self.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-self.0.clone())
    }
}

impl std::iter::Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_working_precision() {
        let third = Decimal::from(1).checked_div(&Decimal::from(3)).unwrap();
        let expected: Decimal = "0.333333333333333333333333333333".parse().unwrap();
        assert_eq!(third, expected);
    }

    #[test]
    fn integer_arithmetic_is_exact() {
        let a = Decimal::from(7);
        let b = Decimal::from(-3);
        assert_eq!(&a + &b, Decimal::from(4));
        assert_eq!(&a - &b, Decimal::from(10));
        assert_eq!(&a * &b, Decimal::from(-21));
        assert_eq!(-a, Decimal::from(-7));
    }

    #[test]
    fn checked_div_by_zero_is_none() {
        assert!(Decimal::from(1).checked_div(&Decimal::zero()).is_none());
    }

    #[test]
    fn sqrt_of_perfect_square() {
        assert_eq!(Decimal::from(25).sqrt().unwrap(), Decimal::from(5));
        assert!(Decimal::from(-4).sqrt().is_none());
    }

    #[test]
    fn float_conversion_is_close_to_literal() {
        let d = Decimal::try_from(4.046).unwrap();
        let literal: Decimal = "4.046".parse().unwrap();
        assert!((d - literal).is_negligible());
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(matches!(
            Decimal::try_from(f64::NAN),
            Err(VectorError::InvalidNumber(_))
        ));
        assert!(Decimal::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn malformed_string_is_rejected() {
        assert!(matches!(
            "1.2.3".parse::<Decimal>(),
            Err(VectorError::InvalidNumber(_))
        ));
    }

    #[test]
    fn epsilon_is_one_e_minus_ten() {
        let eps: Decimal = "0.0000000001".parse().unwrap();
        assert_eq!(Decimal::epsilon(), eps);
        assert!(!Decimal::epsilon().is_negligible());
        assert!(("0.00000000009".parse::<Decimal>().unwrap()).is_negligible());
    }

    #[test]
    fn display_strips_trailing_zeros() {
        let d: Decimal = "2.500".parse().unwrap();
        assert_eq!(d.to_string(), "2.5");
    }
}
