use std::fmt;
use std::str::FromStr;

use crate::error::VectorError;

/// Unit in which [`Vector::angle_with_unit`](super::Vector::angle_with_unit)
/// reports its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Expresses an angle given in radians in this unit.
    #[must_use]
    pub fn express(self, radians: f64) -> f64 {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians.to_degrees(),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = VectorError;

    /// Accepts `R`, `rad`, `radians`, `D`, `deg` and `degrees`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "rad" | "radians" => Ok(Self::Radians),
            "d" | "deg" | "degrees" => Ok(Self::Degrees),
            _ => Err(VectorError::InvalidUnit(s.to_owned())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radians => f.write_str("rad"),
            Self::Degrees => f.write_str("deg"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn parses_short_and_long_tokens() {
        assert_eq!("R".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert_eq!("deg".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!(" Degrees ".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
    }

    #[test]
    fn unknown_token_is_invalid_unit() {
        assert_eq!(
            "gradians".parse::<AngleUnit>(),
            Err(VectorError::InvalidUnit("gradians".into()))
        );
    }

    #[test]
    fn expresses_radians() {
        assert_relative_eq!(AngleUnit::Degrees.express(PI / 2.0), 90.0);
        assert_relative_eq!(AngleUnit::Radians.express(PI), PI);
    }
}
