use thiserror::Error;

/// Top-level error type for the Lingeo library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LingeoError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by vector construction and vector arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not a finite number: {0}")]
    InvalidNumber(String),

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("zero vector has no magnitude")]
    ZeroMagnitude,

    #[error("cannot project onto a zero vector")]
    ZeroVectorProjection,

    #[error("cross product is only defined for 2D or 3D vectors, got dimension {0}")]
    UnsupportedDimension(usize),

    #[error("unknown angle unit {0:?}, expected radians or degrees")]
    InvalidUnit(String),
}

/// Errors raised by lines and planes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("degenerate {0}: normal vector is zero")]
    DegenerateLine(&'static str),

    #[error("linear system is singular")]
    SingularSystem,
}

/// Convenience type alias for results using [`LingeoError`].
pub type Result<T> = std::result::Result<T, LingeoError>;

impl VectorError {
    pub(crate) fn check_dimension(expected: usize, found: usize) -> std::result::Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, found })
        }
    }
}
