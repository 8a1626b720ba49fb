use thiserror::Error;

pub type Result<T, E = EuclideanVectorError> = core::result::Result<T, E>;

/// Misuse of a [`EuclideanVector`](crate::EuclideanVector) that the caller can correct.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EuclideanVectorError {
    /// An elementwise operation was given operands of different dimension.
    #[error("Dimensions of LHS({lhs}) and RHS({rhs}) do not match")]
    DimensionMismatch { lhs: usize, rhs: usize },
    #[error("Invalid vector division by 0")]
    DivisionByZero,
    #[error("euclidean_vector with no dimensions does not have a unit vector")]
    NoDimensions,
    #[error("euclidean_vector with zero euclidean normal does not have a unit vector")]
    ZeroNorm,
    /// Checked access outside `0..dimensions()`.
    #[error("Index {index} is not valid for this euclidean_vector object")]
    InvalidIndex { index: usize },
}

/// Broad category of an [`EuclideanVectorError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    DimensionMismatch,
    /// Division by zero, or a unit vector that does not exist.
    Domain,
    Index,
}

impl EuclideanVectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EuclideanVectorError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            EuclideanVectorError::DivisionByZero
            | EuclideanVectorError::NoDimensions
            | EuclideanVectorError::ZeroNorm => ErrorKind::Domain,
            EuclideanVectorError::InvalidIndex { .. } => ErrorKind::Index,
        }
    }
}
