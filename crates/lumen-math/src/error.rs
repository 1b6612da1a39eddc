use thiserror::Error;

/// Errors from fallible math operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The matrix has a zero determinant and cannot be inverted.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
}
