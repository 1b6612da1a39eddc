//! Error types for scene construction and rendering.

use thiserror::Error;

use crate::ObjectId;

/// Errors raised while building or rendering a scene.
///
/// Misses are not errors: a ray that hits nothing yields an empty
/// intersection list and `None` from [`crate::hit`].
#[derive(Debug, Error)]
pub enum TraceError {
    /// A transform with zero determinant was assigned to an object.
    #[error("transform is singular and cannot be inverted")]
    SingularTransform,

    /// No object with this id exists in the pool.
    #[error("unknown object id {0}")]
    UnknownObject(ObjectId),

    /// Render settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Render settings could not be parsed.
    #[error("failed to parse settings: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for tracer operations.
pub type Result<T> = std::result::Result<T, TraceError>;
