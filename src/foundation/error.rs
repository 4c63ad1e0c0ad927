/// Convenience result type used across Gridshot.
pub type GridshotResult<T> = Result<T, GridshotError>;

/// Top-level error taxonomy used by the animation pipeline.
#[derive(thiserror::Error, Debug)]
pub enum GridshotError {
    /// Invalid user-provided grid or option data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding rendered frames into a container format.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridshotError {
    /// Build a [`GridshotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridshotError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
