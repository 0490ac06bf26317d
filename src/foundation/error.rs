/// Convenience result type used across pixgen.
pub type PixgenResult<T> = Result<T, PixgenError>;

/// Top-level error taxonomy used by engine and generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum PixgenError {
    /// Canvas creation with a non-positive or oversized extent.
    #[error("invalid dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },

    /// Checked pixel access outside the canvas rectangle.
    #[error("pixel ({x}, {y}) out of range for {width}x{height} canvas")]
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },

    /// Invalid user-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font loading or text rasterization failures.
    #[error("font error: {0}")]
    Font(String),

    /// PNG encoding or decoding failures.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixgenError {
    /// Build a [`PixgenError::InvalidDimension`] value.
    pub fn invalid_dimension(width: impl Into<i64>, height: impl Into<i64>) -> Self {
        Self::InvalidDimension {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Build a [`PixgenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixgenError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`PixgenError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
