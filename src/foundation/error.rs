/// Convenience result type used across shapefx.
pub type ShapeFxResult<T> = Result<T, ShapeFxError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Degenerate shapes and regions lying outside an image are policies, not errors: they act as
/// the identity of the operation they take part in.
#[derive(thiserror::Error, Debug)]
pub enum ShapeFxError {
    /// Mask building was asked to operate without any include shape.
    #[error("empty region: no include shapes to operate inside")]
    EmptyRegion,

    /// The text measurement collaborator could not produce metrics.
    #[error("measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    /// Invalid user-provided shapes, options or effect parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while running the compositing pipeline.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapeFxError {
    /// Build a [`ShapeFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShapeFxError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ShapeFxError::MeasurementUnavailable`] value.
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::MeasurementUnavailable(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
