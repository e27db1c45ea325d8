/// Library-wide result alias.
pub type StudioResult<T> = Result<T, StudioError>;

/// Error taxonomy for composition evaluation, rendering, encoding and the token/prototype glue.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// Invalid configuration or arguments (bad ids, zero sizes, empty ranges).
    #[error("validation error: {0}")]
    Validation(String),

    /// A composition or token lookup could not be evaluated.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// A frame sink failed to accept or finalize frames.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem or process IO failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error with context attached upstream.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    /// Build a [`StudioError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StudioError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`StudioError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StudioError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`StudioError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
