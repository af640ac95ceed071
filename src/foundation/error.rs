/// Result alias used across the crate.
pub type RoughResult<T> = Result<T, RoughError>;

#[derive(thiserror::Error, Debug)]
/// Error type for the configuration boundary and rendering surfaces.
///
/// The stroke pipeline itself never fails: malformed padding, unknown kinds and
/// non-positive iteration counts all degrade to "draw less".
pub enum RoughError {
    /// Invalid annotation or scene input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A rendering surface rejected a path or style.
    #[error("render error: {0}")]
    Render(String),

    /// Scene or config (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error (IO, rasterization, ...).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoughError {
    /// Build a [`RoughError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RoughError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RoughError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
