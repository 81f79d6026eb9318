/// Convenience result type used across Petalfall.
pub type PetalfallResult<T> = Result<T, PetalfallError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PetalfallError {
    /// Invalid user-provided scene or layer configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unparseable palette entry.
    #[error("palette error: {0}")]
    Palette(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PetalfallError {
    /// Build a [`PetalfallError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PetalfallError::Palette`] value.
    pub fn palette(msg: impl Into<String>) -> Self {
        Self::Palette(msg.into())
    }

    /// Build a [`PetalfallError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
