/// Convenience result type used across glyphseq.
pub type GlyphseqResult<T> = Result<T, GlyphseqError>;

/// Top-level error taxonomy used by crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlyphseqError {
    /// Keyframe text that violates the interchange grammar.
    #[error("malformed keyframe data: {0}")]
    MalformedDocument(String),

    /// A glyph index lookup did not return a usable result.
    #[error("glyph lookup failed: {0}")]
    LookupFailed(String),

    /// Invalid user-provided or project data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphseqError {
    /// Build a [`GlyphseqError::MalformedDocument`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    /// Build a [`GlyphseqError::LookupFailed`] value.
    pub fn lookup_failed(msg: impl Into<String>) -> Self {
        Self::LookupFailed(msg.into())
    }

    /// Build a [`GlyphseqError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphseqError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
