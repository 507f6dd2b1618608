//! Content model error types.

/// Error raised when outside input cannot be mapped onto the content model.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Field name is not a top-level document field.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Value does not have the shape the field requires.
    #[error("Invalid value for {field}: {source}")]
    InvalidValue {
        /// Field the value was meant for.
        field: &'static str,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// Section id is not one of the page sections.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Editor tab name is neither `content` nor `design`.
    #[error("Unknown editor tab: {0}")]
    UnknownTab(String),

    /// Navigation kind is not `internal`, `external` or `dropdown`.
    #[error("Unknown navigation kind: {0}")]
    UnknownKind(String),
}
