//! Source adapter errors.

/// Errors from transcript segmentation and adapter dispatch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Unsupported source type '{given}'. Supported types: {supported}")]
    UnsupportedType { given: String, supported: String },

    #[error("Malformed timestamp '{text}' in a matched message boundary")]
    Timestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}
