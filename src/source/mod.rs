//! Transcript source adapters.
//!
//! A [`SourceAdapter`] turns one raw transcript export into an ordered list of
//! [`Message`] records. Each supported export format gets its own adapter
//! behind the same trait; callers look adapters up by name with [`for_name`].
//! Currently one format is implemented: the WhatsApp chat export.

mod error;
mod whatsapp;

pub use error::SourceError;
pub use whatsapp::WhatsAppSource;

use chrono::NaiveDateTime;

/// Source type names accepted by [`for_name`], in the order they are listed
/// in "unsupported type" errors.
pub const SUPPORTED_TYPES: &[&str] = &["whatsapp"];

/// One chat message extracted from a transcript.
///
/// Immutable once constructed; downstream analysis only reads `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// When the message was sent, from the transcript's own timestamp.
    pub timestamp: NaiveDateTime,
    /// Display name of the sender as it appears in the export.
    pub author: String,
    /// Message text, possibly spanning multiple physical lines.
    pub body: String,
}

/// A transcript format that can be segmented into messages.
///
/// Implementations are stateless; the whole transcript is passed in as one
/// string and segmented in a single pass.
pub trait SourceAdapter {
    /// The name this adapter is registered under.
    fn name(&self) -> &'static str;

    /// Segment a raw transcript into ordered messages.
    ///
    /// A transcript containing no message boundaries yields an empty Vec,
    /// not an error. A boundary whose timestamp fails to parse is an error:
    /// a matched boundary means the format contract was supposed to hold.
    fn extract_messages(&self, raw: &str) -> Result<Vec<Message>, SourceError>;

    /// Segment a raw transcript and keep only the message bodies.
    fn extract_texts(&self, raw: &str) -> Result<Vec<String>, SourceError> {
        Ok(self
            .extract_messages(raw)?
            .into_iter()
            .map(|m| m.body)
            .collect())
    }
}

/// Look up a source adapter by name (case-insensitive).
pub fn for_name(name: &str) -> Result<Box<dyn SourceAdapter>, SourceError> {
    match name.to_ascii_lowercase().as_str() {
        "whatsapp" => Ok(Box::new(WhatsAppSource::new())),
        _ => Err(SourceError::UnsupportedType {
            given: name.to_string(),
            supported: SUPPORTED_TYPES.join(", "),
        }),
    }
}
