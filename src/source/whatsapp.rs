//! WhatsApp chat export adapter.
//!
//! Segments the line-oriented export format WhatsApp produces when a chat is
//! exported without media. Each message starts at the beginning of a line with
//! a `d/m/yy, hh:mm - Author: ` prefix; the body runs until the next such
//! prefix or the end of the file and may span multiple physical lines.
//!
//! The `regex` crate has no lookahead, so instead of a single non-greedy
//! match-to-next-boundary pattern the segmenter collects every boundary match
//! and slices the body out of the buffer between consecutive boundaries. The
//! result is the same ordered message list, with linear match work over the
//! whole document.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::{Message, SourceAdapter, SourceError};

/// Message boundary: date, time-of-day run, ` - `, author, `: `.
///
/// The time-of-day run is any non-hyphen text after the date, which tolerates
/// both 24-hour clocks and locales that append an AM/PM marker.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<datetime>\d{1,2}/\d{1,2}/\d{2}[^\n-]*?)\s+-\s+(?P<name>[^:\n]+):\s")
        .expect("boundary pattern is valid")
});

/// Attachment placeholder WhatsApp inserts for omitted media.
const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Timestamp layout inside a boundary: two-digit-year day/month/year date and
/// a 24-hour clock.
const DATE_PATTERN: &str = "%d/%m/%y, %H:%M";

/// Adapter for WhatsApp chat export files.
#[derive(Debug, Clone, Default)]
pub struct WhatsAppSource;

impl WhatsAppSource {
    /// Create a new WhatsApp adapter.
    pub fn new() -> Self {
        Self
    }

    /// Parse the captured date/time substring of a boundary.
    fn parse_timestamp(text: &str) -> Result<NaiveDateTime, SourceError> {
        NaiveDateTime::parse_from_str(text.trim(), DATE_PATTERN).map_err(|source| {
            SourceError::Timestamp {
                text: text.trim().to_string(),
                source,
            }
        })
    }
}

impl SourceAdapter for WhatsAppSource {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    fn extract_messages(&self, raw: &str) -> Result<Vec<Message>, SourceError> {
        // Boundary-index scan: every boundary starts a message whose body is
        // the text up to the next boundary (or end of input).
        let boundaries: Vec<_> = BOUNDARY.captures_iter(raw).collect();

        let mut messages = Vec::with_capacity(boundaries.len());
        for (i, caps) in boundaries.iter().enumerate() {
            let whole = caps.get(0).expect("match always has group 0");
            let body_end = boundaries
                .get(i + 1)
                .map(|next| next.get(0).expect("match always has group 0").start())
                .unwrap_or(raw.len());

            let timestamp = Self::parse_timestamp(&caps["datetime"])?;
            let body = raw[whole.end()..body_end].replace(MEDIA_PLACEHOLDER, "");

            messages.push(Message {
                timestamp,
                author: caps["name"].trim().to_string(),
                body,
            });
        }

        Ok(messages)
    }
}
