//! chatcloud - turn an exported chat transcript into a ranked word-frequency
//! table suitable for rendering as a word cloud.
//!
//! The library is split along the pipeline:
//!
//! - [`source`] - transcript adapters that segment raw exports into messages
//! - [`analysis`] - tokenization, filtering and frequency aggregation
//! - [`blocklist`] - user-supplied exclusion lists (words and patterns)
//! - [`files`] - lenient text reading shared by the loaders
//!
//! The binary wires these together; rendering the actual word-cloud bitmap is
//! left to downstream tooling consuming the ranked table.

pub mod analysis;
pub mod blocklist;
pub mod files;
pub mod source;

pub use analysis::TokenFilter;
pub use source::{Message, SourceAdapter};
