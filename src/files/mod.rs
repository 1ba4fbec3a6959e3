//! Shared file helpers for transcript and blocklist loading.

mod content;

pub use content::{read_lossy, resolve};
