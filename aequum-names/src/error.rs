//! Error types for name resolution.

use thiserror::Error;

/// Result type for name resolution.
pub type NameResult<T> = Result<T, NameError>;

/// Errors that can occur while resolving an accessor's display name.
#[derive(Debug, Error)]
pub enum NameError {
    /// A closure accessor was registered without its source text, so there
    /// is nothing to inspect.
    #[error(
        "no source captured for synthetic accessor `{symbol}`; register it with `field!` or give it an explicit name"
    )]
    MetadataUnavailable { symbol: String },

    /// The captured source could not be parsed as a Rust expression.
    #[error("accessor source `{source_text}` is not a Rust expression")]
    Unparseable {
        source_text: String,
        #[source]
        source: syn::Error,
    },

    /// The captured source parsed, but computes a value instead of reading a field.
    #[error("accessor `{source_text}` does not read a field; give it an explicit name")]
    NoFieldRead { source_text: String },

    /// Resolution produced an empty name.
    #[error("accessor `{symbol}` resolved to an empty name")]
    Empty { symbol: String },
}

impl NameError {
    /// Returns true if the failure came from missing or unreadable metadata
    /// rather than from inspecting a well-formed accessor.
    #[must_use]
    pub fn is_metadata_failure(&self) -> bool {
        matches!(self, Self::MetadataUnavailable { .. } | Self::Unparseable { .. })
    }
}
