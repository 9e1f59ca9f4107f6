//! Error types for building and using an engine.

use aequum_names::NameError;
use thiserror::Error;

/// Result type for Aequum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported while building an engine, or by an unsupported call on one.
#[derive(Debug, Error)]
pub enum Error {
    /// The display name of a registered field could not be resolved.
    #[error("cannot name field #{index}: {source}")]
    Name {
        /// Registration position of the field, starting at zero.
        index: usize,
        #[source]
        source: NameError,
    },

    /// Two fields resolved to the same display name.
    #[error("more than one field is named `{0}`")]
    DuplicateFieldName(String),

    /// The operation needs a capability the engine was not built with.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
