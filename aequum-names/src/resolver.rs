//! Resolution of an accessor's display name.

use std::fmt;

use tracing::debug;

use crate::meta::AccessorMeta;
use crate::source::{self, Located};
use crate::symbol::{last_segment, strip_getter, strip_predicate};
use crate::{NameError, NameResult};

/// How a display name was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Given explicitly alongside the accessor.
    Explicit,
    /// Getter-style callable (`get_age`).
    Getter,
    /// Predicate-style callable (`is_active`).
    Predicate,
    /// Field read in a closure's source.
    FieldRead,
    /// A closure forwarding to another callable, resolved through that callable.
    Delegated,
    /// The callable's own name.
    Verbatim,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Explicit => "explicit",
            Self::Getter => "getter",
            Self::Predicate => "predicate",
            Self::FieldRead => "field read",
            Self::Delegated => "delegated",
            Self::Verbatim => "verbatim",
        };
        f.write_str(s)
    }
}

/// A resolved display name and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    name: String,
    via: Resolution,
}

impl ResolvedName {
    #[must_use]
    pub fn new(name: impl Into<String>, via: Resolution) -> Self {
        Self {
            name: name.into(),
            via,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn via(&self) -> Resolution {
        self.via
    }

    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Turns accessor metadata into a display name.
///
/// Implemented for closures, so a one-off resolver can be passed inline.
pub trait NameResolver: Send + Sync {
    fn resolve(&self, meta: &AccessorMeta) -> NameResult<ResolvedName>;
}

impl<F> NameResolver for F
where
    F: Fn(&AccessorMeta) -> NameResult<ResolvedName> + Send + Sync,
{
    fn resolve(&self, meta: &AccessorMeta) -> NameResult<ResolvedName> {
        self(meta)
    }
}

/// The default resolver: explicit name, then getter, predicate, closure
/// source inspection and finally the verbatim symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceNameResolver;

impl SourceNameResolver {
    fn resolve_callable(name: &str) -> ResolvedName {
        if let Some(field) = strip_getter(name) {
            ResolvedName::new(field, Resolution::Getter)
        } else if let Some(field) = strip_predicate(name) {
            ResolvedName::new(field, Resolution::Predicate)
        } else {
            ResolvedName::new(name, Resolution::Verbatim)
        }
    }

    fn resolve_synthetic(meta: &AccessorMeta) -> NameResult<ResolvedName> {
        let Some(source_text) = meta.source() else {
            return Err(NameError::MetadataUnavailable {
                symbol: meta.symbol().to_string(),
            });
        };

        let located = source::locate(source_text).map_err(|source| NameError::Unparseable {
            source_text: source_text.to_string(),
            source,
        })?;

        match located {
            Some(Located::Field(field)) => Ok(ResolvedName::new(field, Resolution::FieldRead)),
            Some(Located::Callable(callee)) => {
                debug!(callee = %callee, source = source_text, "Accessor delegates to callable");
                let through = Self::resolve_callable(&callee);
                Ok(ResolvedName::new(through.into_name(), Resolution::Delegated))
            }
            None => Err(NameError::NoFieldRead {
                source_text: source_text.to_string(),
            }),
        }
    }
}

impl NameResolver for SourceNameResolver {
    fn resolve(&self, meta: &AccessorMeta) -> NameResult<ResolvedName> {
        let resolved = if let Some(name) = meta.explicit_name() {
            ResolvedName::new(name, Resolution::Explicit)
        } else if meta.is_synthetic() {
            Self::resolve_synthetic(meta)?
        } else {
            Self::resolve_callable(last_segment(meta.symbol()))
        };

        if resolved.name().is_empty() {
            return Err(NameError::Empty {
                symbol: meta.symbol().to_string(),
            });
        }
        Ok(resolved)
    }
}
