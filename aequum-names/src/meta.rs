//! Identifying metadata carried by a field accessor.

use std::borrow::Cow;

/// Marker the compiler uses for closure types in `std::any::type_name`.
const CLOSURE_MARKER: &str = "{{closure}}";

/// What is known about an accessor when its display name is resolved.
///
/// Built from the accessor's type (`symbol`), plus whatever the call site
/// chose to capture: the declaring module and the source of the extraction
/// expression (the `field!` macro captures both), or an explicit name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorMeta {
    symbol: &'static str,
    module: Option<&'static str>,
    source: Option<&'static str>,
    name: Option<Cow<'static, str>>,
}

impl AccessorMeta {
    /// Metadata for a callable of type `F`, identified only by its type name.
    #[must_use]
    pub fn of<F: ?Sized>() -> Self {
        Self::from_symbol(std::any::type_name::<F>())
    }

    /// Metadata identified by an arbitrary symbol.
    #[must_use]
    pub const fn from_symbol(symbol: &'static str) -> Self {
        Self {
            symbol,
            module: None,
            source: None,
            name: None,
        }
    }

    /// Attaches the declaring module and the source of the extraction expression.
    #[must_use]
    pub fn with_source(mut self, module: &'static str, source: &'static str) -> Self {
        self.module = Some(module);
        self.source = Some(source);
        self
    }

    /// Attaches an explicit display name, which skips resolution.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Full symbolic name, e.g. `my_crate::Person::get_age`.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Module the accessor was declared in, if captured.
    #[must_use]
    pub fn module(&self) -> Option<&'static str> {
        self.module
    }

    /// Source text of the extraction expression, if captured.
    #[must_use]
    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    /// Explicit display name, if one was given.
    #[must_use]
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the accessor is an inline closure rather than a named callable.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        crate::last_segment(self.symbol) == CLOSURE_MARKER
    }
}
