//! Typed field accessors.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use aequum_names::AccessorMeta;

type Getter<T, V> = Arc<dyn for<'a> Fn(&'a T) -> &'a V + Send + Sync>;

/// Reads one field of type `V` out of an owning `T`.
///
/// Accessors borrow the field rather than copy it, so equality, hashing and
/// ordering never clone values. Besides the function itself an accessor
/// carries [`AccessorMeta`], from which its display name is resolved when
/// the engine is built.
///
/// ```
/// use aequum::{field, Accessor};
///
/// struct Person {
///     age: u32,
/// }
///
/// impl Person {
///     fn get_age(&self) -> &u32 {
///         &self.age
///     }
/// }
///
/// // Named by the getter: "age"
/// let by_getter = Accessor::new(Person::get_age);
/// // Named by the field the closure reads: "age"
/// let by_source = field!(|p: &Person| &p.age);
/// // Named explicitly
/// let explicit = Accessor::named("years", |p: &Person| &p.age);
/// # let _ = (by_getter, by_source, explicit);
/// ```
pub struct Accessor<T: ?Sized, V: ?Sized> {
    get: Getter<T, V>,
    meta: AccessorMeta,
}

impl<T: ?Sized, V: ?Sized> Accessor<T, V> {
    /// Wraps a function or closure.
    ///
    /// Named functions resolve their display name from the function name.
    /// Closures need either the [`field!`](crate::field) macro, which
    /// captures their source, or an explicit name.
    pub fn new<F>(get: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
    {
        Self {
            meta: AccessorMeta::of::<F>(),
            get: Arc::new(get),
        }
    }

    /// Wraps a function or closure under an explicit display name.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, get: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
    {
        Self::new(get).with_name(name)
    }

    /// Sets an explicit display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta = self.meta.with_name(name);
        self
    }

    /// Records where the accessor was declared and the source of its
    /// expression. Called by [`field!`](crate::field).
    #[doc(hidden)]
    #[must_use]
    pub fn with_source(mut self, module: &'static str, source: &'static str) -> Self {
        self.meta = self.meta.with_source(module, source);
        self
    }

    /// Reads the field.
    pub fn get<'a>(&self, owner: &'a T) -> &'a V {
        (*self.get)(owner)
    }

    /// Metadata used to resolve the display name.
    #[must_use]
    pub fn meta(&self) -> &AccessorMeta {
        &self.meta
    }
}

impl<T: ?Sized, V: ?Sized> Clone for Accessor<T, V> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            meta: self.meta.clone(),
        }
    }
}

impl<T: ?Sized, V: ?Sized> fmt::Debug for Accessor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").field("meta", &self.meta).finish_non_exhaustive()
    }
}

/// Builds an [`Accessor`] that remembers its own source, so its display
/// name can be read from the field it extracts.
///
/// Closure parameters need a type annotation.
///
/// ```
/// use aequum::field;
///
/// struct Person {
///     age: u32,
/// }
///
/// let age = field!(|p: &Person| &p.age);
/// assert_eq!(age.get(&Person { age: 7 }), &7);
/// ```
#[macro_export]
macro_rules! field {
    ($get:expr $(,)?) => {
        $crate::Accessor::new($get)
            .with_source(::core::module_path!(), ::core::stringify!($get))
    };
}
