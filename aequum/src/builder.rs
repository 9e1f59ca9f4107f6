//! Fluent field registration.
//!
//! Registration starts on a [`Builder`], which can produce an engine with
//! ordering. Registering any field without a comparator (`with_field`)
//! moves to an [`IncomparableBuilder`], which has no way back: it cannot
//! register comparable fields and builds an engine without `compare`.

use std::any::Any;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use aequum_names::{NameResolver, SourceNameResolver, short_type_name};

use crate::descriptor::{FieldDescriptor, show_field, show_with};
use crate::engine::{ComparableEqualsHashCode, EqualsHashCode};
use crate::{Accessor, Result, comparator};

/// Settings shared by both builder phases.
pub(crate) struct Settings {
    pub(crate) resolver: Arc<dyn NameResolver>,
    pub(crate) type_name: Cow<'static, str>,
}

impl Settings {
    fn new<T: Any>() -> Self {
        Self {
            resolver: Arc::new(SourceNameResolver),
            type_name: Cow::Borrowed(short_type_name(std::any::type_name::<T>())),
        }
    }
}

/// Registers the significant fields of `T`, keeping ordering available.
///
/// Fields are kept in registration order: equality and hashing visit them
/// in that order, and so does `compare`, which makes earlier fields the
/// more significant ones.
pub struct Builder<T> {
    fields: Vec<FieldDescriptor<T>>,
    settings: Settings,
}

impl<T: Any> Builder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            settings: Settings::new::<T>(),
        }
    }

    /// Replaces the resolver used to name fields.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.settings.resolver = Arc::new(resolver);
        self
    }

    /// Overrides the type name shown in the rendered string.
    #[must_use]
    pub fn with_type_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.settings.type_name = name.into();
        self
    }

    /// Adds a field used for equality, hashing and display, but not ordering.
    ///
    /// The returned builder can no longer add comparable fields.
    #[must_use]
    pub fn with_field<V>(self, accessor: Accessor<T, V>) -> IncomparableBuilder<T>
    where
        V: PartialEq + Hash + fmt::Debug + ?Sized + 'static,
    {
        self.into_incomparable().with_field(accessor)
    }

    /// Like [`with_field`](Self::with_field), displaying the value `show` returns.
    #[must_use]
    pub fn with_field_shown_as<V, D, S>(self, accessor: Accessor<T, V>, show: S) -> IncomparableBuilder<T>
    where
        V: PartialEq + Hash + ?Sized + 'static,
        D: fmt::Debug,
        S: Fn(&T) -> D + Send + Sync + 'static,
    {
        self.into_incomparable().with_field_shown_as(accessor, show)
    }

    /// Adds a field ordered by its natural ordering.
    #[must_use]
    pub fn with_comparable_field<V>(self, accessor: Accessor<T, V>) -> Self
    where
        V: Ord + Hash + fmt::Debug + ?Sized + 'static,
    {
        self.with_comparable_field_by(accessor, comparator::natural::<V>)
    }

    /// Adds a field ordered by `comparator`.
    #[must_use]
    pub fn with_comparable_field_by<V, C>(self, accessor: Accessor<T, V>, comparator: C) -> Self
    where
        V: PartialEq + Hash + fmt::Debug + ?Sized + 'static,
        C: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        let display = show_field(&accessor);
        self.push(FieldDescriptor::comparable(accessor, comparator, display))
    }

    /// Like [`with_comparable_field_by`](Self::with_comparable_field_by),
    /// displaying the value `show` returns.
    #[must_use]
    pub fn with_comparable_field_by_shown_as<V, C, D, S>(
        self,
        accessor: Accessor<T, V>,
        comparator: C,
        show: S,
    ) -> Self
    where
        V: PartialEq + Hash + ?Sized + 'static,
        C: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
        D: fmt::Debug,
        S: Fn(&T) -> D + Send + Sync + 'static,
    {
        self.push(FieldDescriptor::comparable(accessor, comparator, show_with(show)))
    }

    /// Adds an `Option` field: `None` orders before any `Some`, two `None`s
    /// are equal, and present values use their natural ordering.
    #[must_use]
    pub fn with_optional_comparable_field<V>(self, accessor: Accessor<T, Option<V>>) -> Self
    where
        V: Ord + Hash + fmt::Debug + 'static,
    {
        self.with_optional_comparable_field_by(accessor, comparator::natural::<V>)
    }

    /// Adds an `Option` field whose present values are ordered by `comparator`.
    #[must_use]
    pub fn with_optional_comparable_field_by<V, C>(
        self,
        accessor: Accessor<T, Option<V>>,
        comparator: C,
    ) -> Self
    where
        V: PartialEq + Hash + fmt::Debug + 'static,
        C: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        self.with_comparable_field_by(accessor, comparator::none_first(comparator))
    }

    /// Adds a field that is only displayed.
    #[must_use]
    pub fn with_display_field<V>(self, accessor: Accessor<T, V>) -> Self
    where
        V: fmt::Debug + ?Sized + 'static,
    {
        let display = show_field(&accessor);
        self.push(FieldDescriptor::display_only(&accessor, display))
    }

    /// Like [`with_display_field`](Self::with_display_field), displaying the
    /// value `show` returns. The accessor still provides the name.
    #[must_use]
    pub fn with_display_field_shown_as<V, D, S>(self, accessor: Accessor<T, V>, show: S) -> Self
    where
        V: ?Sized + 'static,
        D: fmt::Debug,
        S: Fn(&T) -> D + Send + Sync + 'static,
    {
        self.push(FieldDescriptor::display_only(&accessor, show_with(show)))
    }

    /// Resolves every field name and builds the engine.
    pub fn build(self) -> Result<ComparableEqualsHashCode<T>> {
        ComparableEqualsHashCode::new(self.fields, &self.settings)
    }

    fn push(mut self, field: FieldDescriptor<T>) -> Self {
        self.fields.push(field);
        self
    }

    fn into_incomparable(self) -> IncomparableBuilder<T> {
        IncomparableBuilder {
            fields: self
                .fields
                .into_iter()
                .map(FieldDescriptor::without_comparator)
                .collect(),
            settings: self.settings,
        }
    }
}

impl<T: Any> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers the significant fields of `T` once ordering is no longer
/// possible. Builds an [`EqualsHashCode`].
///
/// Comparable fields cannot be registered any more:
///
/// ```compile_fail
/// use aequum::field;
///
/// struct Pair {
///     first: u32,
///     second: u32,
/// }
///
/// let _ = aequum::builder()
///     .with_field(field!(|p: &Pair| &p.first))
///     .with_comparable_field(field!(|p: &Pair| &p.second));
/// ```
pub struct IncomparableBuilder<T> {
    fields: Vec<FieldDescriptor<T>>,
    settings: Settings,
}

impl<T: Any> IncomparableBuilder<T> {
    /// Replaces the resolver used to name fields.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.settings.resolver = Arc::new(resolver);
        self
    }

    /// Overrides the type name shown in the rendered string.
    #[must_use]
    pub fn with_type_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.settings.type_name = name.into();
        self
    }

    /// Adds a field used for equality, hashing and display.
    #[must_use]
    pub fn with_field<V>(self, accessor: Accessor<T, V>) -> Self
    where
        V: PartialEq + Hash + fmt::Debug + ?Sized + 'static,
    {
        let display = show_field(&accessor);
        self.push(FieldDescriptor::equality(accessor, display))
    }

    /// Like [`with_field`](Self::with_field), displaying the value `show` returns.
    #[must_use]
    pub fn with_field_shown_as<V, D, S>(self, accessor: Accessor<T, V>, show: S) -> Self
    where
        V: PartialEq + Hash + ?Sized + 'static,
        D: fmt::Debug,
        S: Fn(&T) -> D + Send + Sync + 'static,
    {
        self.push(FieldDescriptor::equality(accessor, show_with(show)))
    }

    /// Adds a field that is only displayed.
    #[must_use]
    pub fn with_display_field<V>(self, accessor: Accessor<T, V>) -> Self
    where
        V: fmt::Debug + ?Sized + 'static,
    {
        let display = show_field(&accessor);
        self.push(FieldDescriptor::display_only(&accessor, display))
    }

    /// Like [`with_display_field`](Self::with_display_field), displaying the
    /// value `show` returns. The accessor still provides the name.
    #[must_use]
    pub fn with_display_field_shown_as<V, D, S>(self, accessor: Accessor<T, V>, show: S) -> Self
    where
        V: ?Sized + 'static,
        D: fmt::Debug,
        S: Fn(&T) -> D + Send + Sync + 'static,
    {
        self.push(FieldDescriptor::display_only(&accessor, show_with(show)))
    }

    /// Resolves every field name and builds the engine.
    pub fn build(self) -> Result<EqualsHashCode<T>> {
        EqualsHashCode::new(self.fields, &self.settings)
    }

    fn push(mut self, field: FieldDescriptor<T>) -> Self {
        self.fields.push(field);
        self
    }
}
