//! The composite engines produced by the builders.
//!
//! An engine is built once per owning type and then shared by every
//! instance. It holds no per-instance state, so it can live in a `static`
//! and be used from any number of threads.

use std::any::Any;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{DefaultHasher, Hasher};

use tracing::{debug, warn};

use crate::builder::Settings;
use crate::descriptor::{CmpFn, Equality, FieldDescriptor, FmtFn};
use crate::{Error, Result};

/// Equality, hashing and display for `T`, derived from its registered fields.
///
/// ```
/// use std::sync::LazyLock;
/// use aequum::{field, EqualsHashCode};
///
/// struct Point {
///     x: f32,
///     y: f32,
///     label: String,
/// }
///
/// static POINT: LazyLock<EqualsHashCode<Point>> = LazyLock::new(|| {
///     aequum::builder()
///         .with_field(field!(|p: &Point| &p.label))
///         .with_display_field(field!(|p: &Point| &p.x))
///         .with_display_field(field!(|p: &Point| &p.y))
///         .build()
///         .expect("Point fields are nameable")
/// });
///
/// impl PartialEq for Point {
///     fn eq(&self, other: &Self) -> bool {
///         POINT.equals(self, other)
///     }
/// }
///
/// let a = Point { x: 1.0, y: 2.0, label: "a".into() };
/// assert_eq!(POINT.to_string(&a), r#"Point{label="a", x=1.0, y=2.0}"#);
/// ```
///
/// It has no ordering:
///
/// ```compile_fail
/// use aequum::field;
///
/// struct Label {
///     text: String,
/// }
///
/// let engine = aequum::builder()
///     .with_field(field!(|l: &Label| &l.text))
///     .build()
///     .unwrap();
/// let label = Label { text: "a".into() };
/// let _ = engine.compare(&label, &label);
/// ```
pub struct EqualsHashCode<T> {
    type_name: Cow<'static, str>,
    /// Equality-included fields, in registration order.
    equality: Vec<Equality<T>>,
    /// Every field, sorted by resolved name.
    display: Vec<(String, FmtFn<T>)>,
}

impl<T: Any> EqualsHashCode<T> {
    pub(crate) fn new(fields: Vec<FieldDescriptor<T>>, settings: &Settings) -> Result<Self> {
        let mut equality = Vec::new();
        let mut shown = Vec::with_capacity(fields.len());

        for (index, field) in fields.into_iter().enumerate() {
            let resolved = settings.resolver.resolve(&field.meta).map_err(|source| {
                warn!(
                    type_name = %settings.type_name,
                    index,
                    symbol = field.meta.symbol(),
                    error = %source,
                    "Failed to resolve field name"
                );
                Error::Name { index, source }
            })?;
            debug!(
                type_name = %settings.type_name,
                field = resolved.name(),
                via = %resolved.via(),
                symbol = field.meta.symbol(),
                "Resolved field name"
            );

            if let Some(eq) = field.equality {
                equality.push(eq);
            }
            shown.push((resolved.into_name(), field.display));
        }

        shown.sort_by(|(a, _), (b, _)| a.cmp(b));
        if let Some(pair) = shown.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            let name = pair[0].0.clone();
            warn!(type_name = %settings.type_name, field = %name, "Duplicate field name");
            return Err(Error::DuplicateFieldName(name));
        }

        let field_count = shown.len();
        let equality_count = equality.len();
        debug!(
            type_name = %settings.type_name,
            fields = field_count,
            equality_fields = equality_count,
            "Built engine"
        );

        Ok(Self {
            type_name: settings.type_name.clone(),
            equality,
            display: shown,
        })
    }

    /// Type-checked equality, for comparing against a value of unknown type.
    ///
    /// Returns `false` if `other` is not a `T`, and `true` if it is `this`
    /// itself. Otherwise compares every equality field, stopping at the
    /// first difference.
    pub fn is_equal(&self, this: &T, other: &dyn Any) -> bool {
        match other.downcast_ref::<T>() {
            Some(that) => self.equals(this, that),
            None => false,
        }
    }

    /// Equality over the equality fields, in registration order.
    pub fn equals(&self, this: &T, that: &T) -> bool {
        if std::ptr::eq(this, that) {
            return true;
        }
        self.equality.iter().all(|field| (field.eq)(this, that))
    }

    /// Feeds every equality field, in registration order, into `state`.
    ///
    /// Suitable for implementing [`Hash`] on `T`.
    pub fn hash<H: Hasher>(&self, this: &T, state: &mut H) {
        let state: &mut dyn Hasher = state;
        for field in &self.equality {
            (field.hash)(this, state);
        }
    }

    /// Hash code of `this` from a [`DefaultHasher`].
    ///
    /// Equal values always get the same hash code.
    pub fn to_hash_code(&self, this: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(this, &mut hasher);
        hasher.finish()
    }

    /// Writes `TypeName{name=value, ...}` with every field sorted by name.
    ///
    /// Values use their `Debug` form. Suitable for implementing
    /// [`Display`](fmt::Display) or [`Debug`](fmt::Debug) on `T`.
    pub fn fmt(&self, this: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.type_name)?;
        for (i, (name, show)) in self.display.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}=")?;
            show(this, f)?;
        }
        f.write_str("}")
    }

    /// Adapter that renders `this` through [`fmt`](Self::fmt).
    pub fn display<'a>(&'a self, this: &'a T) -> Rendered<'a, T> {
        Rendered { engine: self, this }
    }

    /// Renders `this` to a string.
    pub fn to_string(&self, this: &T) -> String {
        self.display(this).to_string()
    }

    /// Resolved field names, in display order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.display.iter().map(|(name, _)| name.as_str())
    }

    /// Name of the owning type used in the rendered string.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl<T> fmt::Debug for EqualsHashCode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualsHashCode")
            .field("type_name", &self.type_name)
            .field("equality_fields", &self.equality.len())
            .field("fields", &self.display.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}

/// `Display` adapter returned by [`EqualsHashCode::display`].
pub struct Rendered<'a, T> {
    engine: &'a EqualsHashCode<T>,
    this: &'a T,
}

impl<T: Any> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.engine.fmt(self.this, f)
    }
}

/// [`EqualsHashCode`] plus a lexicographic ordering over the comparable
/// fields, in registration order.
///
/// ```
/// use std::cmp::Ordering;
/// use std::sync::LazyLock;
/// use aequum::{field, ComparableEqualsHashCode};
///
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// static VERSION: LazyLock<ComparableEqualsHashCode<Version>> = LazyLock::new(|| {
///     aequum::builder()
///         .with_comparable_field(field!(|v: &Version| &v.major))
///         .with_comparable_field(field!(|v: &Version| &v.minor))
///         .build()
///         .expect("Version fields are nameable")
/// });
///
/// let old = Version { major: 1, minor: 9 };
/// let new = Version { major: 2, minor: 0 };
/// assert_eq!(VERSION.compare(&old, &new), Ordering::Less);
/// ```
pub struct ComparableEqualsHashCode<T> {
    inner: EqualsHashCode<T>,
    /// Comparable fields, in registration order.
    comparators: Vec<CmpFn<T>>,
}

impl<T: Any> ComparableEqualsHashCode<T> {
    pub(crate) fn new(mut fields: Vec<FieldDescriptor<T>>, settings: &Settings) -> Result<Self> {
        let comparators: Vec<_> = fields
            .iter_mut()
            .filter_map(|field| field.comparator.take())
            .collect();
        let inner = EqualsHashCode::new(fields, settings)?;
        debug!(
            type_name = %settings.type_name,
            comparable_fields = comparators.len(),
            "Engine supports ordering"
        );
        Ok(Self { inner, comparators })
    }

    /// Compares `this` and `that` field by field, returning the first
    /// non-equal result.
    ///
    /// # Panics
    ///
    /// Panics if no comparable field was registered; see
    /// [`try_compare`](Self::try_compare).
    pub fn compare(&self, this: &T, that: &T) -> Ordering {
        match self.try_compare(this, that) {
            Ok(ordering) => ordering,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`compare`](Self::compare), but reports a missing ordering as
    /// [`Error::Unsupported`].
    pub fn try_compare(&self, this: &T, that: &T) -> Result<Ordering> {
        if self.comparators.is_empty() {
            return Err(Error::Unsupported("compare: no comparable fields were registered"));
        }
        Ok(self
            .comparators
            .iter()
            .map(|cmp| cmp(this, that))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal))
    }

    /// Returns true if at least one comparable field was registered.
    pub fn is_comparable(&self) -> bool {
        !self.comparators.is_empty()
    }

    /// See [`EqualsHashCode::is_equal`].
    pub fn is_equal(&self, this: &T, other: &dyn Any) -> bool {
        self.inner.is_equal(this, other)
    }

    /// See [`EqualsHashCode::equals`].
    pub fn equals(&self, this: &T, that: &T) -> bool {
        self.inner.equals(this, that)
    }

    /// See [`EqualsHashCode::hash`].
    pub fn hash<H: Hasher>(&self, this: &T, state: &mut H) {
        self.inner.hash(this, state);
    }

    /// See [`EqualsHashCode::to_hash_code`].
    pub fn to_hash_code(&self, this: &T) -> u64 {
        self.inner.to_hash_code(this)
    }

    /// See [`EqualsHashCode::fmt`].
    pub fn fmt(&self, this: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(this, f)
    }

    /// See [`EqualsHashCode::display`].
    pub fn display<'a>(&'a self, this: &'a T) -> Rendered<'a, T> {
        self.inner.display(this)
    }

    /// See [`EqualsHashCode::to_string`].
    pub fn to_string(&self, this: &T) -> String {
        self.inner.to_string(this)
    }

    /// See [`EqualsHashCode::field_names`].
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.inner.field_names()
    }

    /// See [`EqualsHashCode::type_name`].
    pub fn type_name(&self) -> &str {
        self.inner.type_name()
    }
}

impl<T> fmt::Debug for ComparableEqualsHashCode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparableEqualsHashCode")
            .field("inner", &self.inner)
            .field("comparable_fields", &self.comparators.len())
            .finish()
    }
}
