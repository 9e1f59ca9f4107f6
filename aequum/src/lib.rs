//! Consistent equality, hashing, ordering and display from one field list.
//!
//! A type registers its significant fields once, in order, and delegates
//! [`PartialEq`], [`Hash`](std::hash::Hash), [`Ord`] and
//! [`Display`](std::fmt::Display) to the resulting engine. Because all four
//! are derived from the same list they cannot drift apart: equal values hash
//! identically and compare as equal.
//!
//! - [`Builder`] / [`IncomparableBuilder`]: field registration. Adding a
//!   field without an ordering moves to the incomparable builder for good.
//! - [`ComparableEqualsHashCode`] / [`EqualsHashCode`]: the engines.
//! - [`Accessor`] and [`field!`]: how a field is read, and named.
//! - [`comparator`]: stock comparators for comparable fields.
//!
//! Field names only matter for display. They are resolved once, when the
//! engine is built, from the accessor: a getter name, the field a closure
//! reads, or an explicit name. Anything that cannot be named fails
//! [`build`](Builder::build) instead of producing a misleading string later.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use std::fmt;
//! use std::hash::{Hash, Hasher};
//! use std::sync::LazyLock;
//!
//! use aequum::{field, ComparableEqualsHashCode};
//!
//! struct Pojo {
//!     field_one: String,
//!     field_two: String,
//! }
//!
//! static EQUALS_HASH_CODE: LazyLock<ComparableEqualsHashCode<Pojo>> = LazyLock::new(|| {
//!     aequum::builder()
//!         .with_comparable_field(field!(|p: &Pojo| &p.field_one))
//!         .with_comparable_field(field!(|p: &Pojo| &p.field_two))
//!         .build()
//!         .expect("Pojo fields are nameable")
//! });
//!
//! impl PartialEq for Pojo {
//!     fn eq(&self, other: &Self) -> bool {
//!         EQUALS_HASH_CODE.equals(self, other)
//!     }
//! }
//!
//! impl Eq for Pojo {}
//!
//! impl Hash for Pojo {
//!     fn hash<H: Hasher>(&self, state: &mut H) {
//!         EQUALS_HASH_CODE.hash(self, state);
//!     }
//! }
//!
//! impl PartialOrd for Pojo {
//!     fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
//!         Some(self.cmp(other))
//!     }
//! }
//!
//! impl Ord for Pojo {
//!     fn cmp(&self, other: &Self) -> Ordering {
//!         EQUALS_HASH_CODE.compare(self, other)
//!     }
//! }
//!
//! impl fmt::Display for Pojo {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         EQUALS_HASH_CODE.fmt(self, f)
//!     }
//! }
//!
//! let a = Pojo { field_one: "a".into(), field_two: "b".into() };
//! assert_eq!(a.to_string(), r#"Pojo{field_one="a", field_two="b"}"#);
//! ```

mod accessor;
mod builder;
pub mod comparator;
mod descriptor;
mod engine;
mod error;

use std::any::Any;

pub use accessor::Accessor;
pub use builder::{Builder, IncomparableBuilder};
pub use engine::{ComparableEqualsHashCode, EqualsHashCode, Rendered};
pub use error::{Error, Result};

pub use aequum_names::{
    AccessorMeta, NameError, NameResolver, Resolution, ResolvedName, SourceNameResolver,
};

/// Starts registering the significant fields of `T`.
#[must_use]
pub fn builder<T: Any>() -> Builder<T> {
    Builder::new()
}
