//! Type-erased field descriptors.
//!
//! Each registration call turns a typed [`Accessor`] into a
//! [`FieldDescriptor`]: a set of closures over the owning type only, one per
//! structural operation the field takes part in. The capability bounds on
//! the field type (`PartialEq + Hash`, a comparator, `Debug`) are checked at
//! registration and erased here.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use aequum_names::AccessorMeta;

use crate::Accessor;

pub(crate) type EqFn<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;
pub(crate) type HashFn<T> = Box<dyn Fn(&T, &mut dyn Hasher) + Send + Sync>;
pub(crate) type CmpFn<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;
pub(crate) type FmtFn<T> = Box<dyn Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result + Send + Sync>;

/// Equality and hashing for one field, always registered together.
pub(crate) struct Equality<T> {
    pub(crate) eq: EqFn<T>,
    pub(crate) hash: HashFn<T>,
}

/// One registered field.
///
/// `equality` present means the field takes part in equality and hashing.
/// `comparator` present means it takes part in ordering. A field with
/// neither is display-only. Every field is displayed.
pub(crate) struct FieldDescriptor<T> {
    pub(crate) meta: AccessorMeta,
    pub(crate) equality: Option<Equality<T>>,
    pub(crate) comparator: Option<CmpFn<T>>,
    pub(crate) display: FmtFn<T>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// A field used for equality, hashing and display.
    pub(crate) fn equality<V>(accessor: Accessor<T, V>, display: FmtFn<T>) -> Self
    where
        V: PartialEq + Hash + ?Sized + 'static,
    {
        Self {
            meta: accessor.meta().clone(),
            equality: Some(equality(accessor)),
            comparator: None,
            display,
        }
    }

    /// A field used for equality, hashing, ordering and display.
    pub(crate) fn comparable<V, C>(accessor: Accessor<T, V>, comparator: C, display: FmtFn<T>) -> Self
    where
        V: PartialEq + Hash + ?Sized + 'static,
        C: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        let get = accessor.clone();
        Self {
            meta: accessor.meta().clone(),
            equality: Some(equality(accessor)),
            comparator: Some(Box::new(move |a: &T, b: &T| comparator(get.get(a), get.get(b)))),
            display,
        }
    }

    /// A field used for display only.
    pub(crate) fn display_only<V>(accessor: &Accessor<T, V>, display: FmtFn<T>) -> Self
    where
        V: ?Sized + 'static,
    {
        Self {
            meta: accessor.meta().clone(),
            equality: None,
            comparator: None,
            display,
        }
    }

    /// Drops the comparator; the field keeps its equality and display roles.
    pub(crate) fn without_comparator(mut self) -> Self {
        self.comparator = None;
        self
    }
}

fn equality<T, V>(accessor: Accessor<T, V>) -> Equality<T>
where
    T: 'static,
    V: PartialEq + Hash + ?Sized + 'static,
{
    let get = accessor.clone();
    Equality {
        eq: Box::new(move |a: &T, b: &T| get.get(a) == get.get(b)),
        hash: Box::new(move |t: &T, state: &mut dyn Hasher| {
            let mut state = state;
            accessor.get(t).hash(&mut state);
        }),
    }
}

/// Displays the field itself with its `Debug` form.
///
/// Values are written with default flags, whatever flags the caller's
/// formatter carries, so `{:#}` cannot turn the one-line form into a
/// pretty-printed one.
pub(crate) fn show_field<T, V>(accessor: &Accessor<T, V>) -> FmtFn<T>
where
    T: 'static,
    V: fmt::Debug + ?Sized + 'static,
{
    let get = accessor.clone();
    Box::new(move |t: &T, f: &mut fmt::Formatter<'_>| write!(f, "{:?}", get.get(t)))
}

/// Displays whatever `show` derives from the owner.
pub(crate) fn show_with<T, D, S>(show: S) -> FmtFn<T>
where
    T: 'static,
    D: fmt::Debug,
    S: Fn(&T) -> D + Send + Sync + 'static,
{
    Box::new(move |t: &T, f: &mut fmt::Formatter<'_>| write!(f, "{:?}", show(t)))
}
