//! Ready-made comparators for comparable fields.
//!
//! Any `Fn(&V, &V) -> Ordering` works as a comparator; these cover the
//! common cases.

use std::cmp::Ordering;

/// Natural ordering of `V`.
pub fn natural<V: Ord + ?Sized>(a: &V, b: &V) -> Ordering {
    a.cmp(b)
}

/// Orders absent values before present ones; two absent values are equal.
/// Present values are ordered by `cmp`.
pub fn none_first<V, C>(cmp: C) -> impl Fn(&Option<V>, &Option<V>) -> Ordering + Send + Sync + 'static
where
    V: 'static,
    C: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
{
    move |a: &Option<V>, b: &Option<V>| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

/// Reverses `cmp`.
pub fn reversed<V, C>(cmp: C) -> impl Fn(&V, &V) -> Ordering + Send + Sync + 'static
where
    V: ?Sized + 'static,
    C: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
{
    move |a: &V, b: &V| cmp(b, a)
}
