//! Property-based tests for engine consistency.
//!
//! Every engine derives equality, hashing and ordering from one field list,
//! so the usual contracts between them must hold for arbitrary values:
//! - Equality is reflexive, symmetric and transitive
//! - Equal values hash identically
//! - `compare` returns `Equal` exactly when the values are equal
//! - `compare` is antisymmetric and transitive
//!
//! Display-only fields must never influence any of the above.

use std::cmp::Ordering;
use std::sync::LazyLock;

use aequum::{ComparableEqualsHashCode, EqualsHashCode, comparator, field};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    rank: Option<u32>,
    weight: i64,
    note: String,
}

static ENTRY: LazyLock<ComparableEqualsHashCode<Entry>> = LazyLock::new(|| {
    aequum::builder()
        .with_comparable_field(field!(|e: &Entry| e.key.as_str()))
        .with_optional_comparable_field(field!(|e: &Entry| &e.rank))
        .with_comparable_field_by(field!(|e: &Entry| &e.weight), comparator::reversed(comparator::natural::<i64>))
        .with_display_field(field!(|e: &Entry| &e.note))
        .build()
        .unwrap()
});

static ENTRY_BY_KEY: LazyLock<EqualsHashCode<Entry>> = LazyLock::new(|| {
    aequum::builder()
        .with_field(field!(|e: &Entry| &e.key))
        .with_display_field(field!(|e: &Entry| &e.weight))
        .build()
        .unwrap()
});

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

// Small domains so that equal and tied values turn up often.
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,2}").unwrap()
}

fn note_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,12}").unwrap()
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    (
        key_strategy(),
        prop::option::of(0u32..3),
        -2i64..3,
        note_strategy(),
    )
        .prop_map(|(key, rank, weight, note)| Entry {
            key,
            rank,
            weight,
            note,
        })
}

// =============================================================================
// EQUALITY PROPERTIES
// =============================================================================

mod equality_properties {
    use super::*;

    proptest! {
        #[test]
        fn equality_is_reflexive(a in entry_strategy()) {
            let copy = a.clone();
            prop_assert!(ENTRY.equals(&a, &a));
            prop_assert!(ENTRY.equals(&a, &copy));
        }

        #[test]
        fn equality_is_symmetric(a in entry_strategy(), b in entry_strategy()) {
            prop_assert_eq!(ENTRY.equals(&a, &b), ENTRY.equals(&b, &a));
        }

        #[test]
        fn equality_is_transitive(
            a in entry_strategy(),
            b in entry_strategy(),
            c in entry_strategy(),
        ) {
            if ENTRY.equals(&a, &b) && ENTRY.equals(&b, &c) {
                prop_assert!(ENTRY.equals(&a, &c));
            }
        }

        /// Only the registered equality fields matter
        #[test]
        fn equality_matches_fields(a in entry_strategy(), b in entry_strategy()) {
            let expected = a.key == b.key && a.rank == b.rank && a.weight == b.weight;
            prop_assert_eq!(ENTRY.equals(&a, &b), expected);
        }

        #[test]
        fn display_fields_do_not_affect_equality(a in entry_strategy(), note in note_strategy()) {
            let b = Entry { note, ..a.clone() };
            prop_assert!(ENTRY.equals(&a, &b));
            prop_assert_eq!(ENTRY.to_hash_code(&a), ENTRY.to_hash_code(&b));
            prop_assert_eq!(ENTRY.compare(&a, &b), Ordering::Equal);
        }

        #[test]
        fn is_equal_agrees_with_equals(a in entry_strategy(), b in entry_strategy()) {
            prop_assert_eq!(ENTRY.is_equal(&a, &b), ENTRY.equals(&a, &b));
            prop_assert!(!ENTRY.is_equal(&a, &a.key));
        }
    }
}

// =============================================================================
// HASHING PROPERTIES
// =============================================================================

mod hash_properties {
    use super::*;

    proptest! {
        /// Equal values always hash identically
        #[test]
        fn equal_values_hash_equal(a in entry_strategy(), b in entry_strategy()) {
            if ENTRY.equals(&a, &b) {
                prop_assert_eq!(ENTRY.to_hash_code(&a), ENTRY.to_hash_code(&b));
            }
        }

        #[test]
        fn hash_is_stable(a in entry_strategy()) {
            prop_assert_eq!(ENTRY.to_hash_code(&a), ENTRY.to_hash_code(&a.clone()));
        }

        #[test]
        fn incomparable_engine_hashes_consistently(a in entry_strategy(), b in entry_strategy()) {
            if ENTRY_BY_KEY.equals(&a, &b) {
                prop_assert_eq!(ENTRY_BY_KEY.to_hash_code(&a), ENTRY_BY_KEY.to_hash_code(&b));
            }
        }
    }
}

// =============================================================================
// ORDERING PROPERTIES
// =============================================================================

mod ordering_properties {
    use super::*;

    proptest! {
        /// compare(a, b) == Equal exactly when a equals b
        #[test]
        fn compare_is_consistent_with_equals(a in entry_strategy(), b in entry_strategy()) {
            prop_assert_eq!(ENTRY.compare(&a, &b) == Ordering::Equal, ENTRY.equals(&a, &b));
        }

        #[test]
        fn compare_is_antisymmetric(a in entry_strategy(), b in entry_strategy()) {
            prop_assert_eq!(ENTRY.compare(&a, &b), ENTRY.compare(&b, &a).reverse());
        }

        #[test]
        fn compare_is_transitive(
            a in entry_strategy(),
            b in entry_strategy(),
            c in entry_strategy(),
        ) {
            let ab = ENTRY.compare(&a, &b);
            if ab != Ordering::Greater && ab == ENTRY.compare(&b, &c) {
                prop_assert_eq!(ENTRY.compare(&a, &c), ab);
            }
        }

        /// Lexicographic over key, then rank (absent first), then weight descending
        #[test]
        fn compare_matches_field_order(a in entry_strategy(), b in entry_strategy()) {
            let expected = a
                .key
                .cmp(&b.key)
                .then_with(|| a.rank.cmp(&b.rank))
                .then_with(|| b.weight.cmp(&a.weight));
            prop_assert_eq!(ENTRY.compare(&a, &b), expected);
        }
    }
}

// =============================================================================
// DISPLAY PROPERTIES
// =============================================================================

mod display_properties {
    use super::*;

    proptest! {
        #[test]
        fn display_lists_every_field_sorted(a in entry_strategy()) {
            let expected = format!(
                "Entry{{key={:?}, note={:?}, rank={:?}, weight={:?}}}",
                a.key, a.note, a.rank, a.weight
            );
            prop_assert_eq!(ENTRY.to_string(&a), expected);
        }

        #[test]
        fn display_is_deterministic(a in entry_strategy()) {
            prop_assert_eq!(ENTRY.to_string(&a), ENTRY.to_string(&a.clone()));
            prop_assert_eq!(ENTRY_BY_KEY.to_string(&a), ENTRY_BY_KEY.to_string(&a));
        }
    }
}
