use aequum_names::{
    AccessorMeta, NameError, NameResolver, Resolution, ResolvedName, SourceNameResolver,
};
use pretty_assertions::assert_eq;

#[allow(dead_code)]
struct Person {
    age: u32,
    name: String,
    active: bool,
}

impl Person {
    fn get_age(&self) -> &u32 {
        &self.age
    }

    fn is_active(&self) -> &bool {
        &self.active
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn meta_of<V: ?Sized, F: Fn(&Person) -> &V>(_: F) -> AccessorMeta {
    AccessorMeta::of::<F>()
}

fn resolve(meta: &AccessorMeta) -> ResolvedName {
    SourceNameResolver.resolve(meta).unwrap()
}

// ── Named callables ──────────────────────────────────────────────

#[test]
fn getter_strips_prefix() {
    let resolved = resolve(&meta_of(Person::get_age));
    assert_eq!(resolved.name(), "age");
    assert_eq!(resolved.via(), Resolution::Getter);
}

#[test]
fn predicate_strips_prefix() {
    let resolved = resolve(&meta_of(Person::is_active));
    assert_eq!(resolved.name(), "active");
    assert_eq!(resolved.via(), Resolution::Predicate);
}

#[test]
fn plain_method_is_verbatim() {
    let resolved = resolve(&meta_of(Person::name));
    assert_eq!(resolved.name(), "name");
    assert_eq!(resolved.via(), Resolution::Verbatim);
}

#[test]
fn fn_pointer_symbol_is_kept_whole() {
    let symbol = "for<'a> fn(&'a my_crate::Person) -> &'a u32";
    let resolved = resolve(&AccessorMeta::from_symbol(symbol));
    assert_eq!(resolved.name(), symbol);
    assert_eq!(resolved.via(), Resolution::Verbatim);
}

#[test]
fn explicit_name_wins() {
    let meta = meta_of(Person::get_age).with_name("years");
    let resolved = resolve(&meta);
    assert_eq!(resolved.name(), "years");
    assert_eq!(resolved.via(), Resolution::Explicit);
}

// ── Closures ─────────────────────────────────────────────────────

#[test]
fn closure_field_read() {
    let meta = meta_of(|p: &Person| &p.age)
        .with_source(module_path!(), stringify!(|p: &Person| &p.age));
    let resolved = resolve(&meta);
    assert_eq!(resolved.name(), "age");
    assert_eq!(resolved.via(), Resolution::FieldRead);
}

#[test]
fn closure_delegating_to_getter() {
    let meta = meta_of(|p: &Person| p.get_age())
        .with_source(module_path!(), stringify!(|p: &Person| p.get_age()));
    let resolved = resolve(&meta);
    assert_eq!(resolved.name(), "age");
    assert_eq!(resolved.via(), Resolution::Delegated);
}

#[test]
fn closure_delegating_to_plain_method() {
    let meta = meta_of(|p: &Person| p.name())
        .with_source(module_path!(), stringify!(|p: &Person| p.name()));
    assert_eq!(resolve(&meta).name(), "name");
}

#[test]
fn closure_explicit_name_skips_source() {
    let meta = meta_of(|p: &Person| &p.age).with_name("age_in_years");
    let resolved = resolve(&meta);
    assert_eq!(resolved.name(), "age_in_years");
    assert_eq!(resolved.via(), Resolution::Explicit);
}

// ── Failures ─────────────────────────────────────────────────────

#[test]
fn closure_without_source_is_metadata_failure() {
    let err = SourceNameResolver
        .resolve(&meta_of(|p: &Person| &p.age))
        .unwrap_err();
    assert!(matches!(err, NameError::MetadataUnavailable { .. }));
    assert!(err.is_metadata_failure());
}

#[test]
fn unparseable_source_is_metadata_failure() {
    let meta = meta_of(|p: &Person| &p.age).with_source(module_path!(), "|p: &Person| &p.");
    let err = SourceNameResolver.resolve(&meta).unwrap_err();
    assert!(matches!(err, NameError::Unparseable { .. }));
    assert!(err.is_metadata_failure());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn derived_value_is_no_field_read() {
    let meta = meta_of(|p: &Person| &p.age)
        .with_source(module_path!(), "|p: &Person| p.age + 1");
    let err = SourceNameResolver.resolve(&meta).unwrap_err();
    assert!(matches!(err, NameError::NoFieldRead { .. }));
    assert!(!err.is_metadata_failure());
    assert!(format!("{err}").contains("p.age + 1"));
}

#[test]
fn empty_explicit_name_is_rejected() {
    let meta = meta_of(Person::get_age).with_name("");
    let err = SourceNameResolver.resolve(&meta).unwrap_err();
    assert!(matches!(err, NameError::Empty { .. }));
}

// ── Custom resolvers ─────────────────────────────────────────────

#[test]
fn closure_resolver() {
    let upper = |meta: &AccessorMeta| {
        SourceNameResolver
            .resolve(meta)
            .map(|r| ResolvedName::new(r.name().to_uppercase(), r.via()))
    };
    let resolved = upper.resolve(&meta_of(Person::get_age)).unwrap();
    assert_eq!(resolved.name(), "AGE");
    assert_eq!(resolved.via(), Resolution::Getter);
}

#[test]
fn resolution_display() {
    assert_eq!(Resolution::FieldRead.to_string(), "field read");
    assert_eq!(Resolution::Getter.to_string(), "getter");
}
