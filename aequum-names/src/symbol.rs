//! Helpers for reading names out of Rust symbol paths.

/// Returns the last path segment of `path`, ignoring generic arguments.
///
/// `my_crate::Wrapper<alloc::string::String>::get_inner` → `get_inner`,
/// `my_crate::Pair<i32>` → `Pair`.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    let path = strip_trailing_generics(path);
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            // the `>` of `->` closes nothing
            b'>' if is_arrow(bytes, i) => {}
            b'>' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    &path[start..]
}

/// Short, human-facing name of a type: `my_crate::model::Pair<i32>` → `Pair`.
#[must_use]
pub fn short_type_name(type_name: &str) -> &str {
    last_segment(type_name)
}

fn strip_trailing_generics(path: &str) -> &str {
    let bytes = path.as_bytes();
    if !path.ends_with('>') || is_arrow(bytes, bytes.len() - 1) {
        return path;
    }
    let mut depth = 0usize;
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'>' if is_arrow(bytes, i) => {}
            b'>' => depth += 1,
            b'<' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &path[..i];
                }
            }
            _ => {}
        }
    }
    path
}

fn is_arrow(bytes: &[u8], i: usize) -> bool {
    i > 0 && bytes[i - 1] == b'-'
}

/// `get_age` / `getAge` → `age`.
pub(crate) fn strip_getter(name: &str) -> Option<String> {
    strip_accessor_prefix(name, "get")
}

/// `is_active` / `isActive` → `active`.
pub(crate) fn strip_predicate(name: &str) -> Option<String> {
    strip_accessor_prefix(name, "is")
}

fn strip_accessor_prefix(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    if let Some(snake) = rest.strip_prefix('_') {
        return (!snake.is_empty()).then(|| decapitalize(snake));
    }
    // camelCase only counts when the next character starts a new word
    match rest.chars().next() {
        Some(c) if c.is_uppercase() => Some(decapitalize(rest)),
        _ => None,
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
