//! Display-name resolution for Aequum field accessors.
//!
//! Every accessor registered with an Aequum builder carries an
//! [`AccessorMeta`]: the symbolic name of the callable (its
//! `std::any::type_name`), optionally the module it was declared in and the
//! source text of the extraction expression, and optionally an explicit name.
//!
//! A [`NameResolver`] turns that metadata into the name shown in a rendered
//! string. The default [`SourceNameResolver`] tries, in order:
//! - an explicit name
//! - a getter (`get_age` → `age`) or predicate (`is_active` → `active`)
//! - for closures, the field read performed by the captured source
//!   (`|p: &Person| &p.age` → `age`), following delegating calls
//! - the symbol verbatim
//!
//! Names are only ever used for display. A resolution failure is reported as
//! a [`NameError`] and never affects equality, hashing or ordering.

mod error;
mod meta;
mod resolver;
mod source;
mod symbol;

pub use error::{NameError, NameResult};
pub use meta::AccessorMeta;
pub use resolver::{NameResolver, Resolution, ResolvedName, SourceNameResolver};
pub use symbol::{last_segment, short_type_name};
