//! # Resolver Module
//!
//! The per-request parameter resolution pipeline. Given a matched route and
//! a raw request, [`resolve`] applies the same four steps to every declared
//! parameter, independently:
//!
//! 1. **Classify** the source: path pattern membership wins, then an
//!    explicit annotation, then object kind → body, then a scalar alongside
//!    a body object → embedded body field, otherwise query.
//! 2. **Extract** the raw value: the matched path segment (rest-of-path
//!    verbatim), the ordered query occurrences under the name or alias, or
//!    the parsed body document (whole document for a sole object parameter,
//!    keyed by name otherwise).
//! 3. **Default if absent**: any declared default, including null, is used
//!    verbatim and skips coercion and constraints; absent with no default is
//!    a missing-required rejection.
//! 4. **Coerce and constrain**: parse path/query text into the declared
//!    kind, check body fields against the matching JSON type, then apply
//!    numeric bounds, length bounds, and the anchored pattern.
//!
//! Failures accumulate: the result is either a complete
//! [`BoundArguments`] mapping or one [`ValidationRejection`] naming every
//! parameter that failed. Resolution is a pure function of the route
//! declaration and the raw request; resolving the same request twice yields
//! identical results.

mod core;
mod errors;

pub use core::{resolve, BoundArguments};
pub use errors::{ParamRejection, RejectionKind, ValidationRejection};
