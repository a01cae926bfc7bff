//! # Schema Module
//!
//! Route and parameter declarations. This is the registration surface of the
//! crate: a route is an HTTP method plus a path pattern plus an ordered list
//! of [`ParamSpec`] declarations, built with ordinary function calls at
//! startup and immutable afterwards.
//!
//! A declaration carries everything the resolver needs:
//!
//! - the declared value kind ([`ParamKind`] — a tagged variant over the
//!   finite kind set, including nested [`ObjectSchema`] for request bodies)
//! - optionality as an explicit `required` flag plus an explicit default
//!   slot, where a default of JSON `null` is a real default and "no default"
//!   means required
//! - an optional explicit source annotation ([`ParamSource`]) overriding the
//!   inference rules
//! - [`Constraints`] checked after coercion (numeric bounds, length bounds,
//!   full-string pattern)
//! - alias, deprecation flag, and free-form description

mod build;
mod types;

pub use build::path_param_names;
pub use types::*;
