//! # Router Module
//!
//! Path matching and path parameter extraction. Patterns are compiled to
//! anchored regexes at registration time:
//!
//! - `{name}` matches exactly one path segment (`[^/]+`)
//! - `{name:path}` matches the rest of the path verbatim, separators
//!   included; it only makes sense as the final segment
//!
//! Matching tests the request path against each compiled pattern in
//! longest-pattern-first order, so `/items/count` wins over `/items/{id}`.
//! A match yields a [`RouteMatch`] carrying the route metadata and the
//! extracted path parameters; the resolver takes it from there.

mod core;
#[cfg(test)]
mod tests;

pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
