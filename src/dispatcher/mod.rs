//! # Dispatcher Module
//!
//! The handler registry and the request-side glue around the resolver. A
//! handler is a plain `Fn(&HandlerRequest) -> HandlerResponse` closure keyed
//! by name; routes name their handler and the dispatcher looks it up per
//! request.
//!
//! `dispatch` runs the resolver first: a [`crate::ValidationRejection`] is
//! translated into a 422 response carrying the complete rejection list, so a
//! handler only ever sees fully bound, validated arguments. Handler panics
//! are caught and converted to 500 responses rather than tearing down the
//! caller.
//!
//! Routes and handlers are registered at startup and read-only afterwards;
//! resolution is pure, so a `Dispatcher` can be shared across threads and
//! dispatch many requests in parallel without locking.

mod core;

pub use core::{Dispatcher, Handler, HandlerRequest, HandlerResponse};
