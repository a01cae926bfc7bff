//! # Demo Module
//!
//! A bundled demonstration app: a progressive route table where each route
//! adds one or two declaration features on top of the previous one — path
//! params, enumerated segments, rest-of-path, query defaults, optional and
//! required query params, structured bodies, body/path/query combinations,
//! multiple body params with an embedded scalar field, list queries, and
//! constrained queries with aliases.
//!
//! All handlers just reformat their bound input into a response payload;
//! there is no business logic. The CLI binary and the integration tests run
//! against this table.

pub mod handlers;
pub mod routes;

pub use routes::routes;

use crate::dispatcher::Dispatcher;
use crate::router::Router;

/// Build the demo router and a dispatcher with every handler registered.
#[must_use]
pub fn build() -> (Router, Dispatcher) {
    let router = Router::new(routes());
    let mut dispatcher = Dispatcher::new();
    handlers::register_all(&mut dispatcher);
    (router, dispatcher)
}
