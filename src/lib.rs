//! # Routebind
//!
//! **Routebind** is a declarative HTTP request router with typed parameter
//! binding and validation. Routes are registered at startup as an explicit
//! table of (method, path pattern, parameter schema, handler name) tuples;
//! for each incoming request, the parameter resolver classifies every
//! declared parameter, extracts its raw value from the path, query string,
//! or JSON body, coerces it to its declared kind, applies constraints, and
//! hands the handler a fully bound argument map — or a structured rejection
//! listing every parameter that failed.
//!
//! ## Architecture
//!
//! - **[`schema`]** - Route and parameter declarations, builder-style registration
//! - **[`router`]** - Path pattern matching and path parameter extraction
//! - **[`request`]** - Raw request model (method, path, ordered query pairs, body)
//! - **[`resolver`]** - The per-request resolution pipeline: classify, extract,
//!   default, coerce, constrain, accumulate
//! - **[`dispatcher`]** - Handler registry with panic capture and rejection
//!   translation
//! - **[`demo`]** - A bundled demonstration app exercising every declaration
//!   feature, used by the CLI binary and the integration tests
//!
//! Transport, wire formats, and API document generation are deliberately out
//! of scope: the resolver consumes an already-parsed [`request::RawRequest`]
//! and produces a plain argument mapping for the handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use routebind::dispatcher::{Dispatcher, HandlerResponse};
//! use routebind::request::RawRequest;
//! use routebind::router::Router;
//! use routebind::schema::{ParamSpec, RouteMeta};
//! use serde_json::json;
//!
//! let routes = vec![RouteMeta::new(Method::GET, "/items/{item_id}", "read_item")
//!     .param(ParamSpec::integer("item_id").minimum(1.0))];
//! let router = Router::new(routes);
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_handler("read_item", |req| {
//!     HandlerResponse::json(200, json!({ "item_id": req.args.get("item_id") }))
//! });
//!
//! let request = RawRequest::get("/items/42");
//! let m = router.route(Method::GET, &request.path).expect("route should match");
//! let resp = dispatcher.dispatch(m, &request).expect("handler registered");
//! assert_eq!(resp.status, 200);
//! ```
//!
//! ## Resolution Semantics
//!
//! - A parameter named in the path pattern is a **path** parameter and is
//!   always present when the route matched.
//! - A parameter with an object kind is a **body** parameter; a scalar that
//!   is neither a path parameter nor explicitly annotated becomes an
//!   embedded body field when the route also declares a body object, and a
//!   **query** parameter otherwise.
//! - Absent parameters fall back to their declared default (including an
//!   explicit null default); absent without a default is a missing-required
//!   rejection.
//! - All failures for one request are accumulated and reported together,
//!   never just the first.

pub mod cli;
pub mod demo;
pub mod dispatcher;
mod echo;
pub mod ids;
pub mod request;
pub mod resolver;
pub mod router;
pub mod schema;

pub use dispatcher::{Dispatcher, Handler, HandlerRequest, HandlerResponse};
pub use echo::echo_handler;
pub use request::RawRequest;
pub use resolver::{resolve, BoundArguments, ParamRejection, RejectionKind, ValidationRejection};
pub use router::{RouteMatch, Router};
pub use schema::{Constraints, ObjectSchema, ParamKind, ParamSource, ParamSpec, RouteMeta};
