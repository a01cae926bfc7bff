use crate::ids::RequestId;
use crate::request::RawRequest;
use crate::resolver::{resolve, BoundArguments};
use crate::router::RouteMatch;
use http::Method;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Request data passed to a handler: HTTP metadata plus the fully bound,
/// validated argument mapping. Handlers never see raw text.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique request ID for tracing and correlation.
    pub request_id: RequestId,
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path as received.
    pub path: String,
    /// Name of the handler processing this request.
    pub handler_name: String,
    /// Resolved parameter name → coerced value mapping.
    pub args: BoundArguments,
}

/// Response data returned from a handler.
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    /// HTTP status code (200, 422, 500, etc.)
    pub status: u16,
    /// Response body as JSON.
    pub body: Value,
}

impl HandlerResponse {
    /// Create a JSON response.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Create an error response with an `{"error": ...}` body.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }
}

/// A registered handler function.
pub type Handler = Arc<dyn Fn(&HandlerRequest) -> HandlerResponse + Send + Sync>;

/// Dispatcher that routes resolved requests to registered handlers.
///
/// Maintains a registry of handler names to closures. Registration happens
/// at startup; dispatch is read-only and safe to run concurrently.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: HashMap<String, Handler>,
}

impl Dispatcher {
    /// Create a new empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler function under the given name.
    ///
    /// If a handler with the same name already exists it is replaced.
    pub fn register_handler<F>(&mut self, name: &str, handler_fn: F)
    where
        F: Fn(&HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        if self.handlers.remove(name).is_some() {
            warn!(handler_name = %name, "Replaced existing handler");
        }
        info!(
            handler_name = %name,
            total_handlers = self.handlers.len() + 1,
            "Handler registered"
        );
        self.handlers.insert(name.to_string(), Arc::new(handler_fn));
    }

    #[must_use]
    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Names of all registered handlers, sorted.
    #[must_use]
    pub fn handler_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Dispatch a matched request to its handler.
    ///
    /// Runs the resolver first: a validation rejection short-circuits into a
    /// 422 response carrying the full rejection list. A panicking handler
    /// yields a 500 response. Returns `None` only when no handler is
    /// registered under the route's handler name.
    #[must_use]
    pub fn dispatch(
        &self,
        route_match: RouteMatch,
        request: &RawRequest,
    ) -> Option<HandlerResponse> {
        let request_id = RequestId::new();

        debug!(
            request_id = %request_id,
            handler_name = %route_match.handler_name,
            available_handlers = self.handlers.len(),
            "Handler lookup"
        );

        let handler = match self.handlers.get(&route_match.handler_name) {
            Some(handler) => handler,
            None => {
                let available: Vec<&String> = self.handlers.keys().collect();
                error!(
                    handler_name = %route_match.handler_name,
                    available_handlers = ?available,
                    "Handler not found"
                );
                return None;
            }
        };

        let args = match resolve(&route_match, request) {
            Ok(args) => args,
            Err(rejection) => {
                warn!(
                    request_id = %request_id,
                    handler_name = %route_match.handler_name,
                    failed = rejection.len(),
                    rejection = %rejection,
                    "Request rejected by parameter resolution"
                );
                return Some(HandlerResponse::json(
                    422,
                    json!({
                        "error": "parameter validation failed",
                        "rejections": rejection.to_json(),
                    }),
                ));
            }
        };

        let handler_request = HandlerRequest {
            request_id,
            method: request.method.clone(),
            path: request.path.clone(),
            handler_name: route_match.handler_name,
            args,
        };

        info!(
            request_id = %request_id,
            handler_name = %handler_request.handler_name,
            method = %handler_request.method,
            path = %handler_request.path,
            "Request dispatched to handler"
        );

        let start = Instant::now();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler(&handler_request)
        }));

        match result {
            Ok(response) => {
                info!(
                    request_id = %request_id,
                    handler_name = %handler_request.handler_name,
                    status = response.status,
                    latency_ms = start.elapsed().as_millis() as u64,
                    "Handler response received"
                );
                Some(response)
            }
            Err(panic) => {
                let panic_message = format!("{panic:?}");
                error!(
                    request_id = %request_id,
                    handler_name = %handler_request.handler_name,
                    panic_message = %panic_message,
                    "Handler panicked"
                );
                Some(HandlerResponse::error(
                    500,
                    &format!("Handler panicked: {panic_message}"),
                ))
            }
        }
    }
}
