use crate::schema::RouteMeta;
use http::Method;
use regex::Regex;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of path parameters before heap allocation.
/// Most route patterns declare ≤4 path params.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the match hot path.
///
/// Param names come from the static route table and use `Arc<str>` so a
/// clone is an atomic increment rather than a string copy; values are
/// per-request data from the URL and stay `String`.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path to a route.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route metadata (Arc to avoid expensive clones).
    pub route: Arc<RouteMeta>,
    /// Path parameters extracted from the URL (e.g., `{id}` → `("id", "123")`).
    pub path_params: ParamVec,
    /// Name of the handler that should process this request.
    pub handler_name: String,
}

impl RouteMatch {
    /// Get a path parameter by name.
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different path depths, the last occurrence is returned.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to a HashMap. This allocates; use
    /// `get_path_param()` in hot paths instead.
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Router that matches HTTP requests to registered routes.
///
/// Each route's path pattern is compiled to an anchored regex at
/// construction; matching is a linear scan in longest-pattern-first order.
#[derive(Clone)]
pub struct Router {
    /// method, compiled regex, meta, ordered param names
    routes: Vec<(Method, Regex, Arc<RouteMeta>, Vec<Arc<str>>)>,
}

impl Router {
    /// Build a router from a registration table.
    ///
    /// Routes with unsupported methods are dropped. Patterns are sorted
    /// longest first so more specific literal routes shadow parameterized
    /// ones.
    #[must_use]
    pub fn new(routes: Vec<RouteMeta>) -> Self {
        let supported_methods = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
            Method::HEAD,
        ];

        let mut routes: Vec<RouteMeta> = routes
            .into_iter()
            .filter(|r| supported_methods.contains(&r.method))
            .collect();

        if routes.is_empty() {
            info!(routes_count = 0, "Routing table loaded with no routes");
            return Self { routes: Vec::new() };
        }

        routes.sort_by_key(|r| r.path_pattern.len());
        routes.reverse();

        let routes: Vec<_> = routes
            .into_iter()
            .map(|route| {
                let (regex, param_names) = Self::path_to_regex(&route.path_pattern);
                let method = route.method.clone();
                (method, regex, Arc::new(route), param_names)
            })
            .collect();

        let routes_summary: Vec<String> = routes
            .iter()
            .take(10)
            .map(|(method, _, meta, _)| format!("{} {}", method, meta.path_pattern))
            .collect();

        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Self { routes }
    }

    /// Print all registered routes to stdout.
    ///
    /// Useful for debugging and verifying that routes are loaded correctly.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for (method, _re, meta, _params) in &self.routes {
            println!(
                "[route] {method} {} -> {} ({} params)",
                meta.path_pattern,
                meta.handler_name,
                meta.params.len()
            );
        }
    }

    /// Match an HTTP request to a route.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `path` - Request path with the query string already stripped
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - If a matching route is found
    /// * `None` - If no route matches (results in 404)
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");

        for (m, regex, route, param_names) in &self.routes {
            if *m != method {
                continue;
            }
            if let Some(captures) = regex.captures(path) {
                let mut params = ParamVec::new();
                for (i, name) in param_names.iter().enumerate() {
                    if let Some(val) = captures.get(i + 1) {
                        params.push((Arc::clone(name), val.as_str().to_string()));
                    }
                }

                info!(
                    method = %method,
                    path = %path,
                    handler_name = %route.handler_name,
                    route_pattern = %route.path_pattern,
                    path_params = ?params,
                    "Route matched"
                );

                let handler_name = route.handler_name.clone();
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    path_params: params,
                    handler_name,
                });
            }
        }

        warn!(method = %method, path = %path, "No route matched");
        None
    }

    /// Get all registered path patterns.
    #[must_use]
    pub fn get_all_path_patterns(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|(_method, _regex, meta, _params)| meta.path_pattern.clone())
            .collect()
    }

    /// Convert a path pattern to a regex and extract parameter names.
    ///
    /// Transforms `/users/{id}` into `^/users/([^/]+)$` with names `["id"]`,
    /// and `/files/{file_path:path}` into `^/files/(.+)$`, capturing the
    /// remaining tail of the URL verbatim including internal separators.
    ///
    /// # Panics
    ///
    /// Panics on an uncompilable pattern. Patterns come from the static
    /// registration table, so this fails fast at startup.
    #[allow(clippy::expect_used)]
    pub(crate) fn path_to_regex(path: &str) -> (Regex, Vec<Arc<str>>) {
        if path == "/" {
            return (
                Regex::new(r"^/$").expect("Failed to compile path regex"),
                Vec::new(),
            );
        }

        let mut pattern = String::with_capacity(path.len() + 5);
        pattern.push('^');
        let mut param_names: Vec<Arc<str>> = Vec::with_capacity(path.matches('{').count());

        for segment in path.split('/') {
            if segment.starts_with('{') && segment.ends_with('}') {
                let inner = segment.trim_start_matches('{').trim_end_matches('}');
                if let Some(name) = inner.strip_suffix(":path") {
                    pattern.push_str("/(.+)");
                    param_names.push(Arc::from(name));
                } else {
                    pattern.push_str("/([^/]+)");
                    param_names.push(Arc::from(inner));
                }
            } else if !segment.is_empty() {
                pattern.push('/');
                pattern.push_str(segment);
            }
        }

        pattern.push('$');
        let regex = Regex::new(&pattern).expect("Failed to compile path regex");

        (regex, param_names)
    }
}
