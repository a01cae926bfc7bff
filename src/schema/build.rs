use super::types::{Constraints, ObjectSchema, ParamKind, ParamSource, ParamSpec, RouteMeta};
use http::Method;
use regex::Regex;
use serde_json::Value;

impl ParamSpec {
    fn new(name: &str, kind: ParamKind) -> Self {
        ParamSpec {
            name: name.to_string(),
            kind,
            required: true,
            default: None,
            source: None,
            alias: None,
            deprecated: false,
            description: None,
            constraints: Constraints::default(),
        }
    }

    #[must_use]
    pub fn integer(name: &str) -> Self {
        Self::new(name, ParamKind::Integer)
    }

    #[must_use]
    pub fn float(name: &str) -> Self {
        Self::new(name, ParamKind::Float)
    }

    #[must_use]
    pub fn boolean(name: &str) -> Self {
        Self::new(name, ParamKind::Bool)
    }

    #[must_use]
    pub fn text(name: &str) -> Self {
        Self::new(name, ParamKind::Text)
    }

    #[must_use]
    pub fn text_list(name: &str) -> Self {
        Self::new(name, ParamKind::TextList)
    }

    #[must_use]
    pub fn enumerated(name: &str, allowed: &[&str]) -> Self {
        let allowed = allowed.iter().map(|s| (*s).to_string()).collect();
        Self::new(name, ParamKind::Enumerated(allowed))
    }

    #[must_use]
    pub fn object(name: &str, schema: ObjectSchema) -> Self {
        Self::new(name, ParamKind::Object(schema))
    }

    /// Declare a default value. Any default, including `Value::Null`, makes
    /// the parameter optional.
    #[must_use]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self.required = false;
        self
    }

    /// Shorthand for an optional parameter defaulting to null.
    #[must_use]
    pub fn optional(self) -> Self {
        self.default_value(Value::Null)
    }

    /// Force query-string resolution regardless of the inference rules.
    #[must_use]
    pub fn from_query(mut self) -> Self {
        self.source = Some(ParamSource::Query);
        self
    }

    /// Force body resolution, embedding a scalar as a body field keyed by
    /// its name.
    #[must_use]
    pub fn from_body(mut self) -> Self {
        self.source = Some(ParamSource::Body);
        self
    }

    /// Alternate lookup key in the query string; the declared name still
    /// matches as well.
    #[must_use]
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn minimum(mut self, bound: f64) -> Self {
        self.constraints.minimum = Some(bound);
        self
    }

    #[must_use]
    pub fn maximum(mut self, bound: f64) -> Self {
        self.constraints.maximum = Some(bound);
        self
    }

    #[must_use]
    pub fn exclusive_minimum(mut self, bound: f64) -> Self {
        self.constraints.exclusive_minimum = Some(bound);
        self
    }

    #[must_use]
    pub fn exclusive_maximum(mut self, bound: f64) -> Self {
        self.constraints.exclusive_maximum = Some(bound);
        self
    }

    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.constraints.min_length = Some(length);
        self
    }

    #[must_use]
    pub fn max_length(mut self, length: usize) -> Self {
        self.constraints.max_length = Some(length);
        self
    }

    /// Full-string regex constraint. The pattern is anchored here so the
    /// check is never a substring match.
    ///
    /// # Panics
    ///
    /// Panics if the pattern does not compile. Declarations are built at
    /// process start, so a bad pattern fails fast before any request.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn pattern(mut self, pattern: &str) -> Self {
        let anchored = format!("^(?:{pattern})$");
        self.constraints.pattern =
            Some(Regex::new(&anchored).expect("Failed to compile parameter pattern"));
        self
    }
}

impl ObjectSchema {
    #[must_use]
    pub fn new(name: &str) -> Self {
        ObjectSchema {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: ParamSpec) -> Self {
        self.fields.push(field);
        self
    }
}

impl RouteMeta {
    #[must_use]
    pub fn new(method: Method, path_pattern: &str, handler_name: &str) -> Self {
        RouteMeta {
            method,
            path_pattern: path_pattern.to_string(),
            handler_name: handler_name.to_string(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }
}

/// Extract the parameter names declared in a path pattern, in order.
///
/// Both `{name}` single segments and the `{name:path}` rest-of-path form
/// contribute their bare name.
#[must_use]
pub fn path_param_names(pattern: &str) -> Vec<String> {
    pattern
        .split('/')
        .filter(|seg| seg.starts_with('{') && seg.ends_with('}'))
        .map(|seg| {
            let inner = seg.trim_start_matches('{').trim_end_matches('}');
            inner.strip_suffix(":path").unwrap_or(inner).to_string()
        })
        .collect()
}
