use http::Method;
use regex::Regex;
use serde_json::Value;

/// Declared value kind of a parameter.
///
/// The kind drives coercion: raw path/query text is parsed into the matching
/// JSON value, and body fields are checked against the matching JSON type.
#[derive(Debug, Clone)]
pub enum ParamKind {
    /// Base-10 signed integer.
    Integer,
    /// Base-10 floating-point number.
    Float,
    /// Boolean; raw text is matched against the truthy/falsy sets.
    Bool,
    /// Free text, used as-is.
    Text,
    /// Ordered list of text values collected from repeated query occurrences.
    TextList,
    /// Text restricted to a closed set of allowed values.
    Enumerated(Vec<String>),
    /// Structured body object resolved field by field.
    Object(ObjectSchema),
}

impl ParamKind {
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, ParamKind::Object(_))
    }
}

/// Where a parameter's raw value is read from.
///
/// Usually inferred (path pattern membership, then object kind, then query);
/// an explicit annotation on the declaration always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    Path,
    Query,
    Body,
}

impl std::fmt::Display for ParamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamSource::Path => write!(f, "path"),
            ParamSource::Query => write!(f, "query"),
            ParamSource::Body => write!(f, "body"),
        }
    }
}

/// Constraints applied after successful coercion.
///
/// Numeric bounds compare as `f64` for both integer and float kinds. Length
/// bounds count characters, not bytes, and apply to text values and to each
/// element of a list individually. The pattern is anchored when compiled, so
/// a match is always a full-string match.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
}

impl Constraints {
    /// True if no constraint is set, letting the resolver skip the check.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minimum.is_none()
            && self.maximum.is_none()
            && self.exclusive_minimum.is_none()
            && self.exclusive_maximum.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.pattern.is_none()
    }
}

/// One declared parameter of a route, or one field of an [`ObjectSchema`].
///
/// Optionality is the explicit `required` flag plus the explicit default
/// slot: `default: None` means no default (required), `Some(Value::Null)`
/// means "defaults to null". The builders keep the two in sync.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<Value>,
    /// Explicit source annotation; `None` means inferred.
    pub source: Option<ParamSource>,
    /// Alternate lookup key in the query string.
    pub alias: Option<String>,
    pub deprecated: bool,
    pub description: Option<String>,
    pub constraints: Constraints,
}

/// A named body schema: each field is a full [`ParamSpec`].
///
/// A field with any default (including null) is optional; a field with no
/// default is required. Unknown input fields are ignored on resolution and
/// defaulted fields are filled in, so the resolved object always carries
/// every declared field.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub name: String,
    pub fields: Vec<ParamSpec>,
}

/// A registered route: method, path pattern, handler name, and the declared
/// parameter list. Created at startup, never mutated afterwards.
///
/// Path patterns use `{name}` for a single segment and `{name:path}` as the
/// final segment for the rest of the path, separators included.
#[derive(Debug, Clone)]
pub struct RouteMeta {
    pub method: Method,
    pub path_pattern: String,
    pub handler_name: String,
    pub params: Vec<ParamSpec>,
}
