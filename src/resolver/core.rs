use crate::request::{parse_body, RawRequest};
use crate::router::RouteMatch;
use crate::schema::{path_param_names, Constraints, ParamKind, ParamSource, ParamSpec};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::errors::{ParamRejection, RejectionKind, ValidationRejection};

/// Text forms accepted as `true` / `false` for boolean path and query
/// parameters, matched case-insensitively. Body fields accept only JSON
/// booleans.
pub const TRUTHY: [&str; 4] = ["true", "1", "on", "yes"];
pub const FALSY: [&str; 4] = ["false", "0", "off", "no"];

/// The resolved argument mapping handed to a handler.
///
/// Keys are declared parameter names; values are the coerced JSON values,
/// with structured bodies nested. Insertion order follows the declaration
/// order of the route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    args: Map<String, Value>,
}

impl BoundArguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.args.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.args
    }

    /// Consume into a JSON object for serialization.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.args)
    }
}

enum RawQuery<'a> {
    Absent,
    /// Scalar kinds take the last occurrence when the key repeats.
    Scalar(&'a str),
    /// List kinds collect every occurrence in query-string order.
    List(Vec<&'a str>),
}

/// Resolve every declared parameter of a matched route against a raw
/// request.
///
/// Returns the bound argument mapping, or a rejection with one entry per
/// failed parameter — never just the first failure. Resolution is a pure
/// function of the route declaration and the request: no shared state is
/// read or written, and resolving the same pair twice yields identical
/// results.
///
/// When a scalar query parameter repeats (`?q=1&q=2` for a non-list
/// declaration), the **last** occurrence wins, consistent with the
/// last-write-wins accessors on [`RouteMatch`].
pub fn resolve(
    route_match: &RouteMatch,
    request: &RawRequest,
) -> Result<BoundArguments, ValidationRejection> {
    let route = route_match.route.as_ref();
    let path_names = path_param_names(&route.path_pattern);
    let route_has_object = route.params.iter().any(|p| p.kind.is_object());

    let classified: Vec<(&ParamSpec, ParamSource)> = route
        .params
        .iter()
        .map(|p| (p, classify(p, &path_names, route_has_object)))
        .collect();

    let body_count = classified
        .iter()
        .filter(|(_, src)| *src == ParamSource::Body)
        .count();

    let mut rejection = ValidationRejection::new();

    // The body is parsed once; a malformed document rejects every
    // body-sourced parameter before any per-field resolution.
    let mut body_doc: Option<Value> = None;
    let mut body_failed = false;
    if body_count > 0 {
        if let Some(raw) = request.body.as_deref() {
            match parse_body(raw) {
                Ok(doc) => body_doc = Some(doc),
                Err(err) => {
                    body_failed = true;
                    for (spec, src) in &classified {
                        if *src == ParamSource::Body {
                            rejection.push(ParamRejection::new(
                                &spec.name,
                                RejectionKind::UnresolvableBody,
                                format!("request body is not a valid JSON document: {err}"),
                            ));
                        }
                    }
                }
            }
        }
    }

    // A sole object body parameter binds the whole document; in every other
    // body shape the top level maps parameter names to sub-documents.
    let whole_document = body_count == 1
        && classified
            .iter()
            .any(|(p, src)| *src == ParamSource::Body && p.kind.is_object());

    let mut args = BoundArguments::new();
    for (spec, source) in &classified {
        if *source == ParamSource::Body && body_failed {
            continue;
        }
        let outcome = match source {
            ParamSource::Path => match route_match.get_path_param(&spec.name) {
                // A matched route always carries its path params; defaults
                // never apply here.
                Some(raw) => {
                    note_deprecated(spec);
                    resolve_text(spec, &spec.name, raw)
                }
                None => Err(vec![missing(&spec.name)]),
            },
            ParamSource::Query => match query_value(request, spec) {
                RawQuery::Absent => default_or_missing(spec, &spec.name),
                RawQuery::Scalar(raw) => {
                    note_deprecated(spec);
                    resolve_text(spec, &spec.name, raw)
                }
                RawQuery::List(values) => {
                    note_deprecated(spec);
                    resolve_text_list(spec, &spec.name, &values)
                }
            },
            ParamSource::Body => {
                let field = body_doc.as_ref().and_then(|doc| {
                    if whole_document {
                        Some(doc)
                    } else {
                        doc.get(&spec.name)
                    }
                });
                match field {
                    Some(value) => {
                        note_deprecated(spec);
                        resolve_json(spec, &spec.name, value)
                    }
                    None => default_or_missing(spec, &spec.name),
                }
            }
        };

        match outcome {
            Ok(value) => args.insert(spec.name.clone(), value),
            Err(errs) => rejection.extend(errs),
        }
    }

    if rejection.is_empty() {
        debug!(
            handler_name = %route.handler_name,
            bound = args.len(),
            "Parameters resolved"
        );
        Ok(args)
    } else {
        debug!(
            handler_name = %route.handler_name,
            failed = rejection.len(),
            "Parameter resolution rejected"
        );
        Err(rejection)
    }
}

/// Source classification, in precedence order: path pattern membership,
/// explicit annotation, object kind, scalar embedded beside a body object,
/// query.
fn classify(spec: &ParamSpec, path_names: &[String], route_has_object: bool) -> ParamSource {
    if path_names.iter().any(|n| n == &spec.name) {
        return ParamSource::Path;
    }
    if let Some(source) = spec.source {
        return source;
    }
    if spec.kind.is_object() || route_has_object {
        return ParamSource::Body;
    }
    ParamSource::Query
}

fn note_deprecated(spec: &ParamSpec) {
    if spec.deprecated {
        warn!(param = %spec.name, "Deprecated parameter supplied");
    }
}

fn missing(name: &str) -> ParamRejection {
    ParamRejection::new(
        name,
        RejectionKind::MissingRequiredParameter,
        "missing required parameter",
    )
}

/// Absent value: a declared default (including null) is used verbatim and
/// skips coercion and constraints; no default is a rejection.
fn default_or_missing(spec: &ParamSpec, name: &str) -> Result<Value, Vec<ParamRejection>> {
    match &spec.default {
        Some(default) => Ok(default.clone()),
        None => Err(vec![missing(name)]),
    }
}

fn query_value<'a>(request: &'a RawRequest, spec: &ParamSpec) -> RawQuery<'a> {
    let values: Vec<&str> = request
        .query_params
        .iter()
        .filter(|(k, _)| *k == spec.name || spec.alias.as_deref() == Some(k.as_str()))
        .map(|(_, v)| v.as_str())
        .collect();
    if values.is_empty() {
        return RawQuery::Absent;
    }
    match spec.kind {
        ParamKind::TextList => RawQuery::List(values),
        // Last-wins for repeated scalar keys; see `resolve`.
        _ => match values.last() {
            Some(last) => RawQuery::Scalar(last),
            None => RawQuery::Absent,
        },
    }
}

/// Coerce raw text (path segment or query value) to the declared kind, then
/// apply constraints.
fn resolve_text(spec: &ParamSpec, name: &str, raw: &str) -> Result<Value, Vec<ParamRejection>> {
    let value = match &spec.kind {
        ParamKind::Integer => match raw.parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => {
                return Err(vec![ParamRejection::new(
                    name,
                    RejectionKind::CoercionError,
                    format!("'{raw}' is not a valid integer"),
                )
                .with_value(raw)])
            }
        },
        ParamKind::Float => match raw.parse::<f64>() {
            Ok(n) => Value::from(n),
            Err(_) => {
                return Err(vec![ParamRejection::new(
                    name,
                    RejectionKind::CoercionError,
                    format!("'{raw}' is not a valid number"),
                )
                .with_value(raw)])
            }
        },
        ParamKind::Bool => {
            let lowered = raw.to_ascii_lowercase();
            if TRUTHY.contains(&lowered.as_str()) {
                Value::Bool(true)
            } else if FALSY.contains(&lowered.as_str()) {
                Value::Bool(false)
            } else {
                return Err(vec![ParamRejection::new(
                    name,
                    RejectionKind::CoercionError,
                    format!(
                        "'{raw}' is not a valid boolean (expected one of: {}, {})",
                        TRUTHY.join(", "),
                        FALSY.join(", ")
                    ),
                )
                .with_value(raw)]);
            }
        }
        ParamKind::Text => Value::String(raw.to_string()),
        ParamKind::Enumerated(allowed) => {
            if allowed.iter().any(|a| a == raw) {
                Value::String(raw.to_string())
            } else {
                return Err(vec![ParamRejection::new(
                    name,
                    RejectionKind::CoercionError,
                    format!(
                        "'{raw}' is not one of the allowed values: {}",
                        allowed.join(", ")
                    ),
                )
                .with_value(raw)]);
            }
        }
        // A single raw occurrence of a list parameter is a one-element list.
        ParamKind::TextList => return resolve_text_list(spec, name, &[raw]),
        // An object arriving as text (explicitly query-annotated) is parsed
        // as an inline JSON document.
        ParamKind::Object(_) => match serde_json::from_str::<Value>(raw) {
            Ok(doc) => return resolve_json(spec, name, &doc),
            Err(_) => {
                return Err(vec![ParamRejection::new(
                    name,
                    RejectionKind::CoercionError,
                    "expected an inline JSON object",
                )
                .with_value(raw)])
            }
        },
    };

    let violations = check_constraints(name, &spec.constraints, &value);
    if violations.is_empty() {
        Ok(value)
    } else {
        Err(violations)
    }
}

/// Collect repeated query occurrences into an ordered list, constraining
/// each element individually.
fn resolve_text_list(
    spec: &ParamSpec,
    name: &str,
    values: &[&str],
) -> Result<Value, Vec<ParamRejection>> {
    let list = Value::Array(
        values
            .iter()
            .map(|v| Value::String((*v).to_string()))
            .collect(),
    );
    let violations = check_constraints(name, &spec.constraints, &list);
    if violations.is_empty() {
        Ok(list)
    } else {
        Err(violations)
    }
}

/// Coerce a JSON value (body field or whole body) against the declared
/// kind, then apply constraints. Unlike text coercion this is strict: a
/// JSON string `"42"` does not satisfy an integer field.
fn resolve_json(spec: &ParamSpec, name: &str, value: &Value) -> Result<Value, Vec<ParamRejection>> {
    let coerced = match &spec.kind {
        ParamKind::Integer => match value.as_i64() {
            Some(n) => Value::from(n),
            None => return Err(vec![json_mismatch(name, "an integer", value)]),
        },
        ParamKind::Float => match value.as_f64() {
            Some(n) => Value::from(n),
            None => return Err(vec![json_mismatch(name, "a number", value)]),
        },
        ParamKind::Bool => match value.as_bool() {
            Some(b) => Value::Bool(b),
            None => return Err(vec![json_mismatch(name, "a boolean", value)]),
        },
        ParamKind::Text => match value.as_str() {
            Some(s) => Value::String(s.to_string()),
            None => return Err(vec![json_mismatch(name, "a string", value)]),
        },
        ParamKind::Enumerated(allowed) => match value.as_str() {
            Some(s) if allowed.iter().any(|a| a == s) => Value::String(s.to_string()),
            Some(s) => {
                return Err(vec![ParamRejection::new(
                    name,
                    RejectionKind::CoercionError,
                    format!(
                        "'{s}' is not one of the allowed values: {}",
                        allowed.join(", ")
                    ),
                )
                .with_value(s)])
            }
            None => return Err(vec![json_mismatch(name, "a string", value)]),
        },
        ParamKind::TextList => match value.as_array() {
            Some(items) => {
                let mut errs = Vec::new();
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item.as_str() {
                        Some(s) => out.push(Value::String(s.to_string())),
                        None => errs.push(json_mismatch(&format!("{name}[{i}]"), "a string", item)),
                    }
                }
                if !errs.is_empty() {
                    return Err(errs);
                }
                Value::Array(out)
            }
            None => return Err(vec![json_mismatch(name, "an array of strings", value)]),
        },
        ParamKind::Object(schema) => {
            let map = match value.as_object() {
                Some(map) => map,
                None => return Err(vec![json_mismatch(name, "an object", value)]),
            };
            let mut errs = Vec::new();
            let mut out = Map::new();
            for field in &schema.fields {
                let field_path = format!("{name}.{}", field.name);
                let raw = map
                    .get(&field.name)
                    .or_else(|| field.alias.as_ref().and_then(|a| map.get(a)));
                let resolved = match raw {
                    Some(v) => {
                        note_deprecated(field);
                        resolve_json(field, &field_path, v)
                    }
                    None => default_or_missing(field, &field_path),
                };
                match resolved {
                    Ok(v) => {
                        out.insert(field.name.clone(), v);
                    }
                    Err(mut field_errs) => errs.append(&mut field_errs),
                }
            }
            // Unknown input fields are ignored; the resolved object carries
            // exactly the declared fields, defaulted ones filled in.
            if !errs.is_empty() {
                return Err(errs);
            }
            Value::Object(out)
        }
    };

    let violations = check_constraints(name, &spec.constraints, &coerced);
    if violations.is_empty() {
        Ok(coerced)
    } else {
        Err(violations)
    }
}

fn json_mismatch(name: &str, expected: &str, got: &Value) -> ParamRejection {
    ParamRejection::new(
        name,
        RejectionKind::CoercionError,
        format!("expected {expected}, got {}", json_type_name(got)),
    )
    .with_value(got.to_string())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Apply constraints to a coerced value. Numeric bounds compare as `f64`;
/// length bounds count characters and apply to text and to each list
/// element; the pattern was anchored at declaration time.
fn check_constraints(name: &str, constraints: &Constraints, value: &Value) -> Vec<ParamRejection> {
    if constraints.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();

    if let Some(n) = value.as_f64() {
        if let Some(min) = constraints.minimum {
            if n < min {
                out.push(violation(name, format!("{n} is less than the minimum of {min}"), n));
            }
        }
        if let Some(max) = constraints.maximum {
            if n > max {
                out.push(violation(name, format!("{n} is greater than the maximum of {max}"), n));
            }
        }
        if let Some(bound) = constraints.exclusive_minimum {
            if n <= bound {
                out.push(violation(name, format!("{n} must be greater than {bound}"), n));
            }
        }
        if let Some(bound) = constraints.exclusive_maximum {
            if n >= bound {
                out.push(violation(name, format!("{n} must be less than {bound}"), n));
            }
        }
    }

    if let Some(s) = value.as_str() {
        check_text_constraints(name, constraints, s, &mut out);
    }

    if let Some(items) = value.as_array() {
        for (i, item) in items.iter().enumerate() {
            if let Some(s) = item.as_str() {
                check_text_constraints(&format!("{name}[{i}]"), constraints, s, &mut out);
            }
        }
    }

    out
}

fn check_text_constraints(
    name: &str,
    constraints: &Constraints,
    text: &str,
    out: &mut Vec<ParamRejection>,
) {
    let chars = text.chars().count();
    if let Some(min) = constraints.min_length {
        if chars < min {
            out.push(
                ParamRejection::new(
                    name,
                    RejectionKind::ConstraintViolation,
                    format!("'{text}' is shorter than the minimum length of {min}"),
                )
                .with_value(text),
            );
        }
    }
    if let Some(max) = constraints.max_length {
        if chars > max {
            out.push(
                ParamRejection::new(
                    name,
                    RejectionKind::ConstraintViolation,
                    format!("'{text}' is longer than the maximum length of {max}"),
                )
                .with_value(text),
            );
        }
    }
    if let Some(pattern) = &constraints.pattern {
        if !pattern.is_match(text) {
            out.push(
                ParamRejection::new(
                    name,
                    RejectionKind::ConstraintViolation,
                    format!("'{text}' does not match pattern {}", pattern.as_str()),
                )
                .with_value(text),
            );
        }
    }
}

fn violation(name: &str, message: String, n: f64) -> ParamRejection {
    ParamRejection::new(name, RejectionKind::ConstraintViolation, message).with_value(n.to_string())
}
