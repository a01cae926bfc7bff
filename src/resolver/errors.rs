use serde_json::{json, Value};

/// Why a single parameter failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// No raw value and no default.
    MissingRequiredParameter,
    /// Raw value cannot be converted to the declared kind.
    CoercionError,
    /// Coerced value violates a bound, length, or pattern rule.
    ConstraintViolation,
    /// The request body itself is not a parseable document.
    UnresolvableBody,
}

impl RejectionKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionKind::MissingRequiredParameter => "missing_required_parameter",
            RejectionKind::CoercionError => "coercion_error",
            RejectionKind::ConstraintViolation => "constraint_violation",
            RejectionKind::UnresolvableBody => "unresolvable_body",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One failed parameter: which one, why, and the offending raw value when
/// there was one. Nested body fields are attributed with a dotted path
/// (e.g. `item.price`) and list elements with an index (e.g. `q[1]`).
#[derive(Debug, Clone)]
pub struct ParamRejection {
    pub param: String,
    pub kind: RejectionKind,
    pub message: String,
    pub value: Option<String>,
}

impl ParamRejection {
    pub fn new(param: impl Into<String>, kind: RejectionKind, message: impl Into<String>) -> Self {
        ParamRejection {
            param: param.into(),
            kind,
            message: message.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl std::fmt::Display for ParamRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.as_str(), self.param, self.message)
    }
}

/// The aggregated, named set of parameter resolution failures for one
/// request. Never a partial success: if this exists, no arguments are bound.
#[derive(Debug, Clone, Default)]
pub struct ValidationRejection {
    pub rejections: Vec<ParamRejection>,
}

impl ValidationRejection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rejection: ParamRejection) {
        self.rejections.push(rejection);
    }

    pub fn extend(&mut self, rejections: Vec<ParamRejection>) {
        self.rejections.extend(rejections);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rejections.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rejections.len()
    }

    /// True if any entry names `param` (exact match, dotted paths included).
    #[must_use]
    pub fn names(&self, param: &str) -> bool {
        self.rejections.iter().any(|r| r.param == param)
    }

    /// Serialize for a client-facing error payload.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.rejections
                .iter()
                .map(|r| {
                    json!({
                        "param": r.param,
                        "kind": r.kind.as_str(),
                        "message": r.message,
                        "value": r.value,
                    })
                })
                .collect(),
        )
    }
}

impl std::fmt::Display for ValidationRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} parameter(s) failed validation: ", self.rejections.len())?;
        for (i, r) in self.rejections.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationRejection {}
