//! Boundary decoding of pricing documents.
//!
//! Quote requests arrive as `{"parameters": {leaf}}` while stored strategies
//! carry one more level, `{"parameters": {"parameters": {leaf}}}`. The two
//! shapes get separate entry points so the stored nesting is never
//! normalised away by accident.
//!
//! Decoding walks the whole document and reports every offending field,
//! with a dotted path relative to the decoded document.

use super::{Extras, FabricPct, FlatExtra, PersistedPricingStrategy, PricingParameters};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Path used for errors about the document root itself.
pub const ROOT_PATH: &str = "$";

/// Location of the leaf document in a quote request.
pub const QUOTE_LEAF_PATH: &str = "parameters";

/// Location of the leaf document in a stored strategy.
pub const STORED_LEAF_PATH: &str = "parameters.parameters";

/// How strictly leaf values are checked once their types are correct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Any integer is accepted, negative values included.
    #[default]
    Permissive,
    /// Negative counts, prices and percentages are rejected.
    Strict,
}

/// One offending field in a pricing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub expected: &'static str,
    pub actual: String,
    pub message: String,
}

impl FieldError {
    fn new(field: String, expected: &'static str, actual: impl Into<String>) -> Self {
        let actual = actual.into();
        let message = if actual == "missing" {
            "field required".to_string()
        } else {
            format!("expected {}, got {}", expected, actual)
        };
        Self {
            field,
            expected,
            actual,
            message,
        }
    }
}

/// A pricing document that does not satisfy the parameter schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// The leaf document at `path` is well-typed but its total does not fit
    /// the decimal range.
    pub fn total_overflow(path: &str) -> Self {
        Self {
            errors: vec![FieldError::new(
                path.to_string(),
                "total within decimal range",
                "overflow",
            )],
        }
    }

    /// Paths of all offending fields, in discovery order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pricing parameters")?;
        for (i, err) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{} ({})", sep, err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A stored strategy whose document could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pricing strategy {strategy_id} ({engine}) is malformed: {source}")]
pub struct DecodeError {
    pub strategy_id: i64,
    pub engine: String,
    pub source: ValidationError,
}

/// Decode a quote request body, `{"parameters": {leaf}}`.
pub fn decode_quote_request(
    body: &Value,
    mode: ValidationMode,
) -> Result<PricingParameters, ValidationError> {
    decode_enveloped(body, &[QUOTE_LEAF_PATH], mode)
}

/// Decode a stored strategy document, `{"parameters": {"parameters": {leaf}}}`.
pub fn decode_stored_strategy(
    record: &PersistedPricingStrategy,
    mode: ValidationMode,
) -> Result<PricingParameters, DecodeError> {
    decode_enveloped(&record.parameters, &["parameters", "parameters"], mode).map_err(|source| {
        DecodeError {
            strategy_id: record.id,
            engine: record.engine.clone(),
            source,
        }
    })
}

fn decode_enveloped(
    doc: &Value,
    envelope: &[&str],
    mode: ValidationMode,
) -> Result<PricingParameters, ValidationError> {
    let mut reader = FieldReader::default();

    let mut node = reader.root(doc);
    let mut path = String::new();
    for key in envelope {
        node = reader.object_at(node, key, &path);
        path = join(&path, key);
    }

    let params = reader.leaf(node, &path);
    if mode == ValidationMode::Strict && reader.errors.is_empty() {
        for (rel, value) in params.leaves() {
            if value < 0 {
                reader.push(join(&path, rel), "non-negative integer", value.to_string());
            }
        }
    }

    if reader.errors.is_empty() {
        Ok(params)
    } else {
        Err(ValidationError {
            errors: reader.errors,
        })
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn kind_of(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(n)) if n.is_i64() => "integer",
        Some(Value::Number(n)) if n.is_u64() => "integer out of range",
        Some(Value::Number(_)) => "float",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Collects field errors while walking a document.
///
/// Children of an object that failed to resolve are skipped; the parent
/// error already covers them.
#[derive(Default)]
struct FieldReader {
    errors: Vec<FieldError>,
}

impl FieldReader {
    fn push(&mut self, field: String, expected: &'static str, actual: impl Into<String>) {
        self.errors.push(FieldError::new(field, expected, actual));
    }

    fn root<'v>(&mut self, doc: &'v Value) -> Option<&'v Map<String, Value>> {
        match doc {
            Value::Object(map) => Some(map),
            other => {
                self.push(ROOT_PATH.to_string(), "object", kind_of(Some(other)));
                None
            }
        }
    }

    fn object_at<'v>(
        &mut self,
        parent: Option<&'v Map<String, Value>>,
        key: &str,
        path: &str,
    ) -> Option<&'v Map<String, Value>> {
        let parent = parent?;
        match parent.get(key) {
            Some(Value::Object(map)) => Some(map),
            other => {
                self.push(join(path, key), "object", kind_of(other));
                None
            }
        }
    }

    fn integer_at(&mut self, parent: Option<&Map<String, Value>>, key: &str, path: &str) -> i64 {
        let Some(parent) = parent else {
            return 0;
        };
        let value = parent.get(key);
        match value.and_then(Value::as_i64) {
            Some(n) => n,
            None => {
                self.push(join(path, key), "integer", kind_of(value));
                0
            }
        }
    }

    fn flat_extra(&mut self, node: Option<&Map<String, Value>>, path: &str) -> FlatExtra {
        FlatExtra {
            count: self.integer_at(node, "count", path),
            price: self.integer_at(node, "price", path),
        }
    }

    fn leaf(&mut self, node: Option<&Map<String, Value>>, path: &str) -> PricingParameters {
        let price_per_meter = self.integer_at(node, "pricePerMeter", path);
        let margin_pct = self.integer_at(node, "marginPct", path);

        let fabric = self.object_at(node, "fabricPct", path);
        let category = self.integer_at(fabric, "category", &join(path, "fabricPct"));

        let extras_path = join(path, "extras");
        let extras = self.object_at(node, "extras", path);
        let ottoman = self.object_at(extras, "ottomanFlat", &extras_path);
        let ottoman_flat = self.flat_extra(ottoman, &join(&extras_path, "ottomanFlat"));
        let mechanism = self.object_at(extras, "mechanismFlat", &extras_path);
        let mechanism_flat = self.flat_extra(mechanism, &join(&extras_path, "mechanismFlat"));

        PricingParameters {
            price_per_meter,
            margin_pct,
            fabric_pct: FabricPct { category },
            extras: Extras {
                ottoman_flat,
                mechanism_flat,
            },
        }
    }
}
