//! Example request-body derivation.
//!
//! The body is resolved from the first available source, never merged:
//!
//! 1. The validation-rules provider bound to the handler, when one exists;
//!    one example value is synthesized per declared field.
//! 2. `@bodyParam` doc-comment tags.
//! 3. A single `"sample_key": "sample_value"` pair when neither source
//!    yields any field.
//!
//! A provider that is present but declares zero fields still wins the
//! precedence; doc tags are not consulted in that case.

use crate::collection::RequestBody;
use crate::discovery::HttpMethod;
use crate::error::Result;
use crate::introspect::HandlerIntrospector;
use crate::resolver::doc_tags::extract_tag_params;
use crate::resolver::example::synthesize_example;
use log::debug;
use serde_json::{Map, Value};

/// Default example value for body fields without an explicit example.
const DEFAULT_BODY_EXAMPLE: &str = "sample_value";

/// Derives the example request body for one (route, method) pair.
///
/// Only POST, PUT and PATCH carry a body; every other method yields `None`.
/// The field map is rendered as pretty-printed JSON in declaration order and
/// wrapped in raw mode.
///
/// # Errors
///
/// Only serialization of the field map can fail; introspection failures
/// degrade to the next source.
pub fn resolve_body(
    handler: Option<&str>,
    method: HttpMethod,
    introspector: &dyn HandlerIntrospector,
) -> Result<Option<RequestBody>> {
    if !method.has_body() {
        return Ok(None);
    }

    let mut fields = Map::new();

    match handler.and_then(|h| introspector.bound_rules(h)) {
        Some(rules) => {
            debug!(
                "Synthesizing body from rules provider ({} fields)",
                rules.len()
            );
            for (field, rule) in rules {
                fields.insert(field, synthesize_example(&rule));
            }
        }
        None => {
            if let Some(doc) = handler.and_then(|h| introspector.doc_comment(h)) {
                for param in extract_tag_params(&doc, "bodyParam") {
                    let value = param
                        .example
                        .map(|example| coerce_example(&example))
                        .unwrap_or_else(|| Value::from(DEFAULT_BODY_EXAMPLE));
                    fields.insert(param.name, value);
                }
            }
        }
    }

    if fields.is_empty() {
        fields.insert("sample_key".to_string(), Value::from("sample_value"));
    }

    let raw = serde_json::to_string_pretty(&Value::Object(fields))?;

    Ok(Some(RequestBody {
        mode: "raw".to_string(),
        raw,
    }))
}

/// Coerces numeric-looking example strings to integers; everything else is
/// kept as a string.
fn coerce_example(value: &str) -> Value {
    if let Ok(n) = value.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = value.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f.trunc() as i64);
        }
    }
    Value::from(value)
}
