//! Parameter binding: argument map in, ordered query pairs out.
//!
//! All validation happens here, before any network I/O. A dispatch that
//! fails binding provably never touches the transport.

use crate::tools::ToolSpec;
use crate::types::{Error, Result};
use serde_json::Value;

/// Validate `args` against `spec` and produce the query pairs to send.
///
/// - Output order exactly matches `spec.params` declaration order,
///   regardless of the argument map's iteration order.
/// - Absent optional parameters are omitted entirely, never emitted empty.
/// - A missing required parameter, a type mismatch, an unknown key, or a
///   non-object argument value all fail with `Validation`. Problems are
///   collected so the caller sees every issue at once.
pub fn bind_params(spec: &ToolSpec, args: &Value) -> Result<Vec<(String, String)>> {
    let map = match args {
        Value::Object(map) => map,
        Value::Null => {
            // Tolerate an omitted argument object; required checks below
            // still apply.
            return bind_params(spec, &Value::Object(serde_json::Map::new()));
        }
        other => {
            return Err(Error::validation(format!(
                "arguments for {} must be a JSON object, got {}",
                spec.name,
                type_name(other)
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    let mut problems = Vec::new();

    for param in spec.params {
        match map.get(param.name) {
            Some(value) => match param.kind.stringify(value) {
                Ok(text) => pairs.push((param.name.to_string(), text)),
                Err(reason) => problems.push(format!("parameter '{}': {}", param.name, reason)),
            },
            None if param.required => {
                problems.push(format!("missing required parameter: {}", param.name));
            }
            None => {}
        }
    }

    for key in map.keys() {
        if !spec.params.iter().any(|p| p.name == key) {
            problems.push(format!("unknown parameter: {key}"));
        }
    }

    if problems.is_empty() {
        Ok(pairs)
    } else {
        Err(Error::validation(format!(
            "invalid arguments for {}: {}",
            spec.name,
            problems.join("; ")
        )))
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{AuthHeader, ParamKind, ParamSpec, ResponseShape};
    use serde_json::json;

    const fn param(name: &'static str, kind: ParamKind, required: bool) -> ParamSpec {
        ParamSpec {
            name,
            kind,
            required,
            description: "",
        }
    }

    const SPEC: ToolSpec = ToolSpec {
        name: "get_example",
        description: "Example",
        path: "/example",
        params: &[
            param("host", ParamKind::String, true),
            param("list-rating", ParamKind::Number, false),
            param("live", ParamKind::Boolean, false),
        ],
        auth: AuthHeader::ApiKey,
        shape: ResponseShape::RawString,
    };

    #[test]
    fn test_emits_declared_order_not_map_order() {
        // Keys given in reverse of declaration order
        let args = json!({"live": true, "list-rating": 3, "host": "example.org"});
        let pairs = bind_params(&SPEC, &args).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("host".to_string(), "example.org".to_string()),
                ("list-rating".to_string(), "3".to_string()),
                ("live".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let pairs = bind_params(&SPEC, &json!({"host": "example.org"})).unwrap();
        assert_eq!(pairs, vec![("host".to_string(), "example.org".to_string())]);
    }

    #[test]
    fn test_missing_required_is_validation() {
        let err = bind_params(&SPEC, &json!({"live": false})).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{err}");
        assert!(err.to_string().contains("missing required parameter: host"));
    }

    #[test]
    fn test_type_mismatch_is_validation() {
        let err = bind_params(&SPEC, &json!({"host": 42})).unwrap_err();
        assert!(err.to_string().contains("parameter 'host'"));
        assert!(err.to_string().contains("expected string"));
    }

    #[test]
    fn test_unknown_parameter_is_validation() {
        let err = bind_params(&SPEC, &json!({"host": "x", "bogus": 1})).unwrap_err();
        assert!(err.to_string().contains("unknown parameter: bogus"));
    }

    #[test]
    fn test_problems_are_collected() {
        let err = bind_params(&SPEC, &json!({"live": "yes", "bogus": 1})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing required parameter: host"));
        assert!(message.contains("parameter 'live'"));
        assert!(message.contains("unknown parameter: bogus"));
    }

    #[test]
    fn test_null_arguments_behave_as_empty_object() {
        let err = bind_params(&SPEC, &Value::Null).unwrap_err();
        assert!(err.to_string().contains("missing required parameter: host"));
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let err = bind_params(&SPEC, &json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn test_number_formatting_is_canonical() {
        let args = json!({"host": "x", "list-rating": 2.5});
        let pairs = bind_params(&SPEC, &args).unwrap();
        assert_eq!(pairs[1], ("list-rating".to_string(), "2.5".to_string()));
    }
}
