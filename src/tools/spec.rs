//! Declarative tool descriptions.
//!
//! A [`ToolSpec`] captures everything the engine needs to call one remote
//! endpoint: its path, ordered parameter list, credential header, and decode
//! target. Specs are `'static` data constructed once at process start and
//! never mutated.

use serde::Serialize;
use serde_json::Value;

// =============================================================================
// Parameter types
// =============================================================================

/// Parameter kind for tool inputs.
///
/// The remote API takes every parameter as a query-string value; the kind
/// determines which JSON argument types are accepted and how the value is
/// stringified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
}

impl ParamKind {
    /// Validate a JSON argument against this kind and render its canonical
    /// query-string form.
    ///
    /// Numbers use `serde_json`'s shortest round-trip formatting; booleans
    /// render as `true`/`false`. No locale-dependent formatting anywhere.
    pub fn stringify(&self, value: &Value) -> Result<String, String> {
        match self {
            ParamKind::String => match value {
                Value::String(s) => Ok(s.clone()),
                other => Err(format!("expected string, got {}", value_type_name(other))),
            },
            ParamKind::Number => match value {
                Value::Number(n) => Ok(n.to_string()),
                other => Err(format!("expected number, got {}", value_type_name(other))),
            },
            ParamKind::Boolean => match value {
                Value::Bool(b) => Ok(b.to_string()),
                other => Err(format!("expected boolean, got {}", value_type_name(other))),
            },
        }
    }

    /// JSON Schema type name for catalog listings.
    pub fn schema_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
        }
    }
}

fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single parameter definition for a tool.
///
/// Declaration order within a [`ToolSpec`] is significant: the bound query
/// string preserves it exactly, regardless of argument map iteration order.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

// =============================================================================
// Auth header selection
// =============================================================================

/// Which credential header a tool sends.
///
/// The remote API uses `api-key` for most endpoints but `user-id` for the
/// geolocation, domain-lookup and security-code-verification group. The
/// split is preserved per tool exactly as the upstream service expects it,
/// never inferred from the tool's domain grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthHeader {
    ApiKey,
    UserId,
}

impl AuthHeader {
    /// The outbound header name carrying the credential.
    pub fn header_name(&self) -> &'static str {
        match self {
            AuthHeader::ApiKey => "api-key",
            AuthHeader::UserId => "user-id",
        }
    }
}

// =============================================================================
// Response decode target
// =============================================================================

/// Strict decode into a typed model, rendered back out as pretty JSON.
/// Returning `Err` triggers the lenient raw-body fallback, it never fails
/// the call.
pub type DecodeFn = fn(&str) -> serde_json::Result<String>;

/// The declared response shape of a tool.
#[derive(Debug, Clone, Copy)]
pub enum ResponseShape {
    /// A structured JSON object; the function is the monomorphized decode
    /// for the tool's typed model.
    Json(DecodeFn),
    /// A bare JSON string literal (bulk list downloads). Falls back to the
    /// raw body identically.
    RawString,
}

/// Decode a body into `T` strictly, then pretty-print it.
///
/// Stored as a [`DecodeFn`] in the static tool table; the generic is the
/// statically-typed selection of the decode target.
pub fn decode_pretty<T>(body: &str) -> serde_json::Result<String>
where
    T: serde::de::DeserializeOwned + Serialize,
{
    let value: T = serde_json::from_str(body)?;
    serde_json::to_string_pretty(&value)
}

// =============================================================================
// Tool spec
// =============================================================================

/// Complete declarative description of one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// Globally unique tool name.
    pub name: &'static str,
    pub description: &'static str,
    /// Endpoint path appended to the base URL, with a leading slash.
    pub path: &'static str,
    /// Ordered parameter list. Order is preserved in the query string.
    pub params: &'static [ParamSpec],
    pub auth: AuthHeader,
    pub shape: ResponseShape,
}

impl ToolSpec {
    /// Render the MCP-style JSON Schema describing this tool's arguments.
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        for param in self.params {
            properties.insert(
                param.name.to_string(),
                serde_json::json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
        }
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// The serializable catalog entry for this tool.
    pub fn definition(&self) -> ToolDef {
        ToolDef {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Catalog entry returned by `ToolRegistry::list`, shaped for the MCP
/// `tools/list` surface.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringify_string() {
        assert_eq!(ParamKind::String.stringify(&json!("abc")).unwrap(), "abc");
        assert!(ParamKind::String.stringify(&json!(42)).is_err());
    }

    #[test]
    fn test_stringify_number_shortest_round_trip() {
        assert_eq!(ParamKind::Number.stringify(&json!(10)).unwrap(), "10");
        assert_eq!(ParamKind::Number.stringify(&json!(10.5)).unwrap(), "10.5");
        assert_eq!(ParamKind::Number.stringify(&json!(0.1)).unwrap(), "0.1");
        assert!(ParamKind::Number.stringify(&json!("10")).is_err());
    }

    #[test]
    fn test_stringify_boolean() {
        assert_eq!(ParamKind::Boolean.stringify(&json!(true)).unwrap(), "true");
        assert_eq!(
            ParamKind::Boolean.stringify(&json!(false)).unwrap(),
            "false"
        );
        assert!(ParamKind::Boolean.stringify(&json!("true")).is_err());
    }

    #[test]
    fn test_auth_header_names() {
        assert_eq!(AuthHeader::ApiKey.header_name(), "api-key");
        assert_eq!(AuthHeader::UserId.header_name(), "user-id");
    }

    #[test]
    fn test_input_schema_lists_required_params() {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec {
                name: "host",
                kind: ParamKind::String,
                required: true,
                description: "A host",
            },
            ParamSpec {
                name: "live",
                kind: ParamKind::Boolean,
                required: false,
                description: "Live checks",
            },
        ];
        let spec = ToolSpec {
            name: "get_example",
            description: "Example",
            path: "/example",
            params: PARAMS,
            auth: AuthHeader::ApiKey,
            shape: ResponseShape::RawString,
        };

        let schema = spec.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["host"]["type"], "string");
        assert_eq!(schema["properties"]["live"]["type"], "boolean");
        assert_eq!(schema["required"], json!(["host"]));
    }

    #[test]
    fn test_decode_pretty_strict() {
        #[derive(serde::Deserialize, Serialize)]
        struct Sample {
            valid: bool,
        }
        let out = decode_pretty::<Sample>(r#"{"valid": true}"#).unwrap();
        assert!(out.contains("\"valid\": true"));
        assert!(decode_pretty::<Sample>("not json").is_err());
    }
}
