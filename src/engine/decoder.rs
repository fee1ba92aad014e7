//! Response decoding with lenient fallback.
//!
//! The decode pipeline, in order: classify the HTTP status, then attempt a
//! strict typed decode, then degrade to the raw body. A schema mismatch is
//! never an error; only transport failures and HTTP error statuses are.
//! This keeps the adapter forward-compatible with remote schema drift.

use crate::engine::transport::ApiResponse;
use crate::tools::{ResponseShape, ToolSpec};
use crate::types::{Error, Result};

/// Decode one response per the tool's declared shape.
pub fn decode_response(spec: &ToolSpec, response: ApiResponse) -> Result<String> {
    if response.status >= 400 {
        // Error bodies are opaque text; no decode attempt is made.
        return Err(Error::remote_api(response.status, response.body));
    }

    match spec.shape {
        ResponseShape::Json(decode) => match decode(&response.body) {
            Ok(rendered) => Ok(rendered),
            Err(err) => {
                tracing::debug!(
                    tool = spec.name,
                    error = %err,
                    "typed decode failed, returning raw body"
                );
                Ok(response.body)
            }
        },
        ResponseShape::RawString => {
            // Bulk downloads arrive as one JSON string literal; anything
            // else passes through verbatim.
            match serde_json::from_str::<String>(&response.body) {
                Ok(inner) => Ok(inner),
                Err(_) => Ok(response.body),
            }
        }
    }
}
