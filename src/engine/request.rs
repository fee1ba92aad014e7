//! Request composition: base URL + endpoint path + encoded query + headers.

use crate::engine::transport::ApiRequest;
use crate::tools::ToolSpec;
use crate::types::{Error, Result};
use reqwest::Url;

/// HTTP header advertised on every outbound request.
pub const ACCEPT_HEADER: (&str, &str) = ("Accept", "application/json");

/// Parse and normalize the configured base URL once at registry build time.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    Url::parse(base_url.trim_end_matches('/'))
        .map_err(|err| Error::validation(format!("invalid base url '{base_url}': {err}")))
}

/// Compose one transport-ready GET request.
///
/// Query pairs are appended percent-encoded in the given order; when there
/// are no pairs the URL carries no query string at all (no trailing `?`).
/// The tool's designated credential header is attached only when a
/// credential is configured; without one the request still goes out and the
/// remote service decides.
pub fn build_request(
    base: &Url,
    spec: &ToolSpec,
    pairs: &[(String, String)],
    credential: Option<&str>,
) -> Result<ApiRequest> {
    // String concatenation rather than Url::join: join would replace the
    // final path segment of a base URL that carries its own path prefix.
    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), spec.path);
    let mut url = Url::parse(&joined)
        .map_err(|err| Error::validation(format!("invalid endpoint path '{}': {err}", spec.path)))?;

    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }

    let mut headers = vec![(ACCEPT_HEADER.0, ACCEPT_HEADER.1.to_string())];
    if let Some(credential) = credential {
        headers.push((spec.auth.header_name(), credential.to_string()));
    }

    Ok(ApiRequest { url, headers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{AuthHeader, ResponseShape, ToolSpec};

    const SPEC: ToolSpec = ToolSpec {
        name: "get_example",
        description: "Example",
        path: "/example",
        params: &[],
        auth: AuthHeader::UserId,
        shape: ResponseShape::RawString,
    };

    fn base() -> Url {
        parse_base_url("https://neutrinoapi.net").unwrap()
    }

    #[test]
    fn test_zero_params_means_no_query_string() {
        let request = build_request(&base(), &SPEC, &[], None).unwrap();
        assert_eq!(request.url.as_str(), "https://neutrinoapi.net/example");
        assert!(request.url.query().is_none());
    }

    #[test]
    fn test_query_preserves_order_and_encodes() {
        let pairs = vec![
            ("host".to_string(), "a b".to_string()),
            ("live".to_string(), "true".to_string()),
        ];
        let request = build_request(&base(), &SPEC, &pairs, None).unwrap();
        assert_eq!(request.url.query(), Some("host=a+b&live=true"));
    }

    #[test]
    fn test_credential_header_uses_tool_auth() {
        let request = build_request(&base(), &SPEC, &[], Some("secret")).unwrap();
        assert!(request
            .headers
            .iter()
            .any(|(name, value)| *name == "user-id" && value == "secret"));
        assert!(request
            .headers
            .iter()
            .any(|(name, value)| *name == "Accept" && value == "application/json"));
    }

    #[test]
    fn test_no_credential_sends_no_auth_header() {
        let request = build_request(&base(), &SPEC, &[], None).unwrap();
        assert!(request.headers.iter().all(|(name, _)| *name != "user-id"));
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(parse_base_url("not a url").is_err());
    }
}
