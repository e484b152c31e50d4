//! JSONP envelope handling.
//!
//! The fund price endpoints serve their JSON wrapped in an Angular callback
//! invocation, e.g. `angular.callbacks._2({...})`. The latest-price endpoint
//! has also been observed returning the bare object when no `callback`
//! parameter is echoed back, so a body that is already a JSON object is
//! passed through unchanged.

use regex::Regex;

use crate::Error;

/// Extracts the JSON object text from a JSONP-framed body.
///
/// Returns a slice of the input: the callback framing is dropped, nothing is
/// re-serialized. Bodies that already start with `{` are returned as-is.
pub fn unwrap(body: &str) -> Result<&str, Error> {
    let trimmed = body.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    let re = Regex::new(r"(?s)\((\{.*\})\)").map_err(|e| {
        tracing::error!("Invalid JSONP pattern: {}", e);
        Error::RequestFailed
    })?;
    match re.captures(trimmed) {
        Some(caps) => Ok(caps.get(1).map_or("", |m| m.as_str())),
        None => Err(Error::MalformedPayload(format!(
            "no JSON object found in JSONP body: {}",
            snippet(trimmed)
        ))),
    }
}

fn snippet(body: &str) -> &str {
    const MAX: usize = 80;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::unwrap;
    use crate::Error;

    #[test]
    fn unwraps_angular_callback() {
        let body = r#"angular.callbacks._2({"historicalPrice":{"nav":[]}})"#;
        assert_eq!(unwrap(body).unwrap(), r#"{"historicalPrice":{"nav":[]}}"#);
    }

    #[test]
    fn unwraps_other_callback_names() {
        let body = r#"jsonpCallback_17({"asOfDate":"12/26/2025","netAssetValue":100.12})"#;
        assert_eq!(
            unwrap(body).unwrap(),
            r#"{"asOfDate":"12/26/2025","netAssetValue":100.12}"#
        );
    }

    #[test]
    fn passes_through_bare_json() {
        let body = "  {\"asOfDate\":\"12/26/2025\"}\n";
        assert_eq!(unwrap(body).unwrap(), r#"{"asOfDate":"12/26/2025"}"#);
    }

    #[test]
    fn keeps_nested_parens_inside_payload() {
        let body = r#"cb({"note":"value (adjusted)","price":1.0})"#;
        assert_eq!(
            unwrap(body).unwrap(),
            r#"{"note":"value (adjusted)","price":1.0}"#
        );
    }

    #[test]
    fn rejects_non_jsonp_body() {
        let err = unwrap("<html>blocked</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));
    }

    #[test]
    fn rejects_callback_without_object() {
        let err = unwrap("angular.callbacks._2([1,2,3])").unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));
    }
}
