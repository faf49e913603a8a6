use serde_json::Value;

use crate::format::format_bytes;

/// Response body after content-type classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Text used for both the clipboard and downloads: indented JSON, or the
    /// raw string when the payload is already a string.
    pub fn display_text(&self) -> String {
        match self {
            Payload::Text(text) => text.clone(),
            Payload::Json(Value::String(text)) => text.clone(),
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }

    /// Number of elements when the payload is a JSON array.
    pub fn item_count(&self) -> Option<usize> {
        match self {
            Payload::Json(Value::Array(items)) => Some(items.len()),
            _ => None,
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            Payload::Json(value) => serde_json::to_string(value)
                .map(|compact| compact.len())
                .unwrap_or(0),
            Payload::Text(text) => text.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    pub payload: Payload,
    pub elapsed_ms: u64,
    pub byte_size: u64,
    pub size_label: String,
    pub content_type: String,
    pub is_json: bool,
    pub http_status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
}

impl NormalizedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.http_status)
    }

    pub fn status_line(&self) -> String {
        format!("{} {}", self.http_status, self.status_text)
    }
}

/// Substring match only; parameters such as `charset` are not parsed.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.contains("application/json")
}

/// Everything read off the wire for one response.
pub struct RawResponse {
    pub http_status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub elapsed_ms: u64,
}

pub fn normalize(raw: RawResponse) -> NormalizedResponse {
    let content_type = raw
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.clone())
        .unwrap_or_default();

    let text = String::from_utf8_lossy(&raw.body).into_owned();
    let payload = if is_json_content_type(&content_type) {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Payload::Json(value),
            Err(err) => {
                tracing::warn!("response claims JSON but does not parse ({err}); showing as text");
                Payload::Text(text)
            }
        }
    } else {
        Payload::Text(text)
    };

    let is_json = matches!(payload, Payload::Json(_));
    let byte_size = payload.encoded_len() as u64;

    NormalizedResponse {
        payload,
        elapsed_ms: raw.elapsed_ms,
        byte_size,
        size_label: format_bytes(byte_size),
        content_type,
        is_json,
        http_status: raw.http_status,
        status_text: raw.status_text,
        headers: raw.headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn raw(content_type: &str, body: &str) -> RawResponse {
        RawResponse {
            http_status: 200,
            status_text: "OK".to_string(),
            headers: vec![("content-type".to_string(), content_type.to_string())],
            body: body.as_bytes().to_vec(),
            elapsed_ms: 12,
        }
    }

    #[test]
    fn json_content_type_is_substring_match() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type(""));
    }

    #[test]
    fn json_body_is_parsed_and_sized_compactly() {
        let response = normalize(raw("application/json", "{ \"a\" : [1, 2] }"));
        assert!(response.is_json);
        assert_eq!(response.payload, Payload::Json(json!({"a": [1, 2]})));
        // {"a":[1,2]}
        assert_eq!(response.byte_size, 11);
        assert_eq!(response.size_label, "11 Bytes");
    }

    #[test]
    fn text_body_is_sized_in_utf8_bytes() {
        let response = normalize(raw("text/plain", "héllo"));
        assert!(!response.is_json);
        assert_eq!(response.payload, Payload::Text("héllo".to_string()));
        assert_eq!(response.byte_size, 6);
    }

    #[test]
    fn json_shaped_text_stays_text_without_header() {
        let response = normalize(raw("text/html", "[1,2,3]"));
        assert!(!response.is_json);
        assert_eq!(response.payload.item_count(), None);
    }

    #[test]
    fn malformed_json_is_downgraded_to_text() {
        let response = normalize(raw("application/json", "{oops"));
        assert!(!response.is_json);
        assert_eq!(response.content_type, "application/json");
        assert_eq!(response.payload, Payload::Text("{oops".to_string()));
    }

    #[test]
    fn display_text_uses_indented_json_or_raw_string() {
        let value = Payload::Json(json!({"a": 1}));
        assert_eq!(value.display_text(), "{\n  \"a\": 1\n}");
        assert_eq!(Payload::Json(json!("plain")).display_text(), "plain");
        assert_eq!(Payload::Text("raw body".into()).display_text(), "raw body");
    }

    #[test]
    fn success_covers_2xx_only() {
        let mut response = normalize(raw("text/plain", ""));
        assert!(response.is_success());
        response.http_status = 404;
        assert!(!response.is_success());
        response.http_status = 302;
        assert!(!response.is_success());
    }
}
