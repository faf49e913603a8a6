use std::fmt::{self, Display};

use serde::Serialize;

use super::error::RequestError;
use super::method::HttpMethod;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Vocabulary category the worker can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Nouns,
    Verbs,
    Idioms,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Nouns => "Nouns",
            Category::Verbs => "Verbs",
            Category::Idioms => "Idioms",
        };
        write!(f, "{label}")
    }
}

#[derive(Serialize)]
struct CategoryBody {
    #[serde(rename = "type")]
    kind: Category,
}

/// What the user has entered in the request panel.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub endpoint: String,
    pub method: HttpMethod,
    pub body: String,
    pub selected_category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBody {
    pub content_type: &'static str,
    pub text: String,
}

/// A request ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<PreparedBody>,
}

impl RequestConfig {
    /// Method that will actually go on the wire. A selected category always
    /// turns the call into a POST.
    pub fn effective_method(&self) -> HttpMethod {
        if self.selected_category.is_some() {
            HttpMethod::Post
        } else {
            self.method
        }
    }

    pub fn prepare(&self) -> Result<PreparedRequest, RequestError> {
        let url = self.endpoint.trim();
        if url.is_empty() {
            return Err(RequestError::EmptyUrl);
        }

        let body = match self.selected_category {
            Some(category) => Some(category_body(category)),
            None => prepare_body(self.method, &self.body),
        };

        Ok(PreparedRequest {
            method: self.effective_method(),
            url: url.to_string(),
            body,
        })
    }
}

/// Picks the content type for a user-entered body.
///
/// The text is passed through untouched; JSON detection only decides the
/// header. A body that is blank after trimming is not sent at all.
pub fn prepare_body(method: HttpMethod, body: &str) -> Option<PreparedBody> {
    if !method.allows_body() || body.trim().is_empty() {
        return None;
    }

    let content_type = if serde_json::from_str::<serde_json::Value>(body).is_ok() {
        CONTENT_TYPE_JSON
    } else {
        CONTENT_TYPE_TEXT
    };

    Some(PreparedBody {
        content_type,
        text: body.to_string(),
    })
}

fn category_body(category: Category) -> PreparedBody {
    let text = serde_json::to_string(&CategoryBody { kind: category })
        .unwrap_or_else(|_| format!("{{\"type\":\"{category}\"}}"));
    PreparedBody {
        content_type: CONTENT_TYPE_JSON,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(method: HttpMethod, body: &str) -> RequestConfig {
        RequestConfig {
            endpoint: "https://worker.example/".to_string(),
            method,
            body: body.to_string(),
            selected_category: None,
        }
    }

    #[test]
    fn get_never_carries_a_body() {
        for body in ["", "hello", "{\"a\":1}", "   "] {
            let prepared = config(HttpMethod::Get, body).prepare().unwrap();
            assert_eq!(prepared.body, None, "body `{body}` leaked into GET");
        }
    }

    #[test]
    fn valid_json_is_sent_verbatim_as_json() {
        let raw = "{ \"word\" : \"run\",\n  \"n\": 1 }";
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete, HttpMethod::Patch] {
            let prepared = config(method, raw).prepare().unwrap();
            let body = prepared.body.expect("body");
            assert_eq!(body.content_type, CONTENT_TYPE_JSON);
            assert_eq!(body.text.as_bytes(), raw.as_bytes());
        }
    }

    #[test]
    fn invalid_json_falls_back_to_plain_text() {
        let raw = "{\"word\": \"run\",}";
        let body = config(HttpMethod::Post, raw).prepare().unwrap().body.expect("body");
        assert_eq!(body.content_type, CONTENT_TYPE_TEXT);
        assert_eq!(body.text, raw);
    }

    #[test]
    fn blank_body_is_not_sent() {
        let prepared = config(HttpMethod::Post, " \n\t").prepare().unwrap();
        assert_eq!(prepared.body, None);
    }

    #[test]
    fn category_forces_json_post() {
        let mut request = config(HttpMethod::Get, "ignored");
        request.selected_category = Some(Category::Idioms);

        let prepared = request.prepare().unwrap();
        assert_eq!(prepared.method, HttpMethod::Post);
        assert_eq!(
            prepared.body,
            Some(PreparedBody {
                content_type: CONTENT_TYPE_JSON,
                text: "{\"type\":\"Idioms\"}".to_string(),
            })
        );
    }

    #[test]
    fn empty_url_is_rejected() {
        let mut request = config(HttpMethod::Get, "");
        request.endpoint = "   ".to_string();
        assert!(matches!(request.prepare(), Err(RequestError::EmptyUrl)));
    }

    #[test]
    fn url_is_trimmed() {
        let mut request = config(HttpMethod::Get, "");
        request.endpoint = "  https://worker.example/  ".to_string();
        assert_eq!(request.prepare().unwrap().url, "https://worker.example/");
    }
}
