use crate::types::response::ErrorResponse;
use crate::utilities::api_messages::{APIMessages, OrderMessages};
use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    Json,
};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use regex::Regex;
use std::sync::OnceLock;

pub fn payload_analyzer<T>(
    payload_result: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, (StatusCode, Json<ErrorResponse>)> {
    let payload = match payload_result {
        Ok(payload) => payload,
        Err(err) => {
            let json = Json(ErrorResponse::new(
                format!("invalid payload: {}", err.body_text()),
                APIMessages::Order(OrderMessages::InvalidPayload).to_string(),
            ));

            return Err((StatusCode::BAD_REQUEST, json));
        }
    };

    Ok(payload)
}

pub async fn fallback(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let message = format!("invalid endpoint: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(message, APIMessages::NotFound.to_string())),
    )
}

pub fn random_string(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

static URL_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

pub fn valid_url(url: &str) -> bool {
    URL_PATTERN
        .get_or_init(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").ok())
        .as_ref()
        .map_or(false, |re| re.is_match(url))
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string_is_alphanumeric() {
        let id = random_string(12);
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_valid_url() {
        assert!(valid_url("https://i.imgur.com/abc123.png"));
        assert!(valid_url("http://example.com"));
        assert!(!valid_url("imgur.com/abc"));
        assert!(!valid_url("https://"));
        assert!(!valid_url("https://has space.com"));
    }

    #[test]
    fn test_url_pattern_compiled_once() {
        assert!(valid_url("https://example.com/a.png"));
        let first = URL_PATTERN.get().and_then(Option::as_ref).map(|re| re as *const Regex);
        assert!(first.is_some());

        assert!(!valid_url("ftp://example.com"));
        let second = URL_PATTERN.get().and_then(Option::as_ref).map(|re| re as *const Regex);
        assert_eq!(first, second);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Cookies & Cream"), "Cookies &amp; Cream");
        assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
    }
}
