//! Extracts the mail fields from an incoming request.
//!
//! Methods without a meaningful body (`GET`, `HEAD`, `DELETE`, `OPTIONS`) are
//! read from the query string. Everything else is read from the body, decoded
//! according to its `content-type`: JSON objects, or url-encoded forms when the
//! type is form data or missing altogether.

use axum::{
    body::to_bytes,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap, Method},
};
use serde_json::Value;
use thiserror::Error;

use crate::domain::mail::EmailRequest;

/// Why a request could not be turned into a field mapping
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body could not be read, or exceeded the size limit
    #[error("failed to read request body: {0}")]
    Body(String),

    /// The body is not valid JSON
    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but not an object
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// The body is of a type the bridge cannot decode
    #[error("unsupported content type \"{0}\"")]
    UnsupportedContentType(String),
}

#[derive(Debug, PartialEq, Eq)]
enum Format {
    Json,
    Form,
}

/// Reads `request` into an [`EmailRequest`], reading at most `limit` body bytes
pub async fn email_request(request: Request, limit: usize) -> Result<EmailRequest, ParseError> {
    let (parts, body) = request.into_parts();

    if reads_query(&parts.method) {
        let query = parts.uri.query().unwrap_or_default();

        return Ok(from_form(query.as_bytes()));
    }

    let bytes = to_bytes(body, limit)
        .await
        .map_err(|err| ParseError::Body(err.to_string()))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(EmailRequest::new());
    }

    match format(&parts.headers)? {
        Format::Json => from_json(&bytes),
        Format::Form => Ok(from_form(&bytes)),
    }
}

fn reads_query(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::DELETE | Method::OPTIONS
    )
}

fn format(headers: &HeaderMap) -> Result<Format, ParseError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Ok(Format::Form);
    };

    let raw = value
        .to_str()
        .map_err(|_| ParseError::UnsupportedContentType(format!("{value:?}")))?;

    let essence = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "application/json" => Ok(Format::Json),
        essence if essence.starts_with("application/") && essence.ends_with("+json") => {
            Ok(Format::Json)
        }
        "application/x-www-form-urlencoded" | "" => Ok(Format::Form),
        _ => Err(ParseError::UnsupportedContentType(raw.to_string())),
    }
}

fn from_form(bytes: &[u8]) -> EmailRequest {
    url::form_urlencoded::parse(bytes).into_owned().collect()
}

fn from_json(bytes: &[u8]) -> Result<EmailRequest, ParseError> {
    let Value::Object(object) = serde_json::from_slice::<Value>(bytes)? else {
        return Err(ParseError::NotAnObject);
    };

    Ok(object
        .into_iter()
        .filter_map(|(name, value)| {
            let text = match value {
                Value::Null | Value::Bool(false) => return None,
                Value::Number(number) if number.as_f64() == Some(0.0) => return None,
                Value::String(text) => text,
                Value::Bool(true) => "true".to_string(),
                Value::Number(number) => number.to_string(),
                nested => nested.to_string(),
            };

            Some((name, text))
        })
        .collect())
}
