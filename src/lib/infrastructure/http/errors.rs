//! API error-handling module

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::mail::errors::DispatchError;

use super::extract::ParseError;

/// An error raised in the API, rendered as a plain-text response
#[derive(Debug, PartialEq, Eq)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The response body
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// The request was sent to a path other than the configured endpoint
    pub fn bad_endpoint() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad endpoint request")
    }

    /// The request reached the endpoint but no email went out
    pub fn not_sent(reason: impl fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Email was not send, because of {reason}"),
        }
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        warn!("could not extract mail fields: {err}");

        ApiError::not_sent(err)
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match &err {
            DispatchError::InsufficientData => warn!("rejected mail request: {err}"),
            DispatchError::Mailer(_) => error!("failed to send email: {err}"),
        }

        ApiError::not_sent(err)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::to_bytes, http::header::CONTENT_TYPE};
    use testresult::TestResult;

    use crate::domain::mail::errors::MailerError;

    use super::*;

    #[tokio::test]
    async fn test_error_response_is_plain_text() -> TestResult {
        let response = ApiError::bad_endpoint().into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).map(|v| v.to_str()).transpose()?,
            Some("text/plain; charset=utf-8")
        );

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, "Bad endpoint request");

        Ok(())
    }

    #[test]
    fn test_api_error_from_dispatch_error() {
        let api_error = ApiError::from(DispatchError::InsufficientData);

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api_error.message,
            "Email was not send, because of There is not appropriate data for email sending"
        );
    }

    #[test]
    fn test_api_error_from_transport_error() {
        let err = DispatchError::from(MailerError::from(anyhow!("Connection refused")));

        assert_eq!(
            ApiError::from(err),
            ApiError::not_sent("Connection refused")
        );
    }

    #[test]
    fn test_api_error_from_parse_error() {
        let api_error = ApiError::from(ParseError::NotAnObject);

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api_error.message,
            "Email was not send, because of request body must be a JSON object"
        );
    }
}
