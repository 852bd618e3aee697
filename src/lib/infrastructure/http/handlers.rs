//! API handler modules

use std::any::Any;

use axum::{body::Body, http::Response, response::IntoResponse};
use tracing::error;

use super::errors::ApiError;

pub mod relay;

/// Catch panics and return a plain-text 500 error
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    error!("handler panicked: {details}");

    ApiError::new_500(&details).into_response()
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use axum::{body::to_bytes, http::StatusCode};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_panic_handler() -> TestResult {
        let panic_info = simulate_panic();
        let response = panic_handler(panic_info);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, "Something went wrong");

        Ok(())
    }

    fn simulate_panic() -> Box<dyn std::any::Any + Send + 'static> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            panic!("Something went wrong");
        }));

        if let Err(err) = result {
            err
        } else {
            panic!("The panic did not occur as expected");
        }
    }
}
