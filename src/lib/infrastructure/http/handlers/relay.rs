//! Mail relay handler

use axum::extract::{Request, State};
use tracing::warn;

use crate::{
    domain::mail::MailService,
    infrastructure::http::{errors::ApiError, extract, state::AppState},
};

/// Relays a request on the configured endpoint as one email.
///
/// The method is not checked. Any other path is answered with
/// `400 Bad endpoint request` without reading the request.
pub async fn handler<S: MailService>(
    State(state): State<AppState<S>>,
    request: Request,
) -> Result<&'static str, ApiError> {
    if request.uri().path() != &*state.endpoint_path {
        warn!(path = request.uri().path(), "request to unknown endpoint");

        return Err(ApiError::bad_endpoint());
    }

    let fields = extract::email_request(request, state.body_limit).await?;

    state.mail.send_mail(&fields).await?;

    Ok("OK")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use axum::{
        body::Bytes,
        http::{Method, StatusCode},
    };
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::mail::{
            errors::{DispatchError, MailerError},
            tests::{test_sender_config, MockMailService, MockMailer},
            EmailRequest, FieldNames, MailServiceImpl,
        },
        infrastructure::http::{
            router,
            state::{test_state, AppState},
        },
    };

    #[tokio::test]
    async fn test_wrong_path_is_rejected_without_sending() -> TestResult {
        let mut mail = MockMailService::new();
        mail.expect_send_mail().never();

        let response = TestServer::new(router(test_state(Some(mail))))?
            .get("/wrong-path")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Bad endpoint request");

        Ok(())
    }

    #[tokio::test]
    async fn test_path_must_match_exactly() -> TestResult {
        let mut mail = MockMailService::new();
        mail.expect_send_mail().never();

        let server = TestServer::new(router(test_state(Some(mail))))?;

        for path in ["/send/", "/send/extra", "/SEND", "/"] {
            let response = server.post(path).json(&json!({ "subject": "Hi" })).await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{path}");
            assert_eq!(response.text(), "Bad endpoint request", "{path}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_sent_email_answers_ok() -> TestResult {
        let mut mail = MockMailService::new();

        mail.expect_send_mail()
            .withf(|request: &EmailRequest| {
                request.get("subject") == Some("Hi") && request.get("body") == Some("Hello")
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(mail))))?
            .post("/send")
            .json(&json!({ "subject": "Hi", "body": "Hello" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "OK");
        assert_eq!(
            response.header("content-type"),
            "text/plain; charset=utf-8"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_method_is_not_checked() -> TestResult {
        let mut mail = MockMailService::new();
        mail.expect_send_mail().times(2).returning(|_| Ok(()));

        let server = TestServer::new(router(test_state(Some(mail))))?;

        let get = server
            .get("/send")
            .add_query_param("subject", "Hi")
            .await;
        let put = server
            .method(Method::PUT, "/send")
            .json(&json!({ "body": "Hello" }))
            .await;

        assert_eq!(get.text(), "OK");
        assert_eq!(put.text(), "OK");

        Ok(())
    }

    #[tokio::test]
    async fn test_dispatch_error_answers_bad_request() -> TestResult {
        let mut mail = MockMailService::new();

        mail.expect_send_mail()
            .times(1)
            .returning(|_| Err(DispatchError::InsufficientData));

        let response = TestServer::new(router(test_state(Some(mail))))?
            .post("/send")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text(),
            "Email was not send, because of There is not appropriate data for email sending"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_parse_error_answers_bad_request_without_sending() -> TestResult {
        let mut mail = MockMailService::new();
        mail.expect_send_mail().never();

        let response = TestServer::new(router(test_state(Some(mail))))?
            .post("/send")
            .bytes(Bytes::from_static(b"{\"subject\":"))
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(response
            .text()
            .starts_with("Email was not send, because of request body is not valid JSON"));

        Ok(())
    }

    fn bridge(mailer: MockMailer) -> AppState<MailServiceImpl<MockMailer>> {
        let mail = MailServiceImpl::new(
            Arc::new(test_sender_config()),
            FieldNames::default(),
            Arc::new(mailer),
        );

        AppState::new("/send", 1024, mail)
    }

    #[tokio::test]
    async fn test_request_reaches_transport_once() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .withf(|_, message| {
                message.from.as_str() == "bridge@example.com"
                    && message.to.as_str() == "inbox@example.com"
                    && message.subject == "Hi"
                    && message.text == "Hello"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let response = TestServer::new(router(bridge(mailer)))?
            .post("/send")
            .bytes(Bytes::from_static(b"subject=Hi&body=Hello"))
            .content_type("application/x-www-form-urlencoded")
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "OK");

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_body_never_reaches_transport() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let response = TestServer::new(router(bridge(mailer)))?
            .post("/send")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text(),
            "Email was not send, because of There is not appropriate data for email sending"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_valued_fields_never_reach_transport() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let response = TestServer::new(router(bridge(mailer)))?
            .post("/send")
            .json(&json!({ "subject": 0, "body": "" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text(),
            "Email was not send, because of There is not appropriate data for email sending"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_transport_error_is_reported_verbatim() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_, _| {
                Err(MailerError::from(anyhow!(
                    "535 5.7.8 Username and Password not accepted"
                )))
            });

        let response = TestServer::new(router(bridge(mailer)))?
            .post("/send")
            .json(&json!({ "subject": "Hi" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text(),
            "Email was not send, because of 535 5.7.8 Username and Password not accepted"
        );

        Ok(())
    }
}
