//! Reqwest-backed Resend sender.
//!
//! Owns transport details only: bearer authentication, request serialisation
//! and HTTP error mapping. One attempt per message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::SendEmailDto;
use crate::domain::ports::{EmailMessage, EmailSender, EmailSenderError};
use crate::outbound::http_body::error_message;

/// E-mail sender posting to one Resend endpoint.
pub struct ResendEmailSender {
    client: Client,
    endpoint: Url,
    api_key: Zeroizing<String>,
}

impl ResendEmailSender {
    /// Build a sender. `timeout` bounds each request; `None` leaves it
    /// unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: Zeroizing<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailSenderError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SendEmailDto::from(message))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        debug!(status = status.as_u16(), "email provider accepted message");
        Ok(())
    }
}

fn map_transport_error(error: reqwest::Error) -> EmailSenderError {
    EmailSenderError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmailSenderError {
    EmailSenderError::rejected(status.as_u16(), error_message(status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network Resend mapping helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, br#"{"statusCode":401,"message":"Missing API key"}"#.as_slice(), "Missing API key")]
    #[case(StatusCode::UNPROCESSABLE_ENTITY, br#"{"message":"Invalid `to` field."}"#.as_slice(), "Invalid `to` field.")]
    #[case(StatusCode::BAD_GATEWAY, b"".as_slice(), "status 502")]
    fn non_success_statuses_are_rejections(
        #[case] status: StatusCode,
        #[case] body: &[u8],
        #[case] expected_message: &str,
    ) {
        match map_status_error(status, body) {
            EmailSenderError::Rejected {
                status: code,
                message,
            } => {
                assert_eq!(code, status.as_u16());
                assert_eq!(message, expected_message);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn builds_without_timeout() {
        let endpoint = Url::parse("https://api.resend.com/emails").expect("valid url");
        let sender = ResendEmailSender::new(endpoint, Zeroizing::new("re_test".to_owned()), None);
        assert!(sender.is_ok());
    }
}
