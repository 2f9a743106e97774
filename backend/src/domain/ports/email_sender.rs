//! Driven port for handing transactional e-mail to the e-mail provider.

use async_trait::async_trait;

use super::define_port_error;

/// Message submitted to the e-mail provider.
///
/// Built once per confirmation request and discarded after the send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// `From` address, display name included.
    pub sender: String,
    /// Ordered recipient list.
    pub recipients: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Rendered HTML body.
    pub html_body: String,
}

define_port_error! {
    /// Errors surfaced while calling the e-mail provider.
    pub enum EmailSenderError {
        /// The request never produced a response (DNS, TLS, connection reset).
        Transport { message: String } =>
            "email provider transport failed: {message}",
        /// The provider answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "email provider rejected message with status {status}: {message}",
    }
}

/// Port for delivering one e-mail message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Submit `message` to the provider. A single attempt is made.
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailSenderError>;
}

/// Fixture implementation that accepts every message without sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEmailSender;

#[async_trait]
impl EmailSender for FixtureEmailSender {
    async fn send(&self, _message: &EmailMessage) -> Result<(), EmailSenderError> {
        Ok(())
    }
}
