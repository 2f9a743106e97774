//! Wire payloads for the Resend API.

use serde::Serialize;

use crate::domain::ports::EmailMessage;

/// Body of `POST /emails`.
#[derive(Debug, Serialize)]
pub(super) struct SendEmailDto<'a> {
    pub from: &'a str,
    pub to: &'a [String],
    pub subject: &'a str,
    pub html: &'a str,
}

impl<'a> From<&'a EmailMessage> for SendEmailDto<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            from: message.sender.as_str(),
            to: message.recipients.as_slice(),
            subject: message.subject.as_str(),
            html: message.html_body.as_str(),
        }
    }
}
