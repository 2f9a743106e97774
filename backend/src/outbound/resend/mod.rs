//! Resend e-mail provider adapter.
//!
//! Thin HTTP implementation of the `EmailSender` port against the Resend
//! `POST /emails` endpoint.

mod dto;
mod http_sender;

pub use http_sender::ResendEmailSender;
