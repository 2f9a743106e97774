//! Order-confirmation e-mail.
//!
//! A single linear path: render the fixed template, build the message, hand
//! it to the [`EmailSender`] once. Customer-supplied text is interpolated
//! verbatim into both the subject and the HTML body.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::ports::{EmailMessage, EmailSender, EmailSenderError, OrderConfirmationCommand};
use super::{Error, OrderId};

/// Message returned to the caller once the provider accepted the e-mail.
const CONFIRMATION_SENT_MESSAGE: &str = "E-mail de confirmação enviado.";
/// Message returned when the provider answered with a non-success status.
const DELIVERY_FAILED_MESSAGE: &str = "Falha ao enviar e-mail de confirmação.";

/// Validation errors returned by [`CustomerEmail::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CustomerEmailValidationError {
    /// The address was blank.
    #[error("customer e-mail must not be empty")]
    Empty,
    /// The address does not have a `local@domain` shape.
    #[error("customer e-mail must look like local@domain")]
    Malformed,
}

/// Recipient address of the confirmation e-mail.
///
/// Only the `local@domain` shape is checked; deliverability is the
/// provider's call.
///
/// # Examples
/// ```
/// use order_functions::domain::CustomerEmail;
///
/// assert!(CustomerEmail::new("ana@example.com").is_ok());
/// assert!(CustomerEmail::new("ana.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Validate and wrap an address. The shape is checked on the trimmed
    /// text; the value is stored exactly as supplied.
    ///
    /// # Errors
    /// Returns [`CustomerEmailValidationError`] for blank or malformed input.
    pub fn new(raw: impl Into<String>) -> Result<Self, CustomerEmailValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CustomerEmailValidationError::Empty);
        }
        let well_formed = trimmed.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        });
        if !well_formed {
            return Err(CustomerEmailValidationError::Malformed);
        }
        Ok(Self(raw))
    }

    /// Borrow the address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated confirmation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Sole recipient of the e-mail.
    pub customer_email: CustomerEmail,
    /// Name used in the greeting.
    pub customer_name: String,
    /// Order referenced in the subject and body.
    pub order_id: OrderId,
}

/// Outcome of a successful confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationReceipt {
    order_id: OrderId,
}

impl ConfirmationReceipt {
    /// Order the e-mail was sent for.
    #[must_use]
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Caller-facing confirmation text.
    #[must_use]
    pub fn message(&self) -> &'static str {
        CONFIRMATION_SENT_MESSAGE
    }
}

/// Subject line for the confirmation e-mail of `order_id`.
#[must_use]
pub fn confirmation_subject(order_id: &OrderId) -> String {
    format!("Confirmação do Pedido #{order_id}")
}

/// Render the fixed HTML confirmation body.
///
/// # Examples
/// ```
/// use order_functions::domain::{OrderId, render_confirmation_html};
///
/// let html = render_confirmation_html("Ana", &OrderId::new("42").expect("id"));
/// assert!(html.contains("<h1>Olá, Ana!</h1>"));
/// assert!(html.contains("Seu pedido #42 foi confirmado com sucesso."));
/// ```
#[must_use]
pub fn render_confirmation_html(customer_name: &str, order_id: &OrderId) -> String {
    [
        format!("<h1>Olá, {customer_name}!</h1>"),
        format!("<p>Seu pedido #{order_id} foi confirmado com sucesso.</p>"),
        "<p>Obrigado por comprar conosco!</p>".to_owned(),
    ]
    .join("\n")
}

impl OrderConfirmation {
    /// Build the e-mail for this confirmation, sent from `sender`.
    #[must_use]
    pub fn to_email(&self, sender: &str) -> EmailMessage {
        EmailMessage {
            sender: sender.to_owned(),
            recipients: vec![self.customer_email.as_str().to_owned()],
            subject: confirmation_subject(&self.order_id),
            html_body: render_confirmation_html(&self.customer_name, &self.order_id),
        }
    }
}

/// Confirmation service implementing [`OrderConfirmationCommand`].
pub struct OrderConfirmationService<S: ?Sized> {
    sender: Arc<S>,
    from_address: String,
}

impl<S: ?Sized> OrderConfirmationService<S> {
    /// Create a service delivering through `sender` with a fixed `From`.
    pub fn new(sender: Arc<S>, from_address: impl Into<String>) -> Self {
        Self {
            sender,
            from_address: from_address.into(),
        }
    }
}

fn map_sender_error(order_id: &OrderId, err: EmailSenderError) -> Error {
    match err {
        EmailSenderError::Rejected { status, message } => {
            error!(order_id = %order_id, status, provider_message = %message, "email provider rejected confirmation");
            Error::email_delivery_failed(DELIVERY_FAILED_MESSAGE)
        }
        EmailSenderError::Transport { message } => {
            error!(order_id = %order_id, error = %message, "email provider unreachable");
            Error::email_delivery_failed(format!("{DELIVERY_FAILED_MESSAGE} {message}"))
        }
    }
}

#[async_trait]
impl<S> OrderConfirmationCommand for OrderConfirmationService<S>
where
    S: EmailSender + ?Sized,
{
    async fn confirm(&self, request: OrderConfirmation) -> Result<ConfirmationReceipt, Error> {
        let message = request.to_email(&self.from_address);
        self.sender
            .send(&message)
            .await
            .map_err(|err| map_sender_error(&request.order_id, err))?;
        info!(order_id = %request.order_id, "confirmation email sent");
        Ok(ConfirmationReceipt {
            order_id: request.order_id,
        })
    }
}

#[cfg(test)]
#[path = "order_confirmation_tests.rs"]
mod tests;
