//! Driving port for the order-confirmation function.

use async_trait::async_trait;

use crate::domain::{ConfirmationReceipt, Error, OrderConfirmation};

/// Use-case for notifying a customer that their order was confirmed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderConfirmationCommand: Send + Sync {
    /// Render and deliver the confirmation e-mail.
    async fn confirm(&self, request: OrderConfirmation) -> Result<ConfirmationReceipt, Error>;
}
