//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{MockEmailSender, MockOrderLineItemsQuery};
use crate::domain::{OrderConfirmationService, OrderExportService};
use crate::inbound::http::state::HttpState;

pub const SENDER: &str = "Loja <nao-responda@sua-loja.com>";

/// Build handler state around the real services and mocked driven ports.
///
/// Mocks without expectations panic when called, so passing
/// `MockEmailSender::new()` asserts that no e-mail is sent.
pub fn state_with(sender: MockEmailSender, line_items: MockOrderLineItemsQuery) -> HttpState {
    HttpState::new(
        Arc::new(OrderConfirmationService::new(Arc::new(sender), SENDER)),
        Arc::new(OrderExportService::new(Arc::new(line_items))),
    )
}
