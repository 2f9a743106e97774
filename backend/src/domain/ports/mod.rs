//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`OrderConfirmationCommand`, `OrderExportQuery`) are what
//! the HTTP handlers call. Driven ports (`EmailSender`,
//! `OrderLineItemsQuery`) are what the outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod email_sender;
mod order_confirmation_command;
mod order_export_query;
mod order_line_items_query;

#[cfg(test)]
pub use email_sender::MockEmailSender;
pub use email_sender::{EmailMessage, EmailSender, EmailSenderError, FixtureEmailSender};
#[cfg(test)]
pub use order_confirmation_command::MockOrderConfirmationCommand;
pub use order_confirmation_command::OrderConfirmationCommand;
#[cfg(test)]
pub use order_export_query::MockOrderExportQuery;
pub use order_export_query::OrderExportQuery;
#[cfg(test)]
pub use order_line_items_query::MockOrderLineItemsQuery;
pub use order_line_items_query::{
    FixtureOrderLineItemsQuery, OrderLineItem, OrderLineItemsQuery, OrderLineItemsQueryError,
    ProductSummary,
};
