//! Driven port for reading an order's line items from the data store.
//!
//! The store enforces row visibility itself. Callers pass the inbound
//! `Authorization` value through untouched so the store evaluates its access
//! policy against the caller, not against this service.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Amount, CallerAuthorization, OrderId};

/// Product fields joined onto a line item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductSummary {
    /// Product display name.
    pub name: Option<String>,
    /// Free-text product description.
    pub description: Option<String>,
}

/// One line item as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    /// Units ordered.
    pub quantity: Amount,
    /// Price per unit.
    pub unit_price: Amount,
    /// Joined product, `None` when the relation did not resolve.
    pub product: Option<ProductSummary>,
}

define_port_error! {
    /// Errors surfaced while querying line items.
    pub enum OrderLineItemsQueryError {
        /// The store could not be reached.
        Transport { message: String } =>
            "data store transport failed: {message}",
        /// The store rejected or failed the query.
        Query { message: String } =>
            "data store query failed: {message}",
        /// The store answered with a payload that does not match the row shape.
        Decode { message: String } =>
            "data store response decode failed: {message}",
    }
}

/// Port for fetching the line items of one order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderLineItemsQuery: Send + Sync {
    /// Fetch every line item of `order_id` visible to `authorization`.
    ///
    /// An empty result is not an error: the order may not exist, may belong
    /// to someone else, or may have no items.
    async fn line_items(
        &self,
        order_id: &OrderId,
        authorization: &CallerAuthorization,
    ) -> Result<Vec<OrderLineItem>, OrderLineItemsQueryError>;
}

/// Fixture implementation returning no rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureOrderLineItemsQuery;

#[async_trait]
impl OrderLineItemsQuery for FixtureOrderLineItemsQuery {
    async fn line_items(
        &self,
        _order_id: &OrderId,
        _authorization: &CallerAuthorization,
    ) -> Result<Vec<OrderLineItem>, OrderLineItemsQueryError> {
        Ok(Vec::new())
    }
}
