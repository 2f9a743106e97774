//! Driving port for the order-export function.

use async_trait::async_trait;

use crate::domain::{CallerAuthorization, Error, OrderExport, OrderId};

/// Use-case for exporting an order's line items as CSV.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderExportQuery: Send + Sync {
    /// Build the CSV export of `order_id` as seen by `authorization`.
    async fn export(
        &self,
        order_id: OrderId,
        authorization: CallerAuthorization,
    ) -> Result<OrderExport, Error>;
}
