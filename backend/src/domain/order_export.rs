//! Order line-item CSV export.
//!
//! The service queries the store once, refuses empty results before any CSV
//! work, flattens each row and computes its subtotal. Access control is the
//! store's job; this module only forwards the caller's credentials.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::ports::{OrderExportQuery, OrderLineItem, OrderLineItemsQuery, OrderLineItemsQueryError};
use super::{CsvDocument, Error, ExportRow, OrderId};

/// Message returned when the order has no visible line items.
const NOT_FOUND_MESSAGE: &str = "Pedido não encontrado ou sem itens.";

/// Inbound `Authorization` header value, forwarded to the data store as-is.
///
/// `Debug` is redacted so the credential never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct CallerAuthorization(String);

impl CallerAuthorization {
    /// Wrap a header value. Returns `None` when it is blank.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        (!raw.trim().is_empty()).then_some(Self(raw))
    }

    /// Header value to forward.
    #[must_use]
    pub fn as_header_value(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for CallerAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallerAuthorization(<redacted>)")
    }
}

/// A finished export, ready to be served as a download.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderExport {
    order_id: OrderId,
    document: CsvDocument,
}

impl OrderExport {
    /// Order this export belongs to.
    #[must_use]
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// The CSV document.
    #[must_use]
    pub fn document(&self) -> &CsvDocument {
        &self.document
    }

    /// Download file name: `pedido_<orderId>.csv`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("pedido_{}.csv", self.order_id)
    }
}

/// Export service implementing [`OrderExportQuery`].
pub struct OrderExportService<Q: ?Sized> {
    line_items: Arc<Q>,
}

impl<Q: ?Sized> OrderExportService<Q> {
    /// Create a service reading through `line_items`.
    pub fn new(line_items: Arc<Q>) -> Self {
        Self { line_items }
    }
}

fn map_query_error(err: OrderLineItemsQueryError) -> Error {
    warn!(error = %err, "line item query failed");
    Error::upstream_query(err.to_string())
}

/// Flatten one stored line item into an export row.
///
/// A row whose product relation did not resolve, or whose subtotal is not a
/// finite number, is reported instead of guessed at.
fn to_export_row(index: usize, item: OrderLineItem) -> Result<ExportRow, Error> {
    let OrderLineItem {
        quantity,
        unit_price,
        product,
    } = item;
    let product = product.ok_or_else(|| {
        Error::upstream_query(format!("line item {index} has no product"))
    })?;
    let subtotal = quantity.checked_mul(&unit_price).ok_or_else(|| {
        Error::upstream_query(format!("line item {index} subtotal is not a finite number"))
    })?;
    Ok(ExportRow {
        product_name: product.name,
        product_description: product.description,
        quantity,
        unit_price,
        subtotal,
    })
}

#[async_trait]
impl<Q> OrderExportQuery for OrderExportService<Q>
where
    Q: OrderLineItemsQuery + ?Sized,
{
    async fn export(
        &self,
        order_id: OrderId,
        authorization: CallerAuthorization,
    ) -> Result<OrderExport, Error> {
        let items = self
            .line_items
            .line_items(&order_id, &authorization)
            .await
            .map_err(map_query_error)?;
        if items.is_empty() {
            info!(order_id = %order_id, "no visible line items");
            return Err(Error::not_found(NOT_FOUND_MESSAGE));
        }

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| to_export_row(index, item))
            .collect::<Result<Vec<_>, _>>()?;
        let document = CsvDocument::try_from_rows(rows)
            .map_err(|_| Error::not_found(NOT_FOUND_MESSAGE))?;
        info!(order_id = %order_id, rows = document.rows().len(), "order exported");
        Ok(OrderExport { order_id, document })
    }
}

#[cfg(test)]
#[path = "order_export_tests.rs"]
mod tests;
