//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OrderConfirmationCommand, OrderExportQuery};

/// Dependency bundle for the function handlers.
#[derive(Clone)]
pub struct HttpState {
    pub confirmation: Arc<dyn OrderConfirmationCommand>,
    pub export: Arc<dyn OrderExportQuery>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use order_functions::domain::ports::{FixtureEmailSender, FixtureOrderLineItemsQuery};
    /// use order_functions::domain::{OrderConfirmationService, OrderExportService};
    /// use order_functions::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(OrderConfirmationService::new(
    ///         Arc::new(FixtureEmailSender),
    ///         "Loja <nao-responda@sua-loja.com>",
    ///     )),
    ///     Arc::new(OrderExportService::new(Arc::new(FixtureOrderLineItemsQuery))),
    /// );
    /// let _export = state.export.clone();
    /// ```
    pub fn new(
        confirmation: Arc<dyn OrderConfirmationCommand>,
        export: Arc<dyn OrderExportQuery>,
    ) -> Self {
        Self {
            confirmation,
            export,
        }
    }
}
