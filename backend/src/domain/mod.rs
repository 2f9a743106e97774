//! Domain primitives, services and driven ports.
//!
//! Purpose: hold the transport-agnostic parts of both functions. Inbound
//! adapters build the typed requests defined here; outbound adapters
//! implement the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: typed failure carried to the HTTP boundary.
//! - OrderId, CustomerEmail: validated request values.
//! - OrderConfirmation, OrderConfirmationService: e-mail notification.
//! - OrderExport, OrderExportService, CsvDocument: CSV export.

mod amount;
mod csv_document;
pub mod error;
mod order_confirmation;
mod order_export;
mod order_id;
pub mod ports;
mod trace_id;

pub use self::amount::Amount;
pub use self::csv_document::{CsvDocument, EXPORT_HEADER, EmptyExportError, ExportRow};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::order_confirmation::{
    ConfirmationReceipt, CustomerEmail, CustomerEmailValidationError, OrderConfirmation,
    OrderConfirmationService, confirmation_subject, render_confirmation_html,
};
pub use self::order_export::{CallerAuthorization, OrderExport, OrderExportService};
pub use self::order_id::{OrderId, OrderIdValidationError};
pub use self::trace_id::TraceId;
