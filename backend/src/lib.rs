//! Order notification and export functions.
//!
//! Two independent HTTP-triggered handlers for the storefront backend:
//!
//! - order confirmation: renders a fixed HTML e-mail and hands it to the
//!   e-mail provider;
//! - order export: reads an order's line items from the data store and
//!   returns them as a CSV download.
//!
//! The crate follows a hexagonal layout. [`domain`] owns the request types,
//! services and driven ports; [`inbound`] adapts HTTP requests onto the
//! domain; [`outbound`] implements the ports against the e-mail provider and
//! the data store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
