//! Outbound adapters implementing domain ports over HTTP.
//!
//! - **resend**: e-mail provider client implementing `EmailSender`
//! - **supabase**: PostgREST client implementing `OrderLineItemsQuery`
//!
//! Adapters translate between domain types and provider payloads. They
//! contain no business logic.

mod http_body;
pub mod resend;
pub mod supabase;
