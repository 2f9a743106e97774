//! Supabase (PostgREST) data-store adapter.
//!
//! Implements the `OrderLineItemsQuery` port with one REST read per export.
//! Row visibility is enforced by the store's row-level policies, evaluated
//! against the caller's forwarded credentials.

mod dto;
mod http_query;

pub use http_query::{SupabaseClientError, SupabaseLineItemsQuery};
