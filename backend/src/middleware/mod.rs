//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by both functions.

pub mod trace;

pub use trace::Trace;
