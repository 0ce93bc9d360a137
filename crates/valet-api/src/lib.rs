//! HTTP application layer for Valet.
//!
//! Exposes the router and application state so integration tests can drive
//! the full request path; the `valet` binary in `main.rs` is a thin shell
//! over these.

pub mod http;
pub mod state;
