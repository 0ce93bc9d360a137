//! Shared domain types for Valet.
//!
//! This crate contains the core domain types used across the Valet backend:
//! stored messages, completion request/response shapes, configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, secrecy.

pub mod config;
pub mod error;
pub mod llm;
pub mod message;
