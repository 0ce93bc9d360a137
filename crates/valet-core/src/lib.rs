//! Business logic and repository trait definitions for Valet.
//!
//! This crate defines the "ports" (the conversation store and completion
//! provider traits) that the infrastructure layer implements. It depends
//! only on `valet-types` -- never on `valet-infra` or any database/IO crate.

pub mod chat;
pub mod llm;
pub mod memory;
