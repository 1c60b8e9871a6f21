//! Infrastructure Services
//!
//! This module provides the infrastructure the billing screens call into:
//!
//! - **client**: GraphQL client for the billing API and the tax rate gateway
//! - **config**: Application configuration with local storage overrides
//! - **i18n**: Translation lookup for user-facing copy
//!
//! The services are designed to be WASM-first, using async traits without
//! Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
pub mod i18n;
