//! Networking modules for the auth REST exchanges.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the register/login calls over an injected transport, `types`
//! defines the wire schema and its validation, and `browser` binds the
//! transport to `gloo-net` in the WASM build.

pub mod api;
#[cfg(feature = "csr")]
pub mod browser;
pub mod error;
pub mod types;
