//! Browser environment bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates `web-sys` glue so the controller and session logic stay testable
//! off the browser.

#[cfg(feature = "csr")]
pub mod browser;
