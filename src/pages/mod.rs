//! Page modules for the auth screen.
//!
//! ARCHITECTURE
//! ============
//! `login_controller` owns the submit/toggle orchestration; `login_view`
//! adapts it to Leptos signals; `login` renders the page in the browser build.

#[cfg(feature = "csr")]
pub mod login;
pub mod login_controller;
pub mod login_view;
