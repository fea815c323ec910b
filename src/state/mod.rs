//! Client-side state for the login page.
//!
//! DESIGN
//! ======
//! `session` owns the cached proof-of-login and the redirect rules around it;
//! `forms` holds the presentation vocabulary (views, fields, messages) shared
//! by the controller and its view adapters.

pub mod forms;
pub mod session;
