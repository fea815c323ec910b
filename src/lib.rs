//! # chat-login
//!
//! Register/login front end for the chat application: the auth REST client,
//! the cached session record, and the form controller tying them to a view.
//!
//! Built natively the crate is a plain library (used by the CLI and the unit
//! tests). With the `csr` feature it compiles to WASM and mounts the Leptos
//! login page.

pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::pages::login::LoginPage;
    use crate::state::session::SessionStore;
    use crate::util::browser::{BrowserNavigator, BrowserStorage};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::AppConfig::from_build_env();

    // Runs before anything is mounted so a cached user never sees the forms.
    let session = SessionStore::new(BrowserStorage, BrowserNavigator, config.pages.clone());
    if session.check_existing_session() {
        return;
    }

    leptos::mount::mount_to_body(move || view! { <LoginPage config/> });
}
