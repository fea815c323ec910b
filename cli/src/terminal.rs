//! Terminal adapters for the shared form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The CLI stands in for the browser page: field values come from command
//! arguments, message slots print to the terminal, the session record lives
//! in a JSON file, and "navigation" is a printed redirect.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use chat_login::net::api::{HttpReply, HttpTransport};
use chat_login::net::error::AuthError;
use chat_login::pages::login_controller::FormView;
use chat_login::state::forms::{ActiveView, Field, FormKind};
use chat_login::state::session::{KeyValueStore, Navigator, StorageError};
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

// =============================================================================
// HTTP
// =============================================================================

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AuthError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Key-value store persisted as one JSON object in a file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Map<String, Value> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            _ => {
                tracing::warn!(path = %self.path.display(), "state file is not a JSON object, ignoring");
                Map::new()
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().get(key).and_then(Value::as_str).map(ToOwned::to_owned)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.load();
        map.insert(key.to_owned(), Value::String(value.to_owned()));
        let raw = serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| StorageError::Encode(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        std::fs::write(&self.path, raw).map_err(|e| StorageError::Write(e.to_string()))
    }
}

// =============================================================================
// VIEW + NAVIGATION
// =============================================================================

/// Form "page" whose fields were filled from the command line.
#[derive(Default)]
pub struct TerminalView {
    fields: HashMap<Field, String>,
}

impl TerminalView {
    pub fn with_fields(fields: impl IntoIterator<Item = (Field, String)>) -> Self {
        Self { fields: fields.into_iter().collect() }
    }
}

impl FormView for TerminalView {
    fn show(&self, view: ActiveView) {
        tracing::debug!(?view, "switching form");
    }

    fn set_message(&self, form: FormKind, text: &str) {
        if !text.is_empty() {
            println!("[{}] {text}", form.form_id());
        }
    }

    fn field_value(&self, field: Field) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_submitting(&self, form: FormKind, submitting: bool) {
        tracing::debug!(form = form.form_id(), submitting, "submit state");
    }
}

/// Always "on" the login page; redirects are printed and remembered.
pub struct TerminalNavigator {
    login_page: String,
    redirected_to: RefCell<Option<String>>,
}

impl TerminalNavigator {
    pub fn new(login_page: &str) -> Self {
        Self { login_page: login_page.to_owned(), redirected_to: RefCell::new(None) }
    }

    pub fn redirected_to(&self) -> Option<String> {
        self.redirected_to.borrow().clone()
    }
}

impl Navigator for TerminalNavigator {
    fn current_path(&self) -> String {
        format!("/{}", self.login_page)
    }

    fn navigate(&self, target: &str) {
        println!("-> {target}");
        *self.redirected_to.borrow_mut() = Some(target.to_owned());
    }
}
