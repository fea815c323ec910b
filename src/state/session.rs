//! Cached login state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record written here is an unverified client-side convenience: its
//! presence alone marks the user as authenticated and only serves to skip the
//! login form. There is no expiry and no transition back to anonymous.
//!
//! `SessionStore::current_session` is the single read path; both the
//! page-load redirect and `status()` go through it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Pages;

/// Storage key holding the JSON-encoded `SessionRecord`.
pub const SESSION_KEY: &str = "currentUser";

/// Who is logged in on this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub username: String,
    pub is_admin: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Authenticated(SessionRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("could not encode session record: {0}")]
    Encode(String),
}

/// String key-value persistence (`localStorage` or equivalent).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Page location access (`window.location` or equivalent).
pub trait Navigator {
    /// Path of the page currently shown.
    fn current_path(&self) -> String;

    /// Leave the current page for `target`.
    fn navigate(&self, target: &str);
}

/// In-process store; backs tests and non-persistent embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<N: Navigator + ?Sized> Navigator for std::rc::Rc<N> {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&self, target: &str) {
        (**self).navigate(target);
    }
}

pub struct SessionStore<S, N> {
    storage: S,
    navigator: N,
    pages: Pages,
}

impl<S: KeyValueStore, N: Navigator> SessionStore<S, N> {
    pub fn new(storage: S, navigator: N, pages: Pages) -> Self {
        Self { storage, navigator, pages }
    }

    /// The cached record, if any. An undecodable record reads as absent.
    pub fn current_session(&self) -> Option<SessionRecord> {
        let raw = self.storage.get_item(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring unreadable {SESSION_KEY} record: {e}");
                None
            }
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.current_session()
            .map_or(AuthStatus::Anonymous, AuthStatus::Authenticated)
    }

    /// Cache `record` and leave for the chat page.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be written; no navigation happens then.
    pub fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set_item(SESSION_KEY, &raw)?;
        log::info!(
            "login successful for user: {}. Admin: {}",
            record.username,
            record.is_admin
        );
        self.navigator.navigate(&self.pages.chat);
        Ok(())
    }

    /// Page-load check: redirect an already-authenticated visitor off the
    /// login page. Returns `true` when a redirect was issued.
    pub fn check_existing_session(&self) -> bool {
        if !self.navigator.current_path().ends_with(&self.pages.login) {
            return false;
        }
        if self.current_session().is_none() {
            return false;
        }
        log::info!("user found in storage, redirecting to chat");
        self.navigator.navigate(&self.pages.chat);
        true
    }
}
