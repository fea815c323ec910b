//! In-memory fakes shared by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::net::api::{HttpReply, HttpTransport};
use crate::net::error::AuthError;
use crate::pages::login_controller::FormView;
use crate::state::forms::{ActiveView, Field, FormKind};
use crate::state::session::{KeyValueStore, Navigator, StorageError};

// =============================================================
// Transport
// =============================================================

/// Replays scripted replies and records every request it receives.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpReply, AuthError>>>>,
    requests: Rc<RefCell<Vec<(String, serde_json::Value)>>>,
    suspend: bool,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push_reply(status, body);
        transport
    }

    pub fn unreachable() -> Self {
        let transport = Self::default();
        transport
            .replies
            .borrow_mut()
            .push_back(Err(AuthError::Transport("connection refused".to_owned())));
        transport
    }

    /// Yield to the executor once before answering. Replies are still
    /// matched to requests in arrival order.
    pub fn suspending(mut self) -> Self {
        self.suspend = true;
        self
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply { status, body: body.to_owned() }));
    }

    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for FakeTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, AuthError> {
        let value = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
        self.requests.borrow_mut().push((url.to_owned(), value));
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Transport("no scripted reply".to_owned())));
        if self.suspend {
            tokio::task::yield_now().await;
        }
        reply
    }
}

// =============================================================
// Storage + navigation
// =============================================================

/// Store whose writes always fail.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

pub struct RecordingNavigator {
    path: String,
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: path.to_owned(), visits: RefCell::new(Vec::new()) }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, target: &str) {
        self.visits.borrow_mut().push(target.to_owned());
    }
}

// =============================================================
// View
// =============================================================

#[derive(Default)]
pub struct RecordingView {
    active: RefCell<ActiveView>,
    messages: RefCell<HashMap<FormKind, String>>,
    fields: RefCell<HashMap<Field, String>>,
    submitting: RefCell<Vec<(FormKind, bool)>>,
}

impl RecordingView {
    pub fn with_fields(fields: &[(Field, &str)]) -> Self {
        let view = Self::default();
        for (field, value) in fields {
            view.fields.borrow_mut().insert(*field, (*value).to_owned());
        }
        view
    }

    pub fn active(&self) -> ActiveView {
        *self.active.borrow()
    }

    pub fn message(&self, form: FormKind) -> String {
        self.messages.borrow().get(&form).cloned().unwrap_or_default()
    }

    pub fn submitting_history(&self) -> Vec<(FormKind, bool)> {
        self.submitting.borrow().clone()
    }
}

impl FormView for RecordingView {
    fn show(&self, view: ActiveView) {
        *self.active.borrow_mut() = view;
    }

    fn set_message(&self, form: FormKind, text: &str) {
        self.messages.borrow_mut().insert(form, text.to_owned());
    }

    fn field_value(&self, field: Field) -> String {
        self.fields.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn set_submitting(&self, form: FormKind, submitting: bool) {
        self.submitting.borrow_mut().push((form, submitting));
    }
}
