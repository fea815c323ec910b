//! Signal-backed `FormView` for the Leptos page.

#[cfg(test)]
#[path = "login_view_test.rs"]
mod login_view_test;

use leptos::prelude::*;

use super::login_controller::FormView;
use crate::state::forms::{ActiveView, Field, FormKind};

/// Reactive state behind the register/login markup. `Copy`, so event
/// closures can capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct SignalFormView {
    pub active: RwSignal<ActiveView>,
    pub register_message: RwSignal<String>,
    pub login_message: RwSignal<String>,
    pub register_busy: RwSignal<bool>,
    pub login_busy: RwSignal<bool>,
    pub register_username: RwSignal<String>,
    pub register_email: RwSignal<String>,
    pub register_password: RwSignal<String>,
    pub login_email: RwSignal<String>,
    pub login_password: RwSignal<String>,
}

impl Default for SignalFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalFormView {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ActiveView::default()),
            register_message: RwSignal::new(String::new()),
            login_message: RwSignal::new(String::new()),
            register_busy: RwSignal::new(false),
            login_busy: RwSignal::new(false),
            register_username: RwSignal::new(String::new()),
            register_email: RwSignal::new(String::new()),
            register_password: RwSignal::new(String::new()),
            login_email: RwSignal::new(String::new()),
            login_password: RwSignal::new(String::new()),
        }
    }

    pub fn field(&self, field: Field) -> RwSignal<String> {
        match field {
            Field::RegisterUsername => self.register_username,
            Field::RegisterEmail => self.register_email,
            Field::RegisterPassword => self.register_password,
            Field::LoginEmail => self.login_email,
            Field::LoginPassword => self.login_password,
        }
    }

    pub fn message(&self, form: FormKind) -> RwSignal<String> {
        match form {
            FormKind::Register => self.register_message,
            FormKind::Login => self.login_message,
        }
    }

    pub fn busy(&self, form: FormKind) -> RwSignal<bool> {
        match form {
            FormKind::Register => self.register_busy,
            FormKind::Login => self.login_busy,
        }
    }
}

impl FormView for SignalFormView {
    fn show(&self, view: ActiveView) {
        self.active.set(view);
    }

    fn set_message(&self, form: FormKind, text: &str) {
        self.message(form).set(text.to_owned());
    }

    fn field_value(&self, field: Field) -> String {
        self.field(field).get_untracked()
    }

    fn set_submitting(&self, form: FormKind, submitting: bool) {
        self.busy(form).set(submitting);
    }
}
