//! Submit/toggle orchestration for the register + login forms.
//!
//! ARCHITECTURE
//! ============
//! The controller owns no UI and no globals: it drives a `FormView` adapter,
//! calls the `AuthClient`, and hands successful logins to the `SessionStore`.
//! The Leptos page and the CLI each supply their own adapters.
//!
//! Each form has an in-flight flag. A submit that arrives while the same
//! form is still waiting on the backend is dropped, and the view is asked to
//! disable that form's submit control for the duration.

#[cfg(test)]
#[path = "login_controller_test.rs"]
mod login_controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::net::api::{AuthClient, HttpTransport};
use crate::net::error::AuthError;
use crate::net::types::{LoginCredentials, LoginOutcome, RegisterCredentials, RegisterOutcome};
use crate::state::forms::{
    ActiveView, Field, FormKind, MALFORMED_RESPONSE_MESSAGE, NETWORK_ERROR_MESSAGE, REGISTER_SUCCESS_MESSAGE,
    SESSION_SAVE_FAILED_MESSAGE,
};
use crate::state::session::{AuthStatus, KeyValueStore, Navigator, SessionRecord, SessionStore};

/// UI surface the controller drives.
pub trait FormView {
    /// Switch the visible form (toggles the container's `active` class).
    fn show(&self, view: ActiveView);

    /// Replace the text of `form`'s message slot. Empty clears it.
    fn set_message(&self, form: FormKind, text: &str);

    fn field_value(&self, field: Field) -> String;

    /// Enable/disable `form`'s submit control.
    fn set_submitting(&self, form: FormKind, submitting: bool);
}

impl<V: FormView + ?Sized> FormView for Rc<V> {
    fn show(&self, view: ActiveView) {
        (**self).show(view);
    }

    fn set_message(&self, form: FormKind, text: &str) {
        (**self).set_message(form, text);
    }

    fn field_value(&self, field: Field) -> String {
        (**self).field_value(field)
    }

    fn set_submitting(&self, form: FormKind, submitting: bool) {
        (**self).set_submitting(form, submitting);
    }
}

/// What a submit handler ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Account created; the login view is now shown.
    Registered,
    /// Session cached and navigation to the chat page issued.
    LoggedIn(SessionRecord),
    /// Backend refused; carries the message displayed.
    Rejected(String),
    NetworkError,
    MalformedResponse,
    /// Login succeeded but the session record could not be stored.
    SessionNotSaved,
    /// Dropped because the same form already had a request in flight.
    Ignored,
}

pub struct FormController<V, T, S, N> {
    view: V,
    auth: AuthClient<T>,
    session: SessionStore<S, N>,
    register_in_flight: Cell<bool>,
    login_in_flight: Cell<bool>,
}

/// Clears a form's in-flight flag and re-enables its submit control on drop.
struct InFlight<'a, V: FormView> {
    flag: &'a Cell<bool>,
    view: &'a V,
    form: FormKind,
}

impl<V: FormView> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.view.set_submitting(self.form, false);
    }
}

impl<V, T, S, N> FormController<V, T, S, N>
where
    V: FormView,
    T: HttpTransport,
    S: KeyValueStore,
    N: Navigator,
{
    pub fn new(view: V, auth: AuthClient<T>, session: SessionStore<S, N>) -> Self {
        Self {
            view,
            auth,
            session,
            register_in_flight: Cell::new(false),
            login_in_flight: Cell::new(false),
        }
    }

    pub fn session_status(&self) -> AuthStatus {
        self.session.status()
    }

    /// Page-load redirect for visitors who are already logged in.
    pub fn check_existing_session(&self) -> bool {
        self.session.check_existing_session()
    }

    pub fn activate_register_view(&self) {
        self.view.show(ActiveView::Register);
        self.clear_message(FormKind::Login);
    }

    pub fn activate_login_view(&self) {
        self.view.show(ActiveView::Login);
        self.clear_message(FormKind::Register);
    }

    pub async fn on_register_submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = self.begin(FormKind::Register) else {
            return SubmitOutcome::Ignored;
        };
        self.clear_message(FormKind::Register);

        let creds = RegisterCredentials {
            username: self.view.field_value(Field::RegisterUsername),
            email: self.view.field_value(Field::RegisterEmail),
            password: self.view.field_value(Field::RegisterPassword),
        };

        match self.auth.register(&creds).await {
            Ok(RegisterOutcome::Registered) => {
                log::info!("registered {}", creds.username);
                self.view.set_message(FormKind::Register, REGISTER_SUCCESS_MESSAGE);
                self.view.show(ActiveView::Login);
                self.clear_message(FormKind::Login);
                SubmitOutcome::Registered
            }
            Ok(RegisterOutcome::Rejected { message }) => self.reject(FormKind::Register, message),
            Err(e) => self.fail(FormKind::Register, &e),
        }
    }

    pub async fn on_login_submit(&self) -> SubmitOutcome {
        let Some(_in_flight) = self.begin(FormKind::Login) else {
            return SubmitOutcome::Ignored;
        };
        self.clear_message(FormKind::Login);

        let creds = LoginCredentials {
            email: self.view.field_value(Field::LoginEmail),
            password: self.view.field_value(Field::LoginPassword),
        };

        match self.auth.login(&creds).await {
            Ok(LoginOutcome::Authenticated(record)) => match self.session.save(&record) {
                Ok(()) => SubmitOutcome::LoggedIn(record),
                Err(e) => {
                    log::error!("session save failed: {e}");
                    self.display_error(FormKind::Login, SESSION_SAVE_FAILED_MESSAGE);
                    SubmitOutcome::SessionNotSaved
                }
            },
            Ok(LoginOutcome::Rejected { message }) => self.reject(FormKind::Login, message),
            Err(e) => self.fail(FormKind::Login, &e),
        }
    }

    fn in_flight_flag(&self, form: FormKind) -> &Cell<bool> {
        match form {
            FormKind::Register => &self.register_in_flight,
            FormKind::Login => &self.login_in_flight,
        }
    }

    fn begin(&self, form: FormKind) -> Option<InFlight<'_, V>> {
        let flag = self.in_flight_flag(form);
        if flag.replace(true) {
            log::warn!("{} already submitting, ignoring", form.form_id());
            return None;
        }
        self.view.set_submitting(form, true);
        Some(InFlight { flag, view: &self.view, form })
    }

    fn clear_message(&self, form: FormKind) {
        self.view.set_message(form, "");
    }

    fn display_error(&self, form: FormKind, message: &str) {
        self.view.set_message(form, message);
        log::error!("{message}");
    }

    fn reject(&self, form: FormKind, message: Option<String>) -> SubmitOutcome {
        let text = message.unwrap_or_else(|| form.rejection_fallback().to_owned());
        self.display_error(form, &text);
        SubmitOutcome::Rejected(text)
    }

    fn fail(&self, form: FormKind, err: &AuthError) -> SubmitOutcome {
        log::error!("{} request failed: {err}", form.form_id());
        match err {
            AuthError::MalformedResponse { .. } => {
                self.display_error(form, MALFORMED_RESPONSE_MESSAGE);
                SubmitOutcome::MalformedResponse
            }
            AuthError::Transport(_) | AuthError::Encode(_) => {
                self.display_error(form, NETWORK_ERROR_MESSAGE);
                SubmitOutcome::NetworkError
            }
        }
    }
}
