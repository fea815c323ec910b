//! Presentation vocabulary for the register/login page.
//!
//! Element ids and user-facing strings live here so the controller, the
//! Leptos page and the terminal front end agree on them.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Please log in.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed.";
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Could not reach the server.";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Unexpected response from the server.";
pub const SESSION_SAVE_FAILED_MESSAGE: &str = "Could not save your login on this device.";

/// Which form is currently visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    Register,
    #[default]
    Login,
}

impl ActiveView {
    /// Whether the shared container carries the `active` class.
    pub fn container_active(self) -> bool {
        self == Self::Register
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Register,
    Login,
}

impl FormKind {
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Register => "register-form",
            Self::Login => "login-form",
        }
    }

    /// Id of the element showing this form's error/status line.
    pub fn message_id(self) -> &'static str {
        match self {
            Self::Register => "register-error-message",
            Self::Login => "login-error-message",
        }
    }

    /// Shown when the backend rejects without saying why.
    pub fn rejection_fallback(self) -> &'static str {
        match self {
            Self::Register => REGISTER_FAILED_MESSAGE,
            Self::Login => LOGIN_FAILED_MESSAGE,
        }
    }
}

/// Input fields read at submit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    RegisterUsername,
    RegisterEmail,
    RegisterPassword,
    LoginEmail,
    LoginPassword,
}

impl Field {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::RegisterUsername => "register-username",
            Self::RegisterEmail => "register-email",
            Self::RegisterPassword => "register-password",
            Self::LoginEmail => "login-email",
            Self::LoginPassword => "login-password",
        }
    }
}
