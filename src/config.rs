//! Backend and page locations for the login flow.
//!
//! The browser build bakes the backend base URL in at compile time
//! (`CHAT_API_BASE`); the CLI passes it on the command line.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_LOGIN_PAGE: &str = "login.html";
pub const DEFAULT_CHAT_PAGE: &str = "chatindex.html";

/// Relative page locations used for redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages {
    /// The page hosting the register/login forms.
    pub login: String,
    /// Landing page after a successful login.
    pub chat: String,
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_PAGE.to_owned(),
            chat: DEFAULT_CHAT_PAGE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub pages: Pages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            pages: Pages::default(),
        }
    }
}

impl AppConfig {
    /// Config with the given backend base URL; blank values fall back to the default.
    pub fn with_api_base(raw: Option<&str>) -> Self {
        Self {
            api_base: resolve_api_base(raw),
            pages: Pages::default(),
        }
    }

    /// Config from the `CHAT_API_BASE` value captured at compile time, if any.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("CHAT_API_BASE"))
    }

    /// Absolute URL for a backend route such as `/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn resolve_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}
