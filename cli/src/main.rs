mod terminal;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::rc::Rc;

use chat_login::config::AppConfig;
use chat_login::net::api::AuthClient;
use chat_login::pages::login_controller::{FormController, SubmitOutcome};
use chat_login::state::forms::Field;
use chat_login::state::session::{AuthStatus, SessionStore};
use clap::{Parser, Subcommand};

use crate::terminal::{FileStore, ReqwestTransport, TerminalNavigator, TerminalView};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("network error: could not reach the server")]
    Network,
    #[error("unexpected response from the server")]
    Malformed,
    #[error("could not save session to {0}")]
    SessionNotSaved(PathBuf),
    #[error("request already in flight")]
    Busy,
}

#[derive(Parser, Debug)]
#[command(name = "chat-login-cli", about = "Register and log in to the chat backend")]
struct Cli {
    #[arg(long, env = "CHAT_API_BASE", default_value = "http://localhost:5000")]
    base_url: String,

    /// File holding the cached session record.
    #[arg(long, env = "CHAT_LOGIN_STATE", default_value = ".chat-login.json")]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CHAT_LOGIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in and cache the session record.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CHAT_LOGIN_PASSWORD", hide_env_values = true)]
        password: String,
        /// Log in even if a session is already cached.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Show the cached session, if any.
    Status,
}

type CliController = FormController<Rc<TerminalView>, ReqwestTransport, FileStore, Rc<TerminalNavigator>>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::with_api_base(Some(&cli.base_url));

    let fields = match &cli.command {
        Command::Register { username, email, password } => vec![
            (Field::RegisterUsername, username.clone()),
            (Field::RegisterEmail, email.clone()),
            (Field::RegisterPassword, password.clone()),
        ],
        Command::Login { email, password, .. } => vec![
            (Field::LoginEmail, email.clone()),
            (Field::LoginPassword, password.clone()),
        ],
        Command::Status => Vec::new(),
    };

    let view = Rc::new(TerminalView::with_fields(fields));
    let navigator = Rc::new(TerminalNavigator::new(&config.pages.login));
    let session = SessionStore::new(FileStore::new(cli.state_file.clone()), Rc::clone(&navigator), config.pages.clone());
    let controller: CliController =
        FormController::new(view, AuthClient::new(ReqwestTransport::new()?, &config), session);

    tracing::debug!(base_url = %config.api_base, state_file = %cli.state_file.display(), "starting");

    match cli.command {
        Command::Status => {
            print_status(&controller.session_status());
            Ok(())
        }
        Command::Register { .. } => {
            controller.activate_register_view();
            finish(controller.on_register_submit().await, &cli.state_file)
        }
        Command::Login { force, .. } => {
            if !force && controller.check_existing_session() {
                let target = navigator.redirected_to().unwrap_or_default();
                tracing::info!(%target, "session already cached; pass --force to log in again");
                return Ok(());
            }
            finish(controller.on_login_submit().await, &cli.state_file)
        }
    }
}

fn print_status(status: &AuthStatus) {
    println!("{}", status_line(status));
}

fn status_line(status: &AuthStatus) -> String {
    match status {
        AuthStatus::Authenticated(record) => {
            let role = if record.is_admin { "admin" } else { "user" };
            format!("logged in as {} ({role})", record.username)
        }
        AuthStatus::Anonymous => "not logged in".to_owned(),
    }
}

fn finish(outcome: SubmitOutcome, state_file: &std::path::Path) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Registered => Ok(()),
        SubmitOutcome::LoggedIn(record) => {
            tracing::info!(username = %record.username, is_admin = record.is_admin, state_file = %state_file.display(), "session cached");
            Ok(())
        }
        SubmitOutcome::Rejected(message) => Err(CliError::Rejected(message)),
        SubmitOutcome::NetworkError => Err(CliError::Network),
        SubmitOutcome::MalformedResponse => Err(CliError::Malformed),
        SubmitOutcome::SessionNotSaved => Err(CliError::SessionNotSaved(state_file.to_owned())),
        SubmitOutcome::Ignored => Err(CliError::Busy),
    }
}
