//! Register/login page with the sliding two-form container.

use std::rc::Rc;

use leptos::prelude::*;

use super::login_controller::FormController;
use super::login_view::SignalFormView;
use crate::config::AppConfig;
use crate::net::api::AuthClient;
use crate::net::browser::FetchTransport;
use crate::state::forms::{Field, FormKind};
use crate::state::session::SessionStore;
use crate::util::browser::{BrowserNavigator, BrowserStorage};

type PageController = FormController<SignalFormView, FetchTransport, BrowserStorage, BrowserNavigator>;

/// Text input bound to one controller field.
#[component]
fn FieldInput(view: SignalFormView, field: Field, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    let value = view.field(field);
    view! {
        <div class="input-box">
            <input
                id=field.element_id()
                type=kind
                placeholder=placeholder
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn LoginPage(config: AppConfig) -> impl IntoView {
    let view = SignalFormView::new();
    let session = SessionStore::new(BrowserStorage, BrowserNavigator, config.pages.clone());
    let controller: Rc<PageController> =
        Rc::new(FormController::new(view, AuthClient::new(FetchTransport, &config), session));
    let controller = StoredValue::new_local(controller);

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            let _ = controller.on_register_submit().await;
        });
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            let _ = controller.on_login_submit().await;
        });
    };

    let register_message = view.message(FormKind::Register);
    let login_message = view.message(FormKind::Login);

    view! {
        <div class="container" class:active=move || view.active.get().container_active()>
            <div class="form-box login">
                <form id=FormKind::Login.form_id() on:submit=on_login>
                    <h1>"Login"</h1>
                    <FieldInput view field=Field::LoginEmail kind="email" placeholder="Email"/>
                    <FieldInput view field=Field::LoginPassword kind="password" placeholder="Password"/>
                    <p id=FormKind::Login.message_id() class="error-message">{move || login_message.get()}</p>
                    <button type="submit" class="btn" disabled=move || view.login_busy.get()>"Login"</button>
                </form>
            </div>
            <div class="form-box register">
                <form id=FormKind::Register.form_id() on:submit=on_register>
                    <h1>"Registration"</h1>
                    <FieldInput view field=Field::RegisterUsername kind="text" placeholder="Username"/>
                    <FieldInput view field=Field::RegisterEmail kind="email" placeholder="Email"/>
                    <FieldInput view field=Field::RegisterPassword kind="password" placeholder="Password"/>
                    <p id=FormKind::Register.message_id() class="error-message">
                        {move || register_message.get()}
                    </p>
                    <button type="submit" class="btn" disabled=move || view.register_busy.get()>"Register"</button>
                </form>
            </div>
            <div class="toggle-box">
                <div class="toggle-panel toggle-left">
                    <h1>"Hello, Welcome!"</h1>
                    <p>"Don't have an account?"</p>
                    <button
                        class="btn register-btn"
                        on:click=move |_| controller.with_value(|c| c.activate_register_view())
                    >
                        "Register"
                    </button>
                </div>
                <div class="toggle-panel toggle-right">
                    <h1>"Welcome Back!"</h1>
                    <p>"Already have an account?"</p>
                    <button
                        class="btn login-btn"
                        on:click=move |_| controller.with_value(|c| c.activate_login_view())
                    >
                        "Login"
                    </button>
                </div>
            </div>
        </div>
    }
}
