//! Login and signup screens.

use hoodmap_core::models::{LoginRequest, SignupRequest};
use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::app::AppContext;
use crate::config::APP_NAME;
use crate::models::Route;
use crate::utils::notify;

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

/// Labeled text input bound to `value`.
#[component]
fn Field(
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <label class=css::field>
            <span>{label}</span>
            <input
                type=kind
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            notify::alert("Enter your email and password");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match ApiClient::new().login(&request).await {
                Ok(session) => ctx.sign_in(session),
                Err(err) => notify::action_failed("login", &err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::subtitle>"Find your neighborhood's favorite places"</p>
            <Field label="Email" kind="email" value=email autocomplete="email" />
            <Field label="Password" kind="password" value=password autocomplete="current-password" />
            <button class=css::primary type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Log in" }}
            </button>
            <a class=css::switch href=Route::Signup.to_hash()>"New here? Create an account"</a>
        </form>
    }
}

#[component]
pub fn Signup() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match SignupRequest::parse(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                notify::alert(message);
                return;
            }
        };
        set_busy.set(true);
        spawn_local(async move {
            match ApiClient::new().signup(&request).await {
                Ok(session) => ctx.sign_in(session),
                Err(err) => notify::action_failed("signup", &err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <h1 class=css::title>"Create account"</h1>
            <Field label="Email" kind="email" value=email autocomplete="email" />
            <Field label="Password" kind="password" value=password autocomplete="new-password" />
            <Field label="Confirm password" kind="password" value=confirm autocomplete="new-password" />
            <button class=css::primary type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating..." } else { "Sign up" }}
            </button>
            <a class=css::switch href=Route::Login.to_hash()>"Already have an account? Log in"</a>
        </form>
    }
}
