//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! session bootstrap.

use hoodmap_core::ApiError;
use hoodmap_core::models::{Profile, Session};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::AppRouter;
use crate::models::Route;
use crate::utils::notify;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in session, `None` when signed out.
    pub session: RwSignal<Option<Session>>,
    /// Profile of the signed-in user, once loaded.
    pub profile: RwSignal<Option<Profile>>,
    /// Current route, kept in sync with the URL hash by the router.
    pub route: RwSignal<Route>,
    /// Set once the initial session lookup has finished.
    pub ready: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            profile: RwSignal::new(None),
            route: RwSignal::new(Route::current()),
            ready: RwSignal::new(false),
        }
    }

    /// Store a fresh session and load its profile.
    pub fn sign_in(&self, session: Session) {
        let onboarded = session.onboarded;
        self.session.set(Some(session));
        if onboarded {
            self.refresh_profile();
            Route::Home.replace();
        } else {
            Route::Onboarding.replace();
        }
    }

    /// Forget the session locally. The server side is handled by the caller.
    pub fn sign_out(&self) {
        self.session.set(None);
        self.profile.set(None);
        Route::Login.replace();
    }

    /// Reload the profile in the background.
    pub fn refresh_profile(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ApiClient::new().profile().await {
                Ok(profile) => ctx.profile.set(Some(profile)),
                Err(err) => ctx.handle_error("profile", &err, false),
            }
        });
    }

    /// Common handling for API failures.
    ///
    /// An expired session signs the user out. Otherwise the error is
    /// logged, and alerted when `user_action` is set.
    pub fn handle_error(&self, area: &str, err: &ApiError, user_action: bool) {
        if *err == ApiError::Unauthorized {
            notify::warn(area, "session expired");
            self.sign_out();
        } else if user_action {
            notify::action_failed(area, err);
        } else {
            notify::load_failed(area, err);
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up the session cookie once at startup.
fn bootstrap(ctx: AppContext) {
    spawn_local(async move {
        match ApiClient::new().session().await {
            Ok(session) => {
                if session.onboarded {
                    ctx.refresh_profile();
                }
                ctx.session.set(Some(session));
            }
            Err(ApiError::Unauthorized) => {}
            Err(err) => notify::load_failed("session", &err),
        }
        ctx.ready.set(true);
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the session lookup
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    bootstrap(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    text-align: center;
                ">
                    <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                    <p style="color: #777; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <details style="text-align: left; margin-bottom: 1rem;">
                        <summary style="cursor: pointer;">"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
