//! Application router component.
//!
//! Hash-based routing driven by native `hashchange` events.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `AppContext::route` is derived from `#/path`
//! - **Session gates routes**: signed-out users land on login, users who
//!   have not finished onboarding land on onboarding
//! - **Tab bar**: shown on the four main screens only

use leptos::prelude::*;
use leptos_icons::Icon;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::auth::{Login, Signup};
use crate::components::feed::Feed;
use crate::components::home::Home;
use crate::components::icons as ic;
use crate::components::map::MapScreen;
use crate::components::onboarding::Onboarding;
use crate::components::profile::ProfileScreen;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Where a route should redirect given the session, if anywhere.
fn redirect_for(route: Route, signed_in: bool, onboarded: bool) -> Option<Route> {
    match (signed_in, onboarded) {
        (false, _) if !route.is_public() => Some(Route::Login),
        (true, false) if route != Route::Onboarding => Some(Route::Onboarding),
        (true, true) if route.is_public() || route == Route::Onboarding => Some(Route::Home),
        _ => None,
    }
}

/// Main application router.
///
/// - `#/` → Home (levels and missions)
/// - `#/map` → Map with the place sheet
/// - `#/feed` → Recommendation feed
/// - `#/profile` → Profile sheet
/// - `#/onboarding`, `#/login`, `#/signup` → entry flows
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Gate routes on the session once it is known.
    Effect::new(move |_| {
        if !ctx.ready.get() {
            return;
        }
        let session = ctx.session.get();
        let signed_in = session.is_some();
        let onboarded = session.is_some_and(|s| s.onboarded);
        if let Some(target) = redirect_for(route.get(), signed_in, onboarded) {
            target.replace();
        }
    });

    view! {
        <Show
            when=move || ctx.ready.get()
            fallback=|| view! { <div class=css::splash>"hoodmap"</div> }
        >
            <main class=css::screen>
                {move || match route.get() {
                    Route::Home => view! { <Home /> }.into_any(),
                    Route::Map => view! { <MapScreen /> }.into_any(),
                    Route::Feed => view! { <Feed /> }.into_any(),
                    Route::Profile => view! { <ProfileScreen /> }.into_any(),
                    Route::Onboarding => view! { <Onboarding /> }.into_any(),
                    Route::Login => view! { <Login /> }.into_any(),
                    Route::Signup => view! { <Signup /> }.into_any(),
                }}
            </main>
            <Show when=move || route.get().shows_tabs()>
                <TabBar route=route />
            </Show>
        </Show>
    }
}

/// Bottom tab bar.
#[component]
fn TabBar(route: RwSignal<Route>) -> impl IntoView {
    let icon_for = |tab: Route| match tab {
        Route::Map => ic::MAP,
        Route::Feed => ic::FEED,
        Route::Profile => ic::USER,
        _ => ic::HOME,
    };

    view! {
        <nav class=css::tabBar>
            {Route::TABS
                .into_iter()
                .map(|tab| {
                    view! {
                        <a
                            href=tab.to_hash()
                            class=move || {
                                if route.get() == tab {
                                    format!("{} {}", css::tab, css::tabActive)
                                } else {
                                    css::tab.to_string()
                                }
                            }
                            aria-current=move || (route.get() == tab).then_some("page")
                        >
                            <Icon icon=icon_for(tab) />
                            <span>{tab.label()}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_goes_to_login() {
        assert_eq!(redirect_for(Route::Map, false, false), Some(Route::Login));
        assert_eq!(redirect_for(Route::Signup, false, false), None);
    }

    #[test]
    fn test_onboarding_required() {
        assert_eq!(redirect_for(Route::Feed, true, false), Some(Route::Onboarding));
        assert_eq!(redirect_for(Route::Onboarding, true, false), None);
    }

    #[test]
    fn test_onboarded_user_leaves_entry_flows() {
        assert_eq!(redirect_for(Route::Login, true, true), Some(Route::Home));
        assert_eq!(redirect_for(Route::Onboarding, true, true), Some(Route::Home));
        assert_eq!(redirect_for(Route::Profile, true, true), None);
    }
}
