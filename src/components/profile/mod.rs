//! Profile screen.
//!
//! The profile header sits behind a binary sheet. The "Activity" and
//! "Edit" tabs drive the sheet: editing expands it, activity collapses it.
//! Dragging the sheet down while editing switches back to activity.

use hoodmap_core::level::LevelTable;
use hoodmap_core::models::{Profile, ProfileUpdate};
use hoodmap_core::sheet::{SheetLayout, ViewState};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sheet::DraggableSheet;
use crate::config::sheet::PROFILE_KEY;
use crate::config::{INTERESTS, NEIGHBORHOODS};
use crate::utils::notify;

stylance::import_crate_style!(css, "src/components/profile/profile.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Activity,
    Edit,
}

impl Tab {
    fn sheet_state(self) -> ViewState {
        match self {
            Self::Activity => ViewState::Compact,
            Self::Edit => ViewState::Expanded,
        }
    }
}

fn interest_label(code: &str) -> &str {
    INTERESTS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |&(_, label)| label)
}

#[component]
pub fn ProfileScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tab = RwSignal::new(Tab::Activity);
    let sheet_state = RwSignal::new(ViewState::Closed);

    // Tabs drive the sheet.
    Effect::new(move |_| {
        let target = tab.get().sheet_state();
        if sheet_state.get_untracked().is_open() && sheet_state.get_untracked() != target {
            sheet_state.set(target);
        }
    });
    // Collapsing by hand leaves the edit tab.
    Effect::new(move |_| {
        if sheet_state.get() == ViewState::Compact && tab.get_untracked() == Tab::Edit {
            tab.set(Tab::Activity);
        }
    });

    let logout = move |_| {
        spawn_local(async move {
            if let Err(err) = ApiClient::new().logout().await {
                notify::load_failed("logout", &err);
            }
            ctx.sign_out();
        });
    };

    view! {
        <div class=css::profile>
            {move || match ctx.profile.get() {
                Some(profile) => view! { <ProfileHeader profile=profile /> }.into_any(),
                None => view! { <p class=css::muted>"Loading profile..."</p> }.into_any(),
            }}

            <DraggableSheet
                open=Signal::derive(move || ctx.profile.with(Option::is_some))
                layout=SheetLayout::Binary
                history_key=PROFILE_KEY
                view_state=sheet_state
                dismissible=false
                label="Profile"
                header=ViewFn::from(move || view! { <Tabs tab=tab /> })
            >
                {move || match tab.get() {
                    Tab::Activity => view! { <Activity /> }.into_any(),
                    Tab::Edit => view! { <EditForm on_saved=Callback::new(move |()| tab.set(Tab::Activity)) /> }.into_any(),
                }}
                <button class=css::logout on:click=logout>
                    <Icon icon=ic::LOGOUT />
                    " Log out"
                </button>
            </DraggableSheet>
        </div>
    }
}

#[component]
fn ProfileHeader(profile: Profile) -> impl IntoView {
    let progress = LevelTable::default().progress(profile.total_xp);

    view! {
        <header class=css::header>
            {profile.avatar_url.map(|src| view! { <img class=css::avatar src=src alt="" /> })}
            <h1>{profile.nickname}</h1>
            {profile.neighborhood.map(|n| view! {
                <p class=css::neighborhood><Icon icon=ic::LOCATION />{format!(" {n}")}</p>
            })}
            <p class=css::level>{format!("Lv. {} · {} XP", progress.level, progress.total_xp)}</p>
            <div class=css::stats>
                <span><strong>{profile.review_count}</strong>" reviews"</span>
                <span><strong>{profile.favorite_count}</strong>" saved"</span>
            </div>
        </header>
    }
}

#[component]
fn Tabs(tab: RwSignal<Tab>) -> impl IntoView {
    let tab_button = move |value: Tab, label: &'static str| {
        view! {
            <button
                role="tab"
                class=move || if tab.get() == value {
                    format!("{} {}", css::tab, css::tabActive)
                } else {
                    css::tab.to_string()
                }
                aria-selected=move || (tab.get() == value).to_string()
                on:pointerdown=|ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    tab.set(value);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class=css::tabs role="tablist">
            {tab_button(Tab::Activity, "Activity")}
            {tab_button(Tab::Edit, "Edit")}
        </div>
    }
}

#[component]
fn Activity() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let interests = move || {
        ctx.profile
            .with(|p| p.as_ref().map(|p| p.interests.clone()))
            .unwrap_or_default()
    };

    view! {
        <h3>"Interests"</h3>
        <div class=css::interests>
            {move || interests()
                .into_iter()
                .map(|code| view! { <span class=css::interest>{interest_label(&code).to_string()}</span> })
                .collect_view()}
        </div>
    }
}

#[component]
fn EditForm(on_saved: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let current = ctx.profile.get_untracked();
    let nickname = RwSignal::new(current.as_ref().map(|p| p.nickname.clone()).unwrap_or_default());
    let neighborhood = RwSignal::new(
        current
            .as_ref()
            .and_then(|p| p.neighborhood.clone())
            .unwrap_or_default(),
    );
    let (saving, set_saving) = signal(false);

    let save = move || {
        let Some(current) = ctx.profile.get_untracked() else {
            return;
        };
        let update = match ProfileUpdate::parse(
            &current,
            &nickname.get_untracked(),
            &neighborhood.get_untracked(),
        ) {
            Ok(update) => update,
            Err(message) => {
                notify::alert(message);
                return;
            }
        };
        if update.is_empty() {
            on_saved.run(());
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            match ApiClient::new().update_profile(&update).await {
                Ok(profile) => {
                    ctx.profile.set(Some(profile));
                    on_saved.run(());
                }
                Err(err) => ctx.handle_error("profile", &err, true),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form
            class=css::form
            on:submit=move |ev| {
                ev.prevent_default();
                save();
            }
        >
            <label>
                "Nickname"
                <input
                    maxlength="16"
                    prop:value=move || nickname.get()
                    on:input=move |ev| nickname.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Neighborhood"
                <select on:change=move |ev| neighborhood.set(event_target_value(&ev))>
                    {NEIGHBORHOODS
                        .iter()
                        .map(|&name| view! {
                            <option value=name selected=move || neighborhood.get() == name>{name}</option>
                        })
                        .collect_view()}
                </select>
            </label>
            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_map_to_sheet_states() {
        assert_eq!(Tab::Activity.sheet_state(), ViewState::Compact);
        assert_eq!(Tab::Edit.sheet_state(), ViewState::Expanded);
    }

    #[test]
    fn test_interest_label_falls_back_to_code() {
        let (code, label) = INTERESTS[0];
        assert_eq!(interest_label(code), label);
        assert_eq!(interest_label("unknown"), "unknown");
    }
}
