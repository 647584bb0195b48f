//! Onboarding flow.
//!
//! Welcome → neighborhood → interests → nickname, then a verification sheet
//! confirming the neighborhood before the answers are submitted.

use hoodmap_core::onboarding::{MAX_INTERESTS, OnboardingFlow, OnboardingStep};
use hoodmap_core::sheet::SheetLayout;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sheet::{DraggableSheet, use_sheet};
use crate::config::sheet::VERIFY_KEY;
use crate::config::{INTERESTS, NEIGHBORHOODS};
use crate::models::Route;
use crate::utils::notify;

stylance::import_crate_style!(css, "src/components/onboarding/onboarding.module.css");

#[component]
pub fn Onboarding() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let flow = RwSignal::new(OnboardingFlow::new());
    let step = Memo::new(move |_| flow.with(|f| f.step()));
    let (submitting, set_submitting) = signal(false);

    let advance = move || {
        if let Some(Err(err)) = flow.try_update(|f| f.advance()) {
            notify::alert(err.message());
        }
    };

    let submit = move || {
        let Some(submission) = flow.with_untracked(|f| f.submission()) else {
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match ApiClient::new().submit_onboarding(&submission).await {
                Ok(profile) => {
                    ctx.profile.set(Some(profile));
                    ctx.session.update(|s| {
                        if let Some(session) = s {
                            session.onboarded = true;
                        }
                    });
                    Route::Home.replace();
                }
                Err(err) => ctx.handle_error("onboarding", &err, true),
            }
            set_submitting.set(false);
        });
    };

    // The verification sheet is open on the last step; dismissing it steps back.
    let verifying = Signal::derive(move || step.get() == OnboardingStep::Verification);
    let on_dismiss = Callback::new(move |()| {
        flow.update(|f| {
            f.back();
        });
    });

    let progress = move || {
        let index = step.get().index();
        format!("width: {}%;", (index + 1) * 100 / OnboardingStep::ALL.len())
    };

    view! {
        <div class=css::onboarding>
            <div class=css::progress><div class=css::progressBar style=progress></div></div>

            <Show when=move || { step.get().index() > 0 }>
                <button class=css::back on:click=move |_| { flow.update(|f| { f.back(); }); }>
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
            </Show>

            <section class=css::step>
                {move || match step.get() {
                    OnboardingStep::Welcome => view! { <Welcome /> }.into_any(),
                    OnboardingStep::Neighborhood => view! { <NeighborhoodStep flow=flow /> }.into_any(),
                    OnboardingStep::Interests => view! { <InterestsStep flow=flow /> }.into_any(),
                    OnboardingStep::Nickname | OnboardingStep::Verification => {
                        view! { <NicknameStep flow=flow /> }.into_any()
                    }
                }}
            </section>

            <Show when=move || !verifying.get()>
                <button class=css::next on:click=move |_| advance()>
                    {move || match step.get() {
                        OnboardingStep::Welcome => "Get started",
                        OnboardingStep::Nickname => "Almost done",
                        _ => "Next",
                    }}
                </button>
            </Show>

            <DraggableSheet
                open=verifying
                layout=SheetLayout::Binary
                history_key=VERIFY_KEY
                on_close=on_dismiss
                label="Confirm neighborhood"
            >
                <VerifySheet flow=flow submitting=submitting on_submit=Callback::new(move |()| submit()) />
            </DraggableSheet>
        </div>
    }
}

#[component]
fn Welcome() -> impl IntoView {
    view! {
        <h1>"Welcome to hoodmap"</h1>
        <p>"Discover places your neighbors love, earn XP by visiting them and level up."</p>
    }
}

#[component]
fn NeighborhoodStep(flow: RwSignal<OnboardingFlow>) -> impl IntoView {
    let selected = move |name: &str| flow.with(|f| f.neighborhood.as_deref() == Some(name));

    view! {
        <h1>"Where do you live?"</h1>
        <div class=css::options>
            {NEIGHBORHOODS
                .iter()
                .map(|&name| view! {
                    <button
                        class=move || if selected(name) {
                            format!("{} {}", css::option, css::optionSelected)
                        } else {
                            css::option.to_string()
                        }
                        on:click=move |_| flow.update(|f| f.neighborhood = Some(name.to_string()))
                    >
                        {name}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn InterestsStep(flow: RwSignal<OnboardingFlow>) -> impl IntoView {
    let selected = move |code: &str| flow.with(|f| f.interests.iter().any(|i| i == code));
    let count = move || flow.with(|f| f.interests.len());

    view! {
        <h1>"What are you into?"</h1>
        <p class=css::hint>{move || format!("{} of up to {MAX_INTERESTS} selected", count())}</p>
        <div class=css::options>
            {INTERESTS
                .iter()
                .map(|&(code, label)| view! {
                    <button
                        class=move || if selected(code) {
                            format!("{} {}", css::option, css::optionSelected)
                        } else {
                            css::option.to_string()
                        }
                        on:click=move |_| {
                            if let Some(Err(err)) = flow.try_update(|f| f.toggle_interest(code)) {
                                notify::alert(err.message());
                            }
                        }
                    >
                        {label}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn NicknameStep(flow: RwSignal<OnboardingFlow>) -> impl IntoView {
    view! {
        <h1>"What should we call you?"</h1>
        <input
            class=css::input
            maxlength="16"
            placeholder="Nickname"
            prop:value=move || flow.with(|f| f.nickname.clone())
            on:input=move |ev| flow.update(|f| f.nickname = event_target_value(&ev))
        />
    }
}

/// Contents of the verification sheet.
#[component]
fn VerifySheet(
    flow: RwSignal<OnboardingFlow>,
    submitting: ReadSignal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let sheet = use_sheet();
    let neighborhood = move || flow.with(|f| f.neighborhood.clone().unwrap_or_default());
    let verified = move || flow.with(|f| f.verified);

    view! {
        <h2>"Is this your neighborhood?"</h2>
        <p class=css::verifyPlace>
            <Icon icon=ic::LOCATION />
            <span>{neighborhood}</span>
        </p>
        <label class=css::confirm>
            <input
                type="checkbox"
                prop:checked=verified
                on:change=move |ev| flow.update(|f| f.verified = event_target_checked(&ev))
            />
            <span>"I live or spend most of my time here"</span>
        </label>
        <button
            class=css::next
            disabled=move || !verified() || submitting.get()
            on:click=move |_| on_submit.run(())
        >
            {move || if submitting.get() { "Saving..." } else { "Start exploring" }}
        </button>
        <button
            class=css::secondary
            on:click=move |_| {
                if let Some(sheet) = sheet {
                    sheet.close_all();
                }
            }
        >
            "Change answers"
        </button>
    }
}
