//! Mission lists.

use hoodmap_core::level::LevelTable;
use hoodmap_core::models::{
    Mission, MissionAction, MissionId, MissionKind, MissionStatus, replace_mission,
    sort_for_display,
};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::css;
use crate::api::ApiClient;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::notify;

/// Load state of a list.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Load {
    Loading,
    Ready,
    Failed,
}

#[component]
pub fn MissionList(kind: MissionKind, title: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let missions = RwSignal::new(Vec::<Mission>::new());
    let (load, set_load) = signal(Load::Loading);
    let busy = RwSignal::new(None::<MissionId>);

    let fetch = move || {
        set_load.set(Load::Loading);
        spawn_local(async move {
            match ApiClient::new().missions(kind).await {
                Ok(mut list) => {
                    sort_for_display(&mut list);
                    missions.set(list);
                    set_load.set(Load::Ready);
                }
                Err(err) => {
                    ctx.handle_error(kind.as_str(), &err, false);
                    set_load.set(Load::Failed);
                }
            }
        });
    };
    fetch();

    let act = move |mission: Mission| {
        let action = mission.next_action();
        if action == MissionAction::None || busy.get_untracked().is_some() {
            return;
        }
        busy.set(Some(mission.id));
        spawn_local(async move {
            let api = ApiClient::new();
            match action {
                MissionAction::Start => match api.start_mission(mission.id).await {
                    Ok(updated) => missions.update(|list| {
                        replace_mission(list, updated);
                    }),
                    Err(err) => ctx.handle_error("mission", &err, true),
                },
                MissionAction::Complete => {
                    let before = ctx.profile.with_untracked(|p| p.as_ref().map(|p| p.total_xp));
                    match api.complete_mission(mission.id).await {
                        Ok(done) => {
                            let table = LevelTable::default();
                            let leveled = before
                                .is_some_and(|xp| table.progress(xp).levels_up_with(&table, done.xp_awarded));
                            ctx.profile.update(|p| {
                                if let Some(p) = p {
                                    p.total_xp = done.total_xp;
                                }
                            });
                            missions.update(|list| {
                                replace_mission(list, done.mission);
                                sort_for_display(list);
                            });
                            if leveled {
                                notify::alert(&format!(
                                    "Level up! You are now level {}",
                                    table.progress(done.total_xp).level
                                ));
                            }
                            ctx.refresh_profile();
                        }
                        Err(err) => ctx.handle_error("mission", &err, true),
                    }
                }
                MissionAction::None => {}
            }
            busy.set(None);
        });
    };

    view! {
        <section class=css::missions>
            <h2>{title}</h2>
            {move || match load.get() {
                Load::Loading => view! { <p class=css::muted>"Loading missions..."</p> }.into_any(),
                Load::Failed => view! {
                    <button class=css::retry on:click=move |_| fetch()>
                        <Icon icon=ic::RETRY />
                        " Couldn't load missions. Retry"
                    </button>
                }.into_any(),
                Load::Ready if missions.with(|m| m.is_empty()) => {
                    view! { <p class=css::muted>"No missions right now"</p> }.into_any()
                }
                Load::Ready => view! {
                    <ul class=css::missionList>
                        <For
                            each=move || missions.get()
                            key=|m| (m.id, m.status)
                            children=move |mission| view! {
                                <MissionRow mission=mission busy=busy on_act=Callback::new(act) />
                            }
                        />
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn MissionRow(
    mission: Mission,
    busy: RwSignal<Option<MissionId>>,
    on_act: Callback<Mission>,
) -> impl IntoView {
    let id = mission.id;
    let done = mission.status == MissionStatus::Completed;
    let label = match mission.next_action() {
        MissionAction::Start => "Start",
        MissionAction::Complete => "Complete",
        MissionAction::None => "Done",
    };
    let row = mission.clone();

    view! {
        <li class=if done { format!("{} {}", css::mission, css::missionDone) } else { css::mission.to_string() }>
            <div class=css::missionText>
                <strong>{mission.title}</strong>
                <span class=css::muted>{mission.description}</span>
            </div>
            <span class=css::reward>{format!("+{} XP", mission.xp_reward)}</span>
            <button
                class=css::missionAction
                disabled=move || done || busy.get() == Some(id)
                on:click=move |_| on_act.run(row.clone())
            >
                {if done { view! { <Icon icon=ic::CHECK /> }.into_any() } else { view! { <span>{label}</span> }.into_any() }}
            </button>
        </li>
    }
}
