//! Favorite group picker.
//!
//! Binary sheet stacked over the place sheet. Lists the user's groups with
//! a checkbox per group for the current place, and lets the user create,
//! rename and delete groups.

use hoodmap_core::models::{FavoriteGroup, GroupId, NewFavoriteGroup, PlaceId};
use hoodmap_core::sheet::SheetLayout;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::css;
use crate::api::ApiClient;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sheet::DraggableSheet;
use crate::config::sheet::GROUPS_KEY;
use crate::utils::notify;

/// Ids of the groups holding `place`.
fn groups_with(groups: &[FavoriteGroup], place: PlaceId) -> Vec<GroupId> {
    groups
        .iter()
        .filter(|g| g.contains(place))
        .map(|g| g.id)
        .collect()
}

#[component]
pub fn GroupSheet(
    place: Signal<Option<PlaceId>>,
    open: RwSignal<bool>,
    on_changed: Callback<Vec<GroupId>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let groups = RwSignal::new(Vec::<FavoriteGroup>::new());
    let (loading, set_loading) = signal(false);
    let editing = RwSignal::new(None::<GroupId>);

    Effect::new(move |_| {
        if !open.get() {
            editing.set(None);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match ApiClient::new().favorite_groups().await {
                Ok(list) => groups.set(list),
                Err(err) => ctx.handle_error("favorites", &err, false),
            }
            set_loading.set(false);
        });
    });

    let publish = move || {
        if let Some(place) = place.get_untracked() {
            on_changed.run(groups.with_untracked(|g| groups_with(g, place)));
        }
    };

    let toggle = move |group: GroupId, member: bool| {
        let Some(place) = place.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let api = ApiClient::new();
            let result = if member {
                api.remove_from_group(group, place).await
            } else {
                api.add_to_group(group, place).await
            };
            match result {
                Ok(()) => {
                    groups.update(|list| {
                        if let Some(g) = list.iter_mut().find(|g| g.id == group) {
                            if member {
                                g.place_ids.retain(|&p| p != place);
                            } else {
                                g.place_ids.push(place);
                            }
                        }
                    });
                    publish();
                }
                Err(err) => ctx.handle_error("favorites", &err, true),
            }
        });
    };

    let remove = move |group: GroupId, name: String| {
        if !notify::confirm(&format!("Delete \"{name}\"?")) {
            return;
        }
        spawn_local(async move {
            match ApiClient::new().delete_group(group).await {
                Ok(()) => {
                    groups.update(|list| list.retain(|g| g.id != group));
                    publish();
                }
                Err(err) => ctx.handle_error("favorites", &err, true),
            }
        });
    };

    let rename = move |group: GroupId, name: String| {
        let update = match NewFavoriteGroup::parse(&name, None) {
            Ok(update) => update,
            Err(message) => {
                notify::alert(message);
                return;
            }
        };
        spawn_local(async move {
            match ApiClient::new().rename_group(group, &update).await {
                Ok(renamed) => {
                    groups.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|g| g.id == renamed.id) {
                            *slot = renamed;
                        }
                    });
                    editing.set(None);
                }
                Err(err) => ctx.handle_error("favorites", &err, true),
            }
        });
    };

    view! {
        <DraggableSheet
            open=open
            layout=SheetLayout::Binary
            history_key=GROUPS_KEY
            on_close=Callback::new(move |()| open.set(false))
            label="Save to group"
            header=ViewFn::from(|| view! { <h2 class=css::sheetTitle>"Save to group"</h2> })
        >
            <Show when=move || loading.get()>
                <p class=css::muted>"Loading groups..."</p>
            </Show>
            <ul class=css::groupList>
                <For
                    each=move || groups.get()
                    key=|g| (g.id, g.name.clone(), g.place_ids.len())
                    children=move |group| {
                        let id = group.id;
                        let member = place.get_untracked().is_some_and(|p| group.contains(p));
                        let label = group.name.clone();
                        let initial = group.name.clone();
                        let name = group.name;
                        view! {
                            <li class=css::group>
                                <Show
                                    when=move || editing.get() == Some(id)
                                    fallback=move || view! {
                                        <label class=css::groupLabel>
                                            <input
                                                type="checkbox"
                                                prop:checked=member
                                                on:change=move |_| toggle(id, member)
                                            />
                                            <span>{label.clone()}</span>
                                        </label>
                                    }
                                >
                                    <RenameField
                                        initial=initial.clone()
                                        on_submit=Callback::new(move |n| rename(id, n))
                                    />
                                </Show>
                                <button
                                    class=css::iconButton
                                    aria-label="Rename"
                                    on:click=move |_| editing.set(Some(id))
                                >
                                    <Icon icon=ic::EDIT />
                                </button>
                                <button
                                    class=css::iconButton
                                    aria-label="Delete"
                                    on:click=move |_| remove(id, name.clone())
                                >
                                    <Icon icon=ic::TRASH />
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <NewGroupForm groups=groups />
        </DraggableSheet>
    }
}

#[component]
fn RenameField(initial: String, on_submit: Callback<String>) -> impl IntoView {
    let value = RwSignal::new(initial);

    view! {
        <form
            class=css::inlineForm
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(value.get_untracked());
            }
        >
            <input
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button type="submit" aria-label="Save"><Icon icon=ic::CHECK /></button>
        </form>
    }
}

#[component]
fn NewGroupForm(groups: RwSignal<Vec<FavoriteGroup>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let name = RwSignal::new(String::new());

    let create = move || {
        let group = match NewFavoriteGroup::parse(&name.get_untracked(), None) {
            Ok(group) => group,
            Err(message) => {
                notify::alert(message);
                return;
            }
        };
        spawn_local(async move {
            match ApiClient::new().create_group(&group).await {
                Ok(created) => {
                    groups.update(|list| list.push(created));
                    name.set(String::new());
                }
                Err(err) => ctx.handle_error("favorites", &err, true),
            }
        });
    };

    view! {
        <form
            class=css::inlineForm
            on:submit=move |ev| {
                ev.prevent_default();
                create();
            }
        >
            <input
                placeholder="New group"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <button type="submit" aria-label="Create group"><Icon icon=ic::PLUS /></button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: GroupId, places: &[PlaceId]) -> FavoriteGroup {
        FavoriteGroup {
            id,
            name: format!("group {id}"),
            color: None,
            place_ids: places.to_vec(),
        }
    }

    #[test]
    fn test_groups_with_place() {
        let groups = vec![group(1, &[10, 11]), group(2, &[]), group(3, &[11])];
        assert_eq!(groups_with(&groups, 11), vec![1, 3]);
        assert!(groups_with(&groups, 99).is_empty());
    }
}
