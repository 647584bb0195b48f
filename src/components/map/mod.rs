//! Map screen.
//!
//! A lazily loaded map with a search box, category chips and a result
//! list. Selecting a place (marker or list row) opens the place sheet.

mod groups;
mod place;

use hoodmap_core::models::{LatLng, PlaceId, PlaceQuery, PlaceSummary};
use hoodmap_core::request::RequestTracker;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::map_sdk::DEFAULT_CENTER;
use crate::utils::map_sdk::{self, MapSdkError, MapView};
use crate::utils::notify;

use place::PlaceSheet;

stylance::import_crate_style!(css, "src/components/map/map.module.css");

/// Map SDK state.
#[derive(Clone, PartialEq)]
enum MapStatus {
    Loading,
    Ready,
    Failed(MapSdkError),
}

#[component]
pub fn MapScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let container = NodeRef::<Div>::new();
    let map: StoredValue<Option<MapView>, LocalStorage> = StoredValue::new_local(None);
    let (status, set_status) = signal(MapStatus::Loading);

    let text = RwSignal::new(String::new());
    let category = RwSignal::new(None::<String>);
    let results = RwSignal::new(Vec::<PlaceSummary>::new());
    let (searching, set_searching) = signal(false);
    let searches = StoredValue::new(RequestTracker::new());
    let selected = RwSignal::new(None::<PlaceId>);

    let categories = LocalResource::new(|| async { ApiClient::new().categories().await });

    let load_map = move || {
        set_status.set(MapStatus::Loading);
        spawn_local(async move {
            let maps = match map_sdk::load().await {
                Ok(maps) => maps,
                Err(err) => {
                    notify::error("map", &err.to_string());
                    set_status.set(MapStatus::Failed(err));
                    return;
                }
            };
            let Some(element) = container.get_untracked() else {
                return;
            };
            let (lat, lng) = DEFAULT_CENTER;
            match MapView::new(maps, &element, LatLng { lat, lng }) {
                Some(view) => {
                    notify::log("map", "map ready");
                    map.set_value(Some(view));
                    set_status.set(MapStatus::Ready);
                }
                None => set_status.set(MapStatus::Failed(MapSdkError::MissingGlobal)),
            }
        });
    };

    // Load once the container is mounted.
    Effect::new(move |loaded: Option<bool>| {
        if loaded == Some(true) {
            return true;
        }
        if container.get().is_some() {
            load_map();
            return true;
        }
        false
    });

    let search = move || {
        let query = PlaceQuery {
            text: text.get_untracked().trim().to_string(),
            category: category.get_untracked(),
        };
        let Some(token) = searches.try_update_value(|t| t.begin()) else {
            return;
        };
        set_searching.set(true);
        spawn_local(async move {
            let response = ApiClient::new().search_places(&query).await;
            if searches.try_update_value(|t| t.finish(token)) != Some(true) {
                return;
            }
            set_searching.set(false);
            match response {
                Ok(places) => results.set(places),
                Err(err) => ctx.handle_error("search", &err, true),
            }
        });
    };

    // Markers follow the results.
    Effect::new(move |_| {
        let places = results.get();
        if status.get() != MapStatus::Ready {
            return;
        }
        map.update_value(|view| {
            if let Some(view) = view {
                view.set_places(&places, move |id| selected.set(Some(id)));
            }
        });
    });

    // Center on the selected place.
    Effect::new(move |_| {
        let Some(id) = selected.get() else {
            return;
        };
        let location = results.with_untracked(|r| r.iter().find(|p| p.id == id).map(|p| p.location));
        if let Some(location) = location {
            map.with_value(|view| {
                if let Some(view) = view {
                    view.pan_to(location);
                }
            });
        }
    });

    let toggle_category = move |code: String| {
        category.update(|current| {
            *current = if current.as_deref() == Some(code.as_str()) {
                None
            } else {
                Some(code)
            };
        });
        search();
    };

    view! {
        <div class=css::mapScreen>
            <form
                class=css::searchBar
                on:submit=move |ev| {
                    ev.prevent_default();
                    search();
                }
            >
                <Icon icon=ic::SEARCH />
                <input
                    type="search"
                    placeholder="Search places nearby"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
            </form>

            <div class=css::chips>
                <Suspense fallback=|| ()>
                    {move || categories.get().map(|result| match result {
                        Ok(list) => list
                            .into_iter()
                            .map(|c| {
                                let code = c.code.clone();
                                let active = c.code;
                                view! {
                                    <button
                                        class=move || if category.get().as_deref() == Some(active.as_str()) {
                                            format!("{} {}", css::chip, css::chipActive)
                                        } else {
                                            css::chip.to_string()
                                        }
                                        on:click=move |_| toggle_category(code.clone())
                                    >
                                        {c.label}
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any(),
                        Err(err) => {
                            notify::load_failed("categories", &err);
                            ().into_any()
                        }
                    })}
                </Suspense>
            </div>

            <div class=css::mapArea>
                <div node_ref=container class=css::map></div>
                {move || match status.get() {
                    MapStatus::Ready => ().into_any(),
                    MapStatus::Loading => view! {
                        <div class=css::mapOverlay>"Loading map..."</div>
                    }.into_any(),
                    MapStatus::Failed(err) => view! {
                        <div class=css::mapOverlay>
                            <p>{err.to_string()}</p>
                            <button on:click=move |_| load_map()>
                                <Icon icon=ic::RETRY />
                                " Retry"
                            </button>
                        </div>
                    }.into_any(),
                }}
            </div>

            <ResultList results=results searching=searching selected=selected />
            <PlaceSheet selected=selected />
        </div>
    }
}

#[component]
fn ResultList(
    results: RwSignal<Vec<PlaceSummary>>,
    searching: ReadSignal<bool>,
    selected: RwSignal<Option<PlaceId>>,
) -> impl IntoView {
    view! {
        <ul class=css::results aria-busy=move || searching.get().to_string()>
            <For
                each=move || results.get()
                key=|place| place.id
                children=move |place| {
                    let id = place.id;
                    view! {
                        <li
                            class=move || if selected.get() == Some(id) {
                                format!("{} {}", css::result, css::resultActive)
                            } else {
                                css::result.to_string()
                            }
                            on:click=move |_| selected.set(Some(id))
                        >
                            <strong>{place.name}</strong>
                            <span class=css::muted>{place.category}" · "{place.address}</span>
                            {place.distance_m.map(|m| view! { <span class=css::distance>{format_distance(m)}</span> })}
                        </li>
                    }
                }
            />
        </ul>
    }
}

fn format_distance(meters: u32) -> String {
    if meters < 1000 {
        format!("{meters} m")
    } else {
        format!("{:.1} km", meters as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(350), "350 m");
        assert_eq!(format_distance(1000), "1.0 km");
        assert_eq!(format_distance(2300), "2.3 km");
    }
}
