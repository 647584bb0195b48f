//! Place detail sheet.
//!
//! Three-point sheet opened by selecting a place. Detail and reviews are
//! fetched on every selection; a request tracker drops responses that
//! arrive after the sheet was closed or moved to another place, and the
//! in-flight requests are aborted.

use hoodmap_core::models::{GroupId, NewReview, PlaceDetail, PlaceId, Review, average_rating};
use hoodmap_core::request::RequestTracker;
use hoodmap_core::sheet::SheetLayout;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::css;
use super::groups::GroupSheet;
use crate::api::{AbortHandle, ApiClient};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::sheet::{DraggableSheet, use_sheet};
use crate::config::sheet::PLACE_KEY;
use crate::utils::notify;

/// Detail fetch state.
#[derive(Clone)]
enum Detail {
    Loading,
    Loaded(PlaceDetail),
    Failed,
}

#[component]
pub fn PlaceSheet(selected: RwSignal<Option<PlaceId>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let detail = RwSignal::new(Detail::Loading);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let tracker = StoredValue::new(RequestTracker::new());
    let inflight: StoredValue<Option<AbortHandle>, LocalStorage> = StoredValue::new_local(None);
    let groups_open = RwSignal::new(false);

    let cancel = move || {
        tracker.update_value(|t| t.invalidate());
        if let Some(handle) = inflight.try_update_value(|h| h.take()).flatten() {
            handle.abort();
        }
    };

    let fetch = move |id: PlaceId| {
        cancel();
        let Some(token) = tracker.try_update_value(|t| t.begin()) else {
            return;
        };
        let handle = AbortHandle::new();
        let api = handle.as_ref().map_or_else(ApiClient::new, ApiClient::with_abort);
        inflight.set_value(handle);
        detail.set(Detail::Loading);
        reviews.set(Vec::new());

        spawn_local(async move {
            let place = api.place(id).await;
            let list = match &place {
                Ok(_) => api.reviews(id).await,
                Err(err) => Err(err.clone()),
            };
            if tracker.try_update_value(|t| t.finish(token)) != Some(true) {
                return;
            }
            inflight.set_value(None);
            match place {
                Ok(place) => detail.set(Detail::Loaded(place)),
                Err(err) => {
                    ctx.handle_error("place", &err, false);
                    detail.set(Detail::Failed);
                    return;
                }
            }
            match list {
                Ok(list) => reviews.set(list),
                Err(err) => ctx.handle_error("reviews", &err, false),
            }
        });
    };

    Effect::new(move |_| match selected.get() {
        Some(id) => fetch(id),
        None => {
            cancel();
            groups_open.set(false);
        }
    });
    on_cleanup(cancel);

    let open = Signal::derive(move || selected.get().is_some());
    let on_close = Callback::new(move |()| selected.set(None));
    let place_id = Signal::derive(move || selected.get());
    let name = move || match detail.get() {
        Detail::Loaded(d) => d.summary.name,
        Detail::Loading => "Loading...".to_string(),
        Detail::Failed => String::new(),
    };

    let on_groups_changed = Callback::new(move |ids: Vec<GroupId>| {
        detail.update(|d| {
            if let Detail::Loaded(d) = d {
                d.favorite_group_ids = ids;
            }
        });
    });

    view! {
        <DraggableSheet
            open=open
            layout=SheetLayout::ThreePoint
            history_key=PLACE_KEY
            on_close=on_close
            label="Place details"
            header=ViewFn::from(move || view! { <h2 class=css::sheetTitle>{name}</h2> })
        >
            {move || match detail.get() {
                Detail::Loading => view! { <p class=css::muted>"Loading place..."</p> }.into_any(),
                Detail::Failed => view! {
                    <button
                        class=css::retry
                        on:click=move |_| {
                            if let Some(id) = selected.get_untracked() {
                                fetch(id);
                            }
                        }
                    >
                        <Icon icon=ic::RETRY />
                        " Couldn't load this place. Retry"
                    </button>
                }.into_any(),
                Detail::Loaded(place) => view! {
                    <PlaceBody place=place groups_open=groups_open />
                }.into_any(),
            }}
            <Reviews place=place_id reviews=reviews />
        </DraggableSheet>
        <GroupSheet place=place_id open=groups_open on_changed=on_groups_changed />
    }
}

#[component]
fn PlaceBody(place: PlaceDetail, groups_open: RwSignal<bool>) -> impl IntoView {
    let sheet = use_sheet();
    let favorite = place.is_favorite();
    let summary = place.summary;

    view! {
        <div class=css::placeActions>
            <button
                class=css::iconButton
                aria-pressed=favorite.to_string()
                on:click=move |_| groups_open.set(true)
            >
                <Icon icon=if favorite { ic::HEART_FILL } else { ic::HEART } />
                {if favorite { " Saved" } else { " Save" }}
            </button>
            <button
                class=css::iconButton
                aria-label="Close"
                on:click=move |_| {
                    if let Some(sheet) = sheet {
                        sheet.close_all();
                    }
                }
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
        <p class=css::muted>{summary.category}" · "{summary.address}</p>
        {summary.rating.map(|r| view! {
            <p class=css::rating><Icon icon=ic::STAR_FILL />{format!(" {r:.1}")}</p>
        })}
        {place.description.map(|d| view! { <p>{d}</p> })}
        {place.phone.map(|phone| {
            let href = format!("tel:{phone}");
            view! { <a class=css::phone href=href>{phone}</a> }
        })}
        {(!place.opening_hours.is_empty()).then(|| view! {
            <ul class=css::hours>
                {place.opening_hours.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        })}
        <div class=css::photos>
            {place.photo_urls.into_iter().map(|src| view! {
                <img src=src alt="" loading="lazy" />
            }).collect_view()}
        </div>
    }
}

#[component]
fn Reviews(place: Signal<Option<PlaceId>>, reviews: RwSignal<Vec<Review>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let like = move |id| {
        spawn_local(async move {
            match ApiClient::new().like_review(id).await {
                Ok(updated) => reviews.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(err) => ctx.handle_error("review", &err, true),
            }
        });
    };

    let summary = move || {
        reviews.with(|list| match average_rating(list) {
            Some(avg) => format!("{} reviews · {avg:.1}", list.len()),
            None => "No reviews yet".to_string(),
        })
    };

    view! {
        <section class=css::reviews>
            <h3>{summary}</h3>
            <ReviewForm place=place reviews=reviews />
            <ul class=css::reviewList>
                <For
                    each=move || reviews.get()
                    key=|r| (r.id, r.like_count, r.liked_by_me)
                    children=move |review| {
                        let id = review.id;
                        view! {
                            <li class=css::review>
                                <div class=css::reviewHeader>
                                    <strong>{review.author}</strong>
                                    <span class=css::stars>{"★".repeat(review.rating as usize)}</span>
                                    <span class=css::muted>{review.created_at}</span>
                                </div>
                                <p>{review.body}</p>
                                <button
                                    class=css::iconButton
                                    aria-pressed=review.liked_by_me.to_string()
                                    on:click=move |_| like(id)
                                >
                                    <Icon icon=if review.liked_by_me { ic::LIKE_FILL } else { ic::LIKE } />
                                    {format!(" {}", review.like_count)}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[component]
fn ReviewForm(place: Signal<Option<PlaceId>>, reviews: RwSignal<Vec<Review>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let sheet = use_sheet();
    let rating = RwSignal::new(0u8);
    let body = RwSignal::new(String::new());
    let (posting, set_posting) = signal(false);

    let submit = move || {
        let Some(id) = place.get_untracked() else {
            return;
        };
        let review = match NewReview::parse(rating.get_untracked(), &body.get_untracked()) {
            Ok(review) => review,
            Err(message) => {
                notify::alert(message);
                return;
            }
        };
        set_posting.set(true);
        spawn_local(async move {
            match ApiClient::new().post_review(id, &review).await {
                Ok(posted) => {
                    reviews.update(|list| list.insert(0, posted));
                    rating.set(0);
                    body.set(String::new());
                }
                Err(err) => ctx.handle_error("review", &err, true),
            }
            set_posting.set(false);
        });
    };

    view! {
        <form
            class=css::reviewForm
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <div class=css::starPicker role="radiogroup" aria-label="Rating">
                {(1..=5u8).map(|value| view! {
                    <button
                        type="button"
                        role="radio"
                        aria-checked=move || (rating.get() == value).to_string()
                        on:click=move |_| rating.set(value)
                    >
                        <Icon icon=Signal::derive(move || if rating.get() >= value { ic::STAR_FILL } else { ic::STAR }) />
                    </button>
                }).collect_view()}
            </div>
            <textarea
                placeholder="Share what you liked"
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
                on:focus=move |_| {
                    if let Some(sheet) = sheet {
                        sheet.expand();
                    }
                }
            ></textarea>
            <button type="submit" disabled=move || posting.get()>
                {move || if posting.get() { "Posting..." } else { "Post review" }}
            </button>
        </form>
    }
}
