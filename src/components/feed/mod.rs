//! Recommendation feed.
//!
//! Recommendations grouped into category sections, narrowed by a category
//! dropdown and ordered by score or distance.

use hoodmap_core::feed::{FeedFilter, FeedSection, FeedSort, group_sections};
use hoodmap_core::models::Recommendation;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::api::ApiClient;
use crate::components::icons as ic;
use crate::config::FEED_SECTION_LIMIT;
use crate::utils::notify;

stylance::import_crate_style!(css, "src/components/feed/feed.module.css");

/// Distinct categories in first-seen order.
fn categories_of(items: &[Recommendation]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item.place.category) {
            out.push(item.place.category.clone());
        }
    }
    out
}

/// Filtered sections, each cut to `limit` entries.
fn sections(items: &[Recommendation], filter: &FeedFilter, limit: usize) -> Vec<FeedSection> {
    let mut sections = group_sections(filter.apply(items));
    for section in &mut sections {
        section.items.truncate(limit);
    }
    sections
}

#[component]
pub fn Feed() -> impl IntoView {
    let filter = RwSignal::new(FeedFilter::default());
    let feed = LocalResource::new(|| async {
        let result = ApiClient::new().recommendations(None).await;
        if let Err(err) = &result {
            notify::load_failed("feed", err);
        }
        result.ok()
    });

    let items = move || feed.get().flatten().unwrap_or_default();

    view! {
        <div class=css::feed>
            <header class=css::toolbar>
                <h1>"For you"</h1>
                <select
                    aria-label="Category"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.category = (!value.is_empty()).then_some(value));
                    }
                >
                    <option value="" selected=move || filter.with(|f| f.category.is_none())>
                        "All categories"
                    </option>
                    {move || categories_of(&items())
                        .into_iter()
                        .map(|c| {
                            let current = c.clone();
                            let value = c.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || filter.with(|f| f.category.as_deref() == Some(current.as_str()))
                                >
                                    {c}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class=css::sort role="group" aria-label="Sort">
                    {[FeedSort::Score, FeedSort::Distance]
                        .into_iter()
                        .map(|sort| view! {
                            <button
                                class=move || if filter.with(|f| f.sort == sort) {
                                    format!("{} {}", css::sortButton, css::sortActive)
                                } else {
                                    css::sortButton.to_string()
                                }
                                on:click=move |_| filter.update(|f| f.sort = sort)
                            >
                                {match sort {
                                    FeedSort::Score => "Best",
                                    FeedSort::Distance => "Nearest",
                                }}
                            </button>
                        })
                        .collect_view()}
                </div>
            </header>

            <Suspense fallback=|| view! { <p class=css::muted>"Loading recommendations..."</p> }>
                {move || feed.get().map(|loaded| match loaded {
                    None => view! {
                        <button class=css::retry on:click=move |_| feed.refetch()>
                            <Icon icon=ic::RETRY />
                            " Couldn't load the feed. Retry"
                        </button>
                    }.into_any(),
                    Some(items) => {
                        let sections = filter.with(|f| sections(&items, f, FEED_SECTION_LIMIT));
                        if sections.is_empty() {
                            return view! { <p class=css::muted>"Nothing to recommend yet"</p> }.into_any();
                        }
                        sections
                            .into_iter()
                            .map(|section| view! { <Section section=section /> })
                            .collect_view()
                            .into_any()
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn Section(section: FeedSection) -> impl IntoView {
    view! {
        <section class=css::section>
            <h2>{section.category}</h2>
            <ul class=css::cards>
                {section.items.into_iter().map(|rec| view! {
                    <li class=css::card>
                        {rec.place.thumbnail_url.map(|src| view! { <img src=src alt="" loading="lazy" /> })}
                        <strong>{rec.place.name}</strong>
                        <span class=css::muted>{rec.place.address}</span>
                        {rec.reason.map(|r| view! { <span class=css::reason>{r}</span> })}
                        {rec.place.rating.map(|r| view! {
                            <span class=css::rating><Icon icon=ic::STAR_FILL />{format!(" {r:.1}")}</span>
                        })}
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use hoodmap_core::models::{LatLng, PlaceSummary};

    use super::*;

    fn rec(id: u64, category: &str, score: f32) -> Recommendation {
        Recommendation {
            place: PlaceSummary {
                id,
                name: format!("place {id}"),
                category: category.to_string(),
                address: String::new(),
                location: LatLng { lat: 0.0, lng: 0.0 },
                rating: None,
                thumbnail_url: None,
                distance_m: None,
            },
            score,
            reason: None,
        }
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let items = vec![rec(1, "cafe", 0.5), rec(2, "park", 0.4), rec(3, "cafe", 0.9)];
        assert_eq!(categories_of(&items), vec!["cafe", "park"]);
    }

    #[test]
    fn test_sections_are_truncated() {
        let items: Vec<_> = (0..5).map(|i| rec(i, "cafe", i as f32)).collect();
        let out = sections(&items, &FeedFilter::default(), 3);
        assert_eq!(out.len(), 1);
        let ids: Vec<_> = out[0].items.iter().map(|r| r.place.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_sections_follow_category_filter() {
        let items = vec![rec(1, "cafe", 0.5), rec(2, "park", 0.4)];
        let filter = FeedFilter {
            category: Some("park".to_string()),
            ..FeedFilter::default()
        };
        let out = sections(&items, &filter, 10);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, "park");
    }
}
