//! Level progress card.

use hoodmap_core::level::LevelTable;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;

#[component]
pub fn LevelCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let table = LevelTable::default();
    let progress = Memo::new(move |_| {
        let xp = ctx.profile.with(|p| p.as_ref().map_or(0, |p| p.total_xp));
        table.progress(xp)
    });

    let caption = move || {
        let p = progress.get();
        match p.xp_to_next() {
            Some(remaining) => format!("{remaining} XP to level {}", p.level + 1),
            None => "Max level reached".to_string(),
        }
    };

    view! {
        <section class=css::levelCard>
            <div class=css::levelHeader>
                <Icon icon=ic::TROPHY />
                <span class=css::level>{move || format!("Lv. {}", progress.get().level)}</span>
                <span class=css::xp>{move || format!("{} XP", progress.get().total_xp)}</span>
            </div>
            <div
                class=css::bar
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || progress.get().percent().to_string()
            >
                <div
                    class=css::barFill
                    style=move || format!("width: {}%;", progress.get().percent())
                ></div>
            </div>
            <p class=css::caption>{caption}</p>
        </section>
    }
}
