//! Leveling home screen.
//!
//! - [`LevelCard`] - level and progress toward the next one
//! - [`MissionList`] - level and weekly missions with start/complete

mod level;
mod missions;

use hoodmap_core::models::MissionKind;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::APP_NAME;

pub use level::LevelCard;
pub use missions::MissionList;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let nickname = move || {
        ctx.profile
            .with(|p| p.as_ref().map(|p| p.nickname.clone()))
            .unwrap_or_else(|| APP_NAME.to_string())
    };

    view! {
        <div class=css::home>
            <header class=css::greeting>
                <h1>{move || format!("Hi, {}", nickname())}</h1>
            </header>
            <LevelCard />
            <MissionList kind=MissionKind::Level title="Level missions" />
            <MissionList kind=MissionKind::Weekly title="This week" />
        </div>
    }
}
