//! GuideHub: internal guidance dashboard
//!
//! Client-side rendered Leptos app. All content is hardcoded; user, project
//! and theme state persist to browser local storage through `AppStore`.

mod components;
mod content;
mod models;
mod utils;
mod views;

use std::rc::Rc;

use leptos::*;

use models::{Section, Theme};
use utils::activity_log;
use utils::storage::LocalStorage;
use utils::store::AppStore;
use views::{
    BaselinesView, ComplianceView, DashboardView, GuidesView, RoadmapView, RoiCalculatorView,
    RolesView, SettingsView,
};

/// App-wide signals, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub section: RwSignal<Section>,
    pub theme: RwSignal<Theme>,
}

#[component]
fn App() -> impl IntoView {
    let store = AppStore::new(Rc::new(LocalStorage));
    let ctx = AppContext {
        section: create_rw_signal(Section::Dashboard),
        theme: create_rw_signal(store.theme()),
    };
    provide_context(store);
    provide_context(ctx);

    // keep the document root in sync with the chosen theme
    create_effect(move |_| {
        let theme = ctx.theme.get();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
        }
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"GuideHub"</h1>
                <nav class="tabs">
                    {Section::ALL.into_iter().map(|section| view! {
                        <button
                            class=move || if ctx.section.get() == section { "active" } else { "" }
                            on:click=move |_| {
                                activity_log::log_info("nav", section.title());
                                ctx.section.set(section);
                            }
                        >
                            {section.title()}
                        </button>
                    }).collect_view()}
                </nav>
            </header>

            <main class="container">
                {move || match ctx.section.get() {
                    Section::Dashboard => view! { <DashboardView /> }.into_view(),
                    Section::Guides => view! { <GuidesView /> }.into_view(),
                    Section::Baselines => view! { <BaselinesView /> }.into_view(),
                    Section::Roles => view! { <RolesView /> }.into_view(),
                    Section::Roadmap => view! { <RoadmapView /> }.into_view(),
                    Section::Compliance => view! { <ComplianceView /> }.into_view(),
                    Section::RoiCalculator => view! { <RoiCalculatorView /> }.into_view(),
                    Section::Settings => view! { <SettingsView /> }.into_view(),
                }}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
