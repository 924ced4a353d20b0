//! Overview dashboard

use crate::components::ProgressBar;
use crate::content;
use crate::models::{PhaseStatus, ProjectStatus, Section};
use crate::utils::store::AppStore;
use crate::AppContext;
use leptos::*;

#[component]
pub fn DashboardView() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found");
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let user = store.current_user();
    let projects = store.projects();
    let active = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count();
    let draft = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Draft)
        .count();
    let archived = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Archived)
        .count();

    let phases = content::roadmap_phases();
    let phases_done = phases
        .iter()
        .filter(|p| p.status == PhaseStatus::Done)
        .count();
    let phase_total = phases.len();

    let stats = store.cache_stats();

    view! {
        <div class="dashboard">
            <h2>"Dashboard"</h2>

            <div class="summary-grid">
                <div class="summary-card user-card">
                    <h3>"Profile"</h3>
                    {match user {
                        Some(u) => view! {
                            <div class="user-summary">
                                <span class="user-name">{u.name.clone()}</span>
                                <span class="user-role">{u.role.label()}</span>
                                <span class="user-email">{u.email.clone()}</span>
                            </div>
                        }.into_view(),
                        None => view! {
                            <div class="user-summary empty">
                                <p>"No profile yet."</p>
                                <button on:click=move |_| ctx.section.set(Section::Settings)>
                                    "Set up in Settings"
                                </button>
                            </div>
                        }.into_view(),
                    }}
                </div>

                <div class="summary-card projects-card">
                    <h3>"Projects"</h3>
                    <div class="status-counts">
                        <span class="count active">{active}" active"</span>
                        <span class="count draft">{draft}" draft"</span>
                        <span class="count archived">{archived}" archived"</span>
                    </div>
                </div>

                <div class="summary-card roadmap-card">
                    <h3>"Rollout"</h3>
                    <ProgressBar complete=phases_done total=phase_total />
                </div>

                <div class="summary-card guidance-card">
                    <h3>"Guidance"</h3>
                    <div class="status-counts">
                        <span class="count">{content::security_baselines().len()}" baselines"</span>
                        <span class="count">{content::feature_guides().len()}" guides"</span>
                        <span class="count">{content::compliance_checklists().len()}" checklists"</span>
                    </div>
                </div>
            </div>

            <p class="cache-line">
                "Cache: " {stats.hits}" hits, " {stats.misses}" misses ("
                {format!("{:.1}", stats.hit_rate)}"% hit rate)"
            </p>
        </div>
    }
}
