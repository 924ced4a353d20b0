//! Deployment roadmap

use crate::components::ProgressBar;
use crate::content;
use crate::models::PhaseStatus;
use leptos::*;

#[component]
pub fn RoadmapView() -> impl IntoView {
    let phases = content::roadmap_phases();
    let done = phases
        .iter()
        .filter(|p| p.status == PhaseStatus::Done)
        .count();
    let total = phases.len();

    view! {
        <div class="roadmap-view">
            <h2>"Deployment Roadmap"</h2>
            <ProgressBar complete=done total=total />
            <div class="phase-list">
                {phases.into_iter().map(|phase| {
                    let status_class = match phase.status {
                        PhaseStatus::Done => "done",
                        PhaseStatus::InProgress => "in-progress",
                        PhaseStatus::Planned => "planned",
                    };
                    view! {
                        <div class=format!("phase-card {}", status_class)>
                            <div class="phase-header">
                                <span class="phase-icon">{phase.status.icon()}</span>
                                <h4>{phase.name}</h4>
                                <span class="quarter">{phase.quarter}</span>
                                <span class="phase-status">{phase.status.label()}</span>
                            </div>
                            <ul>
                                {phase.items.into_iter().map(|item| view! {
                                    <li>{item}</li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
