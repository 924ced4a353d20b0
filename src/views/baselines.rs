//! Security baselines, grouped by severity

use crate::components::BaselineCard;
use crate::content;
use crate::models::Severity;
use leptos::*;

#[component]
pub fn BaselinesView() -> impl IntoView {
    let mut baselines = content::security_baselines();
    baselines.sort_by_key(|b| match b.severity {
        Severity::Critical => 0,
        Severity::High => 1,
        Severity::Medium => 2,
        Severity::Low => 3,
    });

    view! {
        <div class="baselines-view">
            <h2>"Security Baselines"</h2>
            <p class="section-intro">
                "Minimum controls every internal system meets. Critical items are audited continuously."
            </p>
            <div class="baseline-grid">
                {baselines.into_iter().map(|baseline| view! {
                    <BaselineCard baseline=baseline />
                }).collect_view()}
            </div>
        </div>
    }
}
