//! Security baseline card

use crate::models::SecurityBaseline;
use leptos::*;

#[component]
pub fn BaselineCard(baseline: SecurityBaseline) -> impl IntoView {
    view! {
        <div class=format!("baseline-card {}", baseline.severity.css_class())>
            <div class="baseline-header">
                <h4>{baseline.title}</h4>
                <span class="severity-badge">{baseline.severity.label()}</span>
                <span class="category">{baseline.category}</span>
            </div>
            <p class="summary">{baseline.summary}</p>
            <ul class="controls">
                {baseline.controls.into_iter().map(|control| view! {
                    <li>{control}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}
