//! Completion progress bar

use leptos::*;

#[component]
pub fn ProgressBar(complete: usize, total: usize) -> impl IntoView {
    let progress = if total > 0 { (complete * 100) / total } else { 0 };

    view! {
        <div class="progress-section">
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", progress)></div>
            </div>
            <span class="progress-text">{complete}"/" {total} " (" {progress}"%)"</span>
        </div>
    }
}
