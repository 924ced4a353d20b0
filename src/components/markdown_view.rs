//! Rendered markdown document

use crate::utils::markdown::markdown_to_html;
use leptos::*;

/// Renders a markdown string as HTML. The transformer escapes the source,
/// so content cannot inject markup.
#[component]
pub fn MarkdownView(source: &'static str) -> impl IntoView {
    let html = markdown_to_html(source);
    view! {
        <div class="markdown-body" inner_html=html></div>
    }
}
