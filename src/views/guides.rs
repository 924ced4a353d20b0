//! Feature guide list and reader

use crate::components::MarkdownView;
use crate::content;
use crate::utils::activity_log;
use leptos::*;

#[component]
pub fn GuidesView() -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<&'static str>);

    view! {
        <div class="guides-view">
            <h2>"Feature Guides"</h2>

            {move || match selected.get() {
                Some(slug) => {
                    let guide = content::feature_guides().into_iter().find(|g| g.slug == slug);
                    match guide {
                        Some(guide) => view! {
                            <div class="guide-reader">
                                <button class="back-btn" on:click=move |_| set_selected.set(None)>
                                    "← All guides"
                                </button>
                                <MarkdownView source=guide.body />
                            </div>
                        }.into_view(),
                        None => ().into_view(),
                    }
                }
                None => view! {
                    <div class="guide-list">
                        {content::feature_guides().into_iter().map(|guide| {
                            let slug = guide.slug;
                            view! {
                                <button class="guide-card" on:click=move |_| {
                                    activity_log::log_info("nav", &format!("guide {slug} opened"));
                                    set_selected.set(Some(slug));
                                }>
                                    <span class="guide-category">{guide.category}</span>
                                    <h4>{guide.title}</h4>
                                    <span class="read-time">{guide.read_minutes}" min read"</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
