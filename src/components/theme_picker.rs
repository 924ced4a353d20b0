//! Theme selection buttons
//!
//! Writes the standalone theme key through the store and updates the
//! applied theme signal. Does not touch `UserPreferences.theme`.

use crate::models::Theme;
use crate::utils::store::AppStore;
use crate::AppContext;
use leptos::*;

#[component]
pub fn ThemePicker() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found");
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let theme = ctx.theme;

    view! {
        <div class="theme-picker">
            {[Theme::Light, Theme::Dark, Theme::System].into_iter().map(|choice| {
                let store = store.clone();
                view! {
                    <button
                        class=move || if theme.get() == choice { "theme-btn active" } else { "theme-btn" }
                        on:click=move |_| {
                            store.set_theme(choice);
                            theme.set(choice);
                        }
                    >
                        {choice.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
