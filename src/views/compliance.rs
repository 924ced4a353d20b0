//! Compliance checklists

use std::collections::HashSet;

use crate::components::ProgressBar;
use crate::content;
use crate::models::{ChecklistItem, ComplianceChecklist};
use crate::utils::activity_log;
use leptos::*;

#[component]
pub fn ComplianceView() -> impl IntoView {
    view! {
        <div class="compliance-view">
            <h2>"Compliance"</h2>
            <p class="section-intro">
                "Checklist state lives in this tab only; paste it into the review ticket before closing."
            </p>
            {content::compliance_checklists().into_iter().map(|checklist| view! {
                <ChecklistCard checklist=checklist />
            }).collect_view()}
        </div>
    }
}

#[component]
fn ChecklistCard(checklist: ComplianceChecklist) -> impl IntoView {
    let (checked, set_checked) = create_signal(HashSet::<&'static str>::new());
    let (copied, set_copied) = create_signal(false);

    let total = checklist.items.len();
    let name = checklist.name;
    let framework = checklist.framework;
    let items = checklist.items.clone();
    let export_items = checklist.items;

    let copy_markdown = move |_| {
        let text = checklist_markdown(name, framework, &export_items, &checked.get());
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(&text);
            set_copied.set(true);
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(2000).await;
                set_copied.set(false);
            });
        }
        activity_log::log_info("ui-action", &format!("checklist {name} copied"));
    };

    view! {
        <div class="checklist-card">
            <div class="checklist-header">
                <h4>{name}</h4>
                <span class="framework">{framework}</span>
                <button class="copy-btn" on:click=copy_markdown>
                    {move || if copied.get() { "Copied!" } else { "Copy as markdown" }}
                </button>
            </div>

            {move || view! { <ProgressBar complete=checked.get().len() total=total /> }}

            <div class="checklist-items">
                {items.into_iter().map(|item| {
                    let id = item.id;
                    view! {
                        <label class=move || format!(
                            "checklist-item {}",
                            if checked.get().contains(id) { "done" } else { "open" }
                        )>
                            <input
                                type="checkbox"
                                prop:checked=move || checked.get().contains(id)
                                on:change=move |_| set_checked.update(|set| {
                                    if !set.remove(id) {
                                        set.insert(id);
                                    }
                                })
                            />
                            <span class="item-label">{item.label}</span>
                            {item.required.then(|| view! {
                                <span class="required-badge">"required"</span>
                            })}
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Renders the current checklist state as a markdown task list.
fn checklist_markdown(
    name: &str,
    framework: &str,
    items: &[ChecklistItem],
    checked: &HashSet<&'static str>,
) -> String {
    let mut out = format!("## {name} ({framework})\n");
    for item in items {
        let mark = if checked.contains(item.id) { "x" } else { " " };
        let suffix = if item.required { "" } else { " (optional)" };
        out.push_str(&format!("- [{mark}] {}{suffix}\n", item.label));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_markdown_marks_checked_items() {
        let items = vec![
            ChecklistItem {
                id: "a",
                label: "First",
                required: true,
            },
            ChecklistItem {
                id: "b",
                label: "Second",
                required: false,
            },
        ];
        let checked: HashSet<&'static str> = ["a"].into_iter().collect();
        let md = checklist_markdown("Intake", "IT-7", &items, &checked);
        assert_eq!(
            md,
            "## Intake (IT-7)\n- [x] First\n- [ ] Second (optional)\n"
        );
    }
}
