//! Settings: profile, theme, projects, upload demo, diagnostics

use crate::components::ThemePicker;
use crate::models::{Project, ProjectStatus, User, UserPreferences, UserRole};
use crate::utils::store::AppStore;
use crate::utils::upload::{upload_with_retry, validate, UploadRequest};
use crate::utils::{activity_log, now_iso};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn SettingsView() -> impl IntoView {
    view! {
        <div class="settings-view">
            <h2>"Settings"</h2>
            <ProfileEditor />
            <section class="settings-section">
                <h3>"Theme"</h3>
                <ThemePicker />
            </section>
            <ProjectEditor />
            <UploadDemo />
            <CachePanel />
            <ActivityLogPanel />
        </div>
    }
}

// ============================================
// Profile
// ============================================

#[component]
fn ProfileEditor() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found");
    let existing = store.current_user();

    let (name, set_name) = create_signal(
        existing.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
    );
    let (email, set_email) = create_signal(
        existing.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
    );
    let (role, set_role) =
        create_signal(existing.as_ref().map(|u| u.role).unwrap_or_default());
    let (notifications, set_notifications) = create_signal(
        existing
            .as_ref()
            .map(|u| u.preferences.notifications)
            .unwrap_or(false),
    );
    let (reduced_motion, set_reduced_motion) = create_signal(
        existing
            .as_ref()
            .map(|u| u.preferences.reduced_motion)
            .unwrap_or(false),
    );
    let (saved, set_saved) = create_signal(false);

    let save_store = store.clone();
    let save = move |_| {
        let current = save_store.current_user();
        // one record per browser profile, replaced wholesale
        let user = User {
            id: current
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_else(|| "local-user".to_string()),
            email: email.get(),
            name: name.get(),
            role: role.get(),
            avatar_url: current.as_ref().and_then(|u| u.avatar_url.clone()),
            preferences: UserPreferences {
                theme: current
                    .as_ref()
                    .map(|u| u.preferences.theme)
                    .unwrap_or_default(),
                notifications: notifications.get(),
                reduced_motion: reduced_motion.get(),
            },
        };
        save_store.set_current_user(&user);
        set_saved.set(true);
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(2000).await;
            set_saved.set(false);
        });
    };

    view! {
        <section class="settings-section">
            <h3>"Profile"</h3>
            <div class="form-grid">
                <label>
                    "Name"
                    <input type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev)) />
                </label>
                <label>
                    "Email"
                    <input type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev)) />
                </label>
                <label>
                    "Role"
                    <select on:change=move |ev| set_role.set(
                        match event_target_value(&ev).as_str() {
                            "admin" => UserRole::Admin,
                            "editor" => UserRole::Editor,
                            _ => UserRole::Viewer,
                        }
                    )>
                        <option value="admin" selected=move || role.get() == UserRole::Admin>"Admin"</option>
                        <option value="editor" selected=move || role.get() == UserRole::Editor>"Editor"</option>
                        <option value="viewer" selected=move || role.get() == UserRole::Viewer>"Viewer"</option>
                    </select>
                </label>
                <label class="checkbox-label">
                    <input type="checkbox"
                        prop:checked=move || notifications.get()
                        on:change=move |ev| set_notifications.set(event_target_checked(&ev)) />
                    " Email notifications"
                </label>
                <label class="checkbox-label">
                    <input type="checkbox"
                        prop:checked=move || reduced_motion.get()
                        on:change=move |ev| set_reduced_motion.set(event_target_checked(&ev)) />
                    " Reduce motion"
                </label>
            </div>
            <button class="save-btn" on:click=save>
                {move || if saved.get() { "Saved!" } else { "Save profile" }}
            </button>
        </section>
    }
}

// ============================================
// Projects
// ============================================

#[component]
fn ProjectEditor() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found");
    let (projects, set_projects) = create_signal(store.projects());

    let (proj_id, set_proj_id) = create_signal(String::new());
    let (proj_name, set_proj_name) = create_signal(String::new());
    let (proj_desc, set_proj_desc) = create_signal(String::new());
    let (proj_status, set_proj_status) = create_signal(ProjectStatus::Draft);
    let (feedback, set_feedback) = create_signal(None::<String>);

    let save_store = store.clone();
    let save = move |_| {
        let id = proj_id.get().trim().to_string();
        let name = proj_name.get().trim().to_string();
        if id.is_empty() || name.is_empty() {
            set_feedback.set(Some("Id and name are required".to_string()));
            return;
        }
        let now = now_iso();
        let existing = save_store.projects().into_iter().find(|p| p.id == id);
        let description = proj_desc.get().trim().to_string();
        let project = Project {
            id: id.clone(),
            name,
            description: (!description.is_empty()).then_some(description),
            status: proj_status.get(),
            created_at: existing
                .as_ref()
                .map(|p| p.created_at.clone())
                .unwrap_or_else(|| now.clone()),
            updated_at: now,
            owner_id: save_store
                .current_user()
                .map(|u| u.id)
                .unwrap_or_default(),
        };
        save_store.save_project(project);
        set_projects.set(save_store.projects());
        set_feedback.set(Some(format!("Project {id} saved")));
    };

    view! {
        <section class="settings-section">
            <h3>"Projects"</h3>
            <div class="form-grid">
                <label>
                    "Id"
                    <input type="text" placeholder="pilot-finance"
                        prop:value=move || proj_id.get()
                        on:input=move |ev| set_proj_id.set(event_target_value(&ev)) />
                </label>
                <label>
                    "Name"
                    <input type="text"
                        prop:value=move || proj_name.get()
                        on:input=move |ev| set_proj_name.set(event_target_value(&ev)) />
                </label>
                <label>
                    "Description"
                    <input type="text"
                        prop:value=move || proj_desc.get()
                        on:input=move |ev| set_proj_desc.set(event_target_value(&ev)) />
                </label>
                <label>
                    "Status"
                    <select on:change=move |ev| set_proj_status.set(
                        match event_target_value(&ev).as_str() {
                            "active" => ProjectStatus::Active,
                            "archived" => ProjectStatus::Archived,
                            _ => ProjectStatus::Draft,
                        }
                    )>
                        <option value="draft" selected=move || proj_status.get() == ProjectStatus::Draft>"Draft"</option>
                        <option value="active" selected=move || proj_status.get() == ProjectStatus::Active>"Active"</option>
                        <option value="archived" selected=move || proj_status.get() == ProjectStatus::Archived>"Archived"</option>
                    </select>
                </label>
            </div>
            <button class="save-btn" on:click=save>"Save project"</button>
            {move || feedback.get().map(|message| view! {
                <p class="status">{message}</p>
            })}

            {move || {
                let list = projects.get();
                if list.is_empty() {
                    view! { <p class="empty-note">"No projects yet."</p> }.into_view()
                } else {
                    view! {
                        <table class="project-table">
                            <thead>
                                <tr><th>"Id"</th><th>"Name"</th><th>"Status"</th><th>"Updated"</th></tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|p| view! {
                                    <tr>
                                        <td class="mono">{p.id}</td>
                                        <td>{p.name}</td>
                                        <td>{p.status.label()}</td>
                                        <td class="mono">{p.updated_at}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view()
                }
            }}
        </section>
    }
}

// ============================================
// Upload demo
// ============================================

#[component]
fn UploadDemo() -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<UploadRequest>);
    let (status, set_status) = create_signal(None::<(String, bool)>);
    let (busy, set_busy) = create_signal(false);

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                set_selected.set(Some(UploadRequest {
                    file_name: file.name(),
                    size_bytes: file.size(),
                }));
                set_status.set(None);
            }
        }
    };

    let start = move |_| {
        let Some(request) = selected.get() else {
            return;
        };
        // validation failures surface before any timers run
        if let Err(err) = validate(&request) {
            set_status.set(Some((err.to_string(), true)));
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match upload_with_retry(request).await {
                Ok(receipt) => set_status.set(Some((
                    format!(
                        "{} ({:.0} KB) uploaded after {} attempt(s)",
                        receipt.file_name,
                        receipt.size_bytes / 1024.0,
                        receipt.attempts
                    ),
                    false,
                ))),
                Err(err) => set_status.set(Some((err.to_string(), true))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="settings-section">
            <h3>"Document upload (demo)"</h3>
            <p class="section-intro">
                "Transfers are simulated with random transient failures and retried with backoff."
            </p>
            <div class="upload-area">
                <input type="file" on:change=on_file_change />
                <button on:click=start disabled=move || busy.get() || selected.get().is_none()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
            {move || status.get().map(|(message, is_error)| view! {
                <p class=format!("status {}", if is_error { "error" } else { "success" })>{message}</p>
            })}
        </section>
    }
}

// ============================================
// Diagnostics
// ============================================

#[component]
fn CachePanel() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found");
    let (stats, set_stats) = create_signal(store.cache_stats());

    let invalidate_user = {
        let store = store.clone();
        move |_| {
            store.invalidate_user_cache();
            set_stats.set(store.cache_stats());
        }
    };
    let invalidate_projects = {
        let store = store.clone();
        move |_| {
            store.invalidate_projects_cache();
            set_stats.set(store.cache_stats());
        }
    };
    let clear = {
        let store = store.clone();
        move |_| {
            store.clear_cache();
            set_stats.set(store.cache_stats());
        }
    };
    let refresh = {
        let store = store.clone();
        move |_| set_stats.set(store.cache_stats())
    };

    view! {
        <section class="settings-section">
            <h3>"Cache"</h3>
            {move || {
                let s = stats.get();
                view! {
                    <p class="cache-stats mono">
                        {s.hits}" hits / "{s.misses}" misses / "{s.invalidations}
                        " invalidations / "{s.size}" entries / "
                        {format!("{:.1}", s.hit_rate)}"% hit rate"
                    </p>
                }
            }}
            <div class="button-row">
                <button on:click=refresh>"Refresh"</button>
                <button on:click=invalidate_user>"Invalidate user"</button>
                <button on:click=invalidate_projects>"Invalidate projects"</button>
                <button on:click=clear>"Clear cache"</button>
            </div>
        </section>
    }
}

#[component]
fn ActivityLogPanel() -> impl IntoView {
    let (entry_count, set_entry_count) = create_signal(activity_log::entries().len());
    let (feedback, set_feedback) = create_signal(None::<String>);

    let copy = move |_| {
        spawn_local(async move {
            let message = match activity_log::copy_to_clipboard().await {
                Ok(()) => "Log copied".to_string(),
                Err(err) => err,
            };
            set_feedback.set(Some(message));
            set_entry_count.set(activity_log::entries().len());
        });
    };
    let download = move |_| {
        activity_log::download();
        set_entry_count.set(activity_log::entries().len());
    };
    let clear = move |_| {
        activity_log::clear();
        set_entry_count.set(0);
        set_feedback.set(Some("Log cleared".to_string()));
    };

    view! {
        <section class="settings-section">
            <h3>"Activity log"</h3>
            <p>{move || entry_count.get()}" entries recorded this session"</p>
            <div class="button-row">
                <button on:click=copy>"Copy as JSON"</button>
                <button on:click=download>"Download"</button>
                <button on:click=clear>"Clear"</button>
            </div>
            {move || feedback.get().map(|message| view! {
                <p class="status">{message}</p>
            })}
        </section>
    }
}
