//! Role profiles

use crate::content;
use leptos::*;

#[component]
pub fn RolesView() -> impl IntoView {
    view! {
        <div class="roles-view">
            <h2>"Role Profiles"</h2>
            <div class="role-grid">
                {content::role_profiles().into_iter().map(|role| view! {
                    <div class="role-card">
                        <h4>{role.title}</h4>
                        <p class="summary">{role.summary}</p>
                        <h5>"Responsibilities"</h5>
                        <ul>
                            {role.responsibilities.into_iter().map(|r| view! {
                                <li>{r}</li>
                            }).collect_view()}
                        </ul>
                        <h5>"Permissions"</h5>
                        <ul class="permissions">
                            {role.permissions.into_iter().map(|p| view! {
                                <li>{p}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
