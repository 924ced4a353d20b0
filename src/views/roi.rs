//! ROI calculator

use crate::utils::roi::{calculate, RoiInputs};
use crate::utils::{activity_log, decode_base64, encode_base64};
use leptos::*;

// Scenario share link: #roi=<base64 json>
fn hash_inputs() -> Option<RoiInputs> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let encoded = hash.strip_prefix("#roi=")?;
    let json = decode_base64(encoded)?;
    serde_json::from_str(&json).ok()
}

fn share_url(inputs: &RoiInputs) -> Option<String> {
    let json = serde_json::to_string(inputs).ok()?;
    let encoded = encode_base64(&json)?;
    let window = web_sys::window()?;
    let location = window.location();
    let base_url = format!(
        "{}//{}{}",
        location.protocol().ok()?,
        location.host().ok()?,
        location.pathname().ok()?
    );
    Some(format!("{}#roi={}", base_url, encoded))
}

fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.0}", -value)
    } else {
        format!("${:.0}", value)
    }
}

#[component]
pub fn RoiCalculatorView() -> impl IntoView {
    // A shared scenario in the URL hash pre-populates the form
    let initial = hash_inputs().unwrap_or_default();
    let (inputs, set_inputs) = create_signal(initial);
    let (link, set_link) = create_signal(None::<String>);
    let (copied, set_copied) = create_signal(false);

    let outcome = move || calculate(&inputs.get());

    let generate_link = move |_| {
        if let Some(url) = share_url(&inputs.get()) {
            set_link.set(Some(url.clone()));
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&url);
                set_copied.set(true);
                spawn_local(async move {
                    gloo::timers::future::TimeoutFuture::new(2000).await;
                    set_copied.set(false);
                });
            }
            activity_log::log_info("roi", "scenario link generated");
        }
    };

    view! {
        <div class="roi-view">
            <h2>"ROI Calculator"</h2>

            <div class="roi-layout">
                <div class="roi-inputs">
                    <label>
                        "Team size"
                        <input type="number" min="0"
                            prop:value=move || inputs.get().team_size
                            on:input=move |ev| set_inputs.update(|i| {
                                i.team_size = event_target_value(&ev).parse().unwrap_or(0.0);
                            }) />
                    </label>
                    <label>
                        "Average hourly rate ($)"
                        <input type="number" min="0"
                            prop:value=move || inputs.get().hourly_rate
                            on:input=move |ev| set_inputs.update(|i| {
                                i.hourly_rate = event_target_value(&ev).parse().unwrap_or(0.0);
                            }) />
                    </label>
                    <label>
                        "Hours saved per person per week"
                        <input type="number" min="0" step="0.5"
                            prop:value=move || inputs.get().hours_saved_per_week
                            on:input=move |ev| set_inputs.update(|i| {
                                i.hours_saved_per_week = event_target_value(&ev).parse().unwrap_or(0.0);
                            }) />
                    </label>
                    <label>
                        "Adoption rate (%)"
                        <input type="number" min="0" max="100"
                            prop:value=move || inputs.get().adoption_rate_pct
                            on:input=move |ev| set_inputs.update(|i| {
                                i.adoption_rate_pct = event_target_value(&ev).parse().unwrap_or(0.0);
                            }) />
                    </label>
                    <label>
                        "License cost per user per month ($)"
                        <input type="number" min="0"
                            prop:value=move || inputs.get().license_cost_per_user_month
                            on:input=move |ev| set_inputs.update(|i| {
                                i.license_cost_per_user_month = event_target_value(&ev).parse().unwrap_or(0.0);
                            }) />
                    </label>
                    <label>
                        "One-time onboarding cost ($)"
                        <input type="number" min="0"
                            prop:value=move || inputs.get().onboarding_cost
                            on:input=move |ev| set_inputs.update(|i| {
                                i.onboarding_cost = event_target_value(&ev).parse().unwrap_or(0.0);
                            }) />
                    </label>
                </div>

                <div class="roi-outcome">
                    {move || {
                        let o = outcome();
                        view! {
                            <div class="outcome-grid">
                                <div class="outcome-card">
                                    <span class="outcome-label">"Annual savings"</span>
                                    <span class="outcome-value">{format_usd(o.annual_savings)}</span>
                                </div>
                                <div class="outcome-card">
                                    <span class="outcome-label">"Annual cost"</span>
                                    <span class="outcome-value">{format_usd(o.annual_cost)}</span>
                                </div>
                                <div class=format!("outcome-card {}", if o.net_benefit >= 0.0 { "positive" } else { "negative" })>
                                    <span class="outcome-label">"Net benefit"</span>
                                    <span class="outcome-value">{format_usd(o.net_benefit)}</span>
                                </div>
                                <div class="outcome-card">
                                    <span class="outcome-label">"ROI"</span>
                                    <span class="outcome-value">{format!("{:.0}%", o.roi_pct)}</span>
                                </div>
                                <div class="outcome-card">
                                    <span class="outcome-label">"Payback"</span>
                                    <span class="outcome-value">{match o.payback_months {
                                        Some(months) => format!("{:.1} months", months),
                                        None => "—".to_string(),
                                    }}</span>
                                </div>
                            </div>
                        }
                    }}

                    <div class="share-section">
                        <button class="share-btn" on:click=generate_link>
                            {move || if copied.get() { "Copied!" } else { "Copy scenario link" }}
                        </button>
                        {move || link.get().map(|url| view! {
                            <input type="text" class="share-url" readonly prop:value=url />
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
