//! Progress Bar Component
//!
//! Completion percentage for the current list. The value always comes from
//! the server response, never from a local recount.

use leptos::prelude::*;

#[component]
pub fn ProgressBar(percentage: f64) -> impl IntoView {
    let clamped = percentage.clamp(0.0, 100.0);

    view! {
        <div class="progress-card">
            <div class="progress-labels">
                <span class="progress-title">"Overall Progress"</span>
                <span class="progress-value">{format!("{clamped:.1}%")}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=format!("width: {clamped:.1}%;")></div>
            </div>
        </div>
    }
}
