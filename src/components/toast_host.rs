//! Toast Host Component
//!
//! Renders the transient notification stack, top-center.

use leptos::prelude::*;

use crate::toast::{use_toasts, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! { <div class=class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
