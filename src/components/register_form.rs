//! Register Page Component
//!
//! Name/email/password form with local validation; routes back to the login
//! view after the account is created.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::context::{AppContext, Route};
use crate::toast::use_toasts;
use crate::validate::looks_like_email;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();
    let api = use_api();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (name_error, set_name_error) = signal(String::new());
    let (email_error, set_email_error) = signal(String::new());
    let (password_error, set_password_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let validate = move || {
        let mut valid = true;
        let name_value = name.get_untracked();
        if name_value.trim().is_empty() {
            set_name_error.set("Name is required".to_string());
            valid = false;
        } else if name_value.trim().len() < 3 {
            set_name_error.set("Name must be at least 3 characters".to_string());
            valid = false;
        } else {
            set_name_error.set(String::new());
        }
        let email_value = email.get_untracked();
        if email_value.trim().is_empty() {
            set_email_error.set("Email is required".to_string());
            valid = false;
        } else if !looks_like_email(&email_value) {
            set_email_error.set("Please enter a valid email".to_string());
            valid = false;
        } else {
            set_email_error.set(String::new());
        }
        let password_value = password.get_untracked();
        if password_value.is_empty() {
            set_password_error.set("Password is required".to_string());
            valid = false;
        } else if password_value.len() < 6 {
            set_password_error.set("Password must be at least 6 characters".to_string());
            valid = false;
        } else {
            set_password_error.set(String::new());
        }
        valid
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !validate() {
            return;
        }

        set_loading.set(true);
        let api = api.clone();
        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        spawn_local(async move {
            let result = api.register(&name_value, &email_value, &password_value).await;
            if !ctx.is_at(&Route::Register) {
                return;
            }
            set_loading.set(false);
            match result {
                Ok(()) => {
                    toasts.success("User registered successfully, redirecting to login page");
                    ctx.navigate(Route::Login);
                }
                Err(err) => toasts.api_error(&err, "Failed to register user"),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Register"</h1>

                <label>"Name"</label>
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                {move || (!name_error.get().is_empty()).then(|| view! {
                    <span class="field-error">{name_error.get()}</span>
                })}

                <label>"Email"</label>
                <input
                    type="text"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                {move || (!email_error.get().is_empty()).then(|| view! {
                    <span class="field-error">{email_error.get()}</span>
                })}

                <label>"Password"</label>
                <div class="password-field">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="show-password-btn"
                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                {move || (!password_error.get().is_empty()).then(|| view! {
                    <span class="field-error">{password_error.get()}</span>
                })}

                <button type="submit" prop:disabled=move || loading.get()>
                    {move || if loading.get() { "Registering..." } else { "Register" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? "
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| ctx.navigate(Route::Login)
                    >
                        "Login"
                    </button>
                </p>
            </form>
        </div>
    }
}
