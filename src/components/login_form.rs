//! Login Page Component
//!
//! Email/password form with local validation. On success the token is
//! stored and the app routes to the lists view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::context::{AppContext, Route};
use crate::toast::use_toasts;
use crate::validate::looks_like_email;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();
    let api = use_api();
    let session = ctx.session;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (show_password, set_show_password) = signal(false);
    let (email_error, set_email_error) = signal(String::new());
    let (password_error, set_password_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let validate = move || {
        let mut valid = true;
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
        if password.get_untracked().is_empty() {
            set_password_error.set("Password is required".to_string());
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
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let remember = remember_me.get_untracked();
        spawn_local(async move {
            let result = api.login(&email_value, &password_value, remember).await;
            if !ctx.is_at(&Route::Login) {
                return;
            }
            set_loading.set(false);
            match result {
                Ok(token) => {
                    session.store(&token);
                    toasts.success("Logged in successfully");
                    ctx.navigate(Route::Lists);
                }
                Err(err) => toasts.api_error(&err, "Failed to login"),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Login"</h1>

                <label>"Email"</label>
                // type=text keeps validation (and its messages) local
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

                <label class="remember-me">
                    <input
                        type="checkbox"
                        on:change=move |_| set_remember_me.update(|v| *v = !*v)
                    />
                    "Remember me"
                </label>

                <button type="submit" prop:disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-switch">
                    "No account? "
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| ctx.navigate(Route::Register)
                    >
                        "Register"
                    </button>
                </p>
            </form>
        </div>
    }
}
