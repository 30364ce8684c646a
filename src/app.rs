//! Ticklist Frontend App
//!
//! Root component: builds the session, API client, store and toast handle,
//! then switches between views on a route signal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{resolve_base_url, ApiClient};
use crate::components::{ListsPage, LoginPage, NavBar, RegisterPage, TaskListView, ToastHost};
use crate::context::{AppContext, Route};
use crate::session::Session;
use crate::store::AppState;
use crate::toast::Toasts;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new();
    let toasts = Toasts::new();

    // Only a live credential goes straight to the lists view
    let initial = if session.is_valid() {
        Route::Lists
    } else {
        if session.token().is_some() {
            session.clear();
            toasts.error("Session expired, please login again");
        }
        Route::Login
    };
    let (route, set_route) = signal(initial);

    let ctx = AppContext::new((route, set_route), session);
    let api = ApiClient::new(
        resolve_base_url(),
        session,
        Callback::new(move |_| {
            session.clear();
            toasts.error("Session expired, please login again");
            set_route.set(Route::Login);
        }),
    );

    // Provide context to all children
    provide_context(ctx);
    provide_context(toasts);
    provide_context(api);
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-shell">
            <ToastHost />
            {move || match route.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Register => view! { <RegisterPage /> }.into_any(),
                Route::Lists => view! {
                    <div class="page">
                        <NavBar />
                        <ListsPage />
                    </div>
                }.into_any(),
                Route::List(id) => view! {
                    <div class="page">
                        <NavBar />
                        <TaskListView list_id=id />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
