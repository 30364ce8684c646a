//! Nav Bar Component
//!
//! Top bar with back navigation, app title, user name and logout.

use leptos::prelude::*;

use crate::context::{AppContext, Route};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let user_name = ctx.session.claims().map(|claims| claims.user.name);

    view! {
        <header class="nav-bar">
            {move || match ctx.route.get() {
                Route::List(_) => view! {
                    <button
                        class="back-btn"
                        on:click=move |_| ctx.navigate(Route::Lists)
                    >
                        "←"
                    </button>
                }.into_any(),
                _ => view! { <span class="nav-spacer"></span> }.into_any(),
            }}
            <span class="nav-title">"Ticklist"</span>
            <div class="nav-right">
                {user_name.map(|name| view! { <span class="nav-user">{name}</span> })}
                <button class="logout-btn" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
