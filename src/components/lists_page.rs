//! Lists Overview Component
//!
//! All of the user's task lists: create, open, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, Route};
use crate::store::{
    store_add_list, store_remove_list, store_set_lists, use_app_store, AppStateStoreFields,
};
use crate::toast::use_toasts;

/// List create input
#[component]
fn NewListForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();
    let api = use_api();
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (creating, set_creating) = signal(false);

    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_string();
        if title.is_empty() {
            return;
        }

        set_creating.set(true);
        let api = api.clone();
        spawn_local(async move {
            let result = api.create_list(&title).await;
            if !ctx.is_at(&Route::Lists) {
                return;
            }
            set_creating.set(false);
            match result {
                Ok(created) => {
                    set_new_title.set(String::new());
                    toasts.success("List created");
                    store_add_list(&store, created);
                }
                Err(err) => toasts.api_error(&err, "Failed to create list"),
            }
        });
    };

    view! {
        <form class="new-list-form" on:submit=create_list>
            <input
                type="text"
                placeholder="New list title..."
                prop:value=move || new_title.get()
                prop:disabled=move || creating.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" prop:disabled=move || creating.get()>"Create"</button>
        </form>
    }
}

/// Lists overview page
#[component]
pub fn ListsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();
    let api = use_api();
    let store = use_app_store();

    let (loading, set_loading) = signal(true);

    // Load lists on mount
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                let result = api.lists().await;
                if !ctx.is_at(&Route::Lists) {
                    return;
                }
                match result {
                    Ok(lists) => {
                        web_sys::console::log_1(&format!("[APP] Loaded {} lists", lists.len()).into());
                        store_set_lists(&store, lists);
                    }
                    Err(err) => toasts.api_error(&err, "Failed to load lists"),
                }
                set_loading.set(false);
            });
        });
    }

    let delete_list = {
        let api = api.clone();
        move |list_id: String| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_list(&list_id).await {
                    Ok(()) => {
                        toasts.success("List deleted");
                        store_remove_list(&store, &list_id);
                    }
                    Err(err) => toasts.api_error(&err, "Failed to delete list"),
                }
            });
        }
    };

    view! {
        <div class="lists-page">
            <h1>"My Lists"</h1>

            <NewListForm />

            {move || if loading.get() {
                view! { <div class="loading-screen">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div class="list-cards">
                        <For
                            each=move || store.lists().get()
                            // Tuple of all mutable fields so changes cause
                            // re-render; percentage rounded to stay hashable
                            key=|list| (
                                list.id.clone(),
                                list.title.clone(),
                                list.task_count,
                                (list.completion_percentage * 10.0) as i64,
                            )
                            children={
                                let delete_list = delete_list.clone();
                                move |list| {
                                    let id = list.id.clone();
                                    let open_id = list.id.clone();
                                    let delete_list = delete_list.clone();
                                    let percentage = list.completion_percentage.clamp(0.0, 100.0);

                                    view! {
                                        <div
                                            class="list-card"
                                            on:click=move |_| ctx.navigate(Route::List(open_id.clone()))
                                        >
                                            <div class="list-card-header">
                                                <span class="list-card-title">{list.title.clone()}</span>
                                                <DeleteConfirmButton
                                                    button_class="list-delete-btn"
                                                    on_confirm=Callback::new(move |_| delete_list(id.clone()))
                                                />
                                            </div>
                                            <div class="list-card-meta">
                                                {format!("{} tasks, {percentage:.0}% done", list.task_count)}
                                            </div>
                                            <div class="progress-track">
                                                <div class="progress-fill" style=format!("width: {percentage:.1}%;")></div>
                                            </div>
                                        </div>
                                    }
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}

            {move || (!loading.get() && store.lists().read().is_empty()).then(|| view! {
                <div class="empty-message">"No lists yet"</div>
            })}
        </div>
    }
}
