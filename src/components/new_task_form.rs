//! New Task Form Component
//!
//! Form for appending a task to the current list. Empty text is rejected
//! locally; no request is sent for it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::context::AppContext;
use crate::models::TaskList;
use crate::toast::use_toasts;

#[component]
pub fn NewTaskForm(
    list_id: StoredValue<String>,
    /// Hands the server-confirmed list back to the parent view
    on_created: Callback<TaskList>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();
    let api = use_api();

    let (new_text, set_new_text) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }

        set_adding.set(true);
        let api = api.clone();
        spawn_local(async move {
            let id = list_id.get_value();
            let result = api.create_task(&id, &text).await;
            if !ctx.is_viewing_list(&id) {
                return;
            }
            set_adding.set(false);
            match result {
                Ok(confirmed) => {
                    set_new_text.set(String::new());
                    toasts.success("Task added successfully");
                    on_created.run(confirmed);
                }
                Err(err) => toasts.api_error(&err, "Failed to add task"),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                prop:disabled=move || adding.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" prop:disabled=move || adding.get()>
                {move || if adding.get() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
