//! Task Row Component
//!
//! A single task: drag handle, completion checkbox, text with inline edit
//! (double-click or keyboard), delete button. Busy flags keep the controls
//! disabled while that task's request is in flight.

use leptos::prelude::*;

use crate::models::Task;

#[component]
pub fn TaskRow(
    task: Task,
    editing_task: ReadSignal<Option<u32>>,
    set_editing_task: WriteSignal<Option<u32>>,
    updating: ReadSignal<Vec<u32>>,
    deleting: ReadSignal<Vec<u32>>,
    on_toggle: Callback<u32>,
    on_update_text: Callback<(u32, String)>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;
    // The committed text, for display and for Escape-cancel
    let text = StoredValue::new(task.text.clone());
    let (edit_text, set_edit_text) = signal(task.text.clone());

    let is_editing = move || editing_task.get() == Some(id);
    let is_updating = move || updating.get().contains(&id);
    let is_deleting = move || deleting.get().contains(&id);

    let commit = move || {
        on_update_text.run((id, edit_text.get_untracked()));
        set_editing_task.set(None);
    };

    view! {
        <div class=move || if completed { "task-row completed" } else { "task-row" }>
            <span class="drag-handle" title="Drag to reorder">"⠿"</span>

            <input
                type="checkbox"
                checked=completed
                prop:disabled=move || is_updating()
                on:change=move |_| on_toggle.run(id)
            />

            {move || if is_editing() {
                view! {
                    <input
                        type="text"
                        class="task-edit-input"
                        prop:value=move || edit_text.get()
                        prop:disabled=move || is_updating()
                        on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            ev.stop_propagation();
                            match ev.key().as_str() {
                                "Enter" => {
                                    ev.prevent_default();
                                    commit();
                                }
                                "Escape" => {
                                    ev.prevent_default();
                                    set_edit_text.set(text.get_value());
                                    set_editing_task.set(None);
                                }
                                _ => {}
                            }
                        }
                        on:blur=move |_| {
                            // Removing the input on Escape also fires blur;
                            // the parent drops unchanged text.
                            if editing_task.get_untracked() == Some(id) {
                                commit();
                            }
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <span
                        class="task-text"
                        on:dblclick=move |_| {
                            set_edit_text.set(text.get_value());
                            set_editing_task.set(Some(id));
                        }
                    >
                        {text.get_value()}
                    </span>
                }.into_any()
            }}

            {move || is_updating().then(|| view! { <span class="busy-marker">"…"</span> })}

            <button
                class="delete-btn"
                prop:disabled=move || is_deleting()
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(id);
                }
            >
                "×"
            </button>
        </div>
    }
}
