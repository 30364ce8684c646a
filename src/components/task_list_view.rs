//! Task List View Component
//!
//! The page for a single list: fetch on mount, add/edit/complete/delete,
//! and drag or keyboard reorder. Reordering applies optimistically, then
//! reconciles with the server response or rolls back on failure. Every
//! reorder invocation captures its own pre-move snapshot and a generation
//! token, so overlapping requests cannot revert or overwrite each other's
//! state, and a response that lands after navigation is dropped.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_sortable::{
    bind_global_mouseup, create_sort_signals, make_on_mousedown, make_on_mouseleave,
    make_on_slot_mouseenter, SortSignals,
};

use crate::api::use_api;
use crate::components::{NewTaskForm, ProgressBar, TaskRow};
use crate::context::AppContext;
use crate::models::{Task, TaskList};
use crate::reorder::{self, Generation};
use crate::toast::use_toasts;

#[component]
pub fn TaskListView(list_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();
    let api = use_api();
    let list_id = StoredValue::new(list_id);

    let (list, set_list) = signal(None::<TaskList>);
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);
    let (selected_task, set_selected_task) = signal(None::<u32>);
    let (editing_task, set_editing_task) = signal(None::<u32>);
    let (updating, set_updating) = signal(Vec::<u32>::new());
    let (deleting, set_deleting) = signal(Vec::<u32>::new());

    let generation = Generation::new();
    let sort = create_sort_signals();

    // Initial fetch
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                let id = list_id.get_value();
                let result = api.get_list(&id).await;
                if !ctx.is_viewing_list(&id) {
                    return;
                }
                match result {
                    Ok(fetched) => {
                        web_sys::console::log_1(
                            &format!("[LIST] Loaded {} tasks", fetched.tasks.len()).into(),
                        );
                        set_tasks.set(fetched.tasks.clone());
                        set_list.set(Some(fetched));
                    }
                    Err(err) => toasts.api_error(&err, "Failed to load list"),
                }
                set_loading.set(false);
            });
        });
    }

    // One reorder entry point for pointer drops and keyboard moves.
    // `before` is this invocation's own snapshot; the settlement handler
    // applies only while its generation token is still the newest and this
    // list is still the active view.
    let start_reorder = {
        let api = api.clone();
        let generation = generation.clone();
        move |next: Vec<Task>, before: Vec<Task>| {
            set_tasks.set(next.clone());
            let token = generation.begin();
            let api = api.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let id = list_id.get_value();
                let ids: Vec<u32> = next.iter().map(|t| t.id).collect();
                match api.reorder(&id, &ids).await {
                    Ok(confirmed) => {
                        if generation.is_current(token) && ctx.is_viewing_list(&id) {
                            set_tasks.set(confirmed.tasks.clone());
                            set_list.set(Some(confirmed));
                            toasts.success("Tasks reordered successfully");
                        }
                    }
                    Err(err) => {
                        if generation.is_current(token) && ctx.is_viewing_list(&id) {
                            set_tasks.set(before);
                            toasts.api_error(&err, "Failed to reorder tasks");
                        }
                    }
                }
            });
        }
    };

    // Bind global mouseup handler for dropping
    {
        let start_reorder = start_reorder.clone();
        bind_global_mouseup(sort, move |dragged_id, slot| {
            web_sys::console::log_1(&format!("[DND] drop: task={dragged_id}, slot={slot}").into());
            let before = tasks.get_untracked();
            if let Some(next) = reorder::move_to_slot(&before, dragged_id, slot) {
                start_reorder(next, before);
            }
        });
    }

    let on_toggle = Callback::new({
        let api = api.clone();
        move |task_id: u32| {
            set_updating.update(|v| v.push(task_id));
            let api = api.clone();
            spawn_local(async move {
                let id = list_id.get_value();
                let result = api.toggle_task(&id, task_id).await;
                if !ctx.is_viewing_list(&id) {
                    return;
                }
                set_updating.update(|v| v.retain(|t| *t != task_id));
                match result {
                    Ok(confirmed) => {
                        toasts.success("Task completion toggled");
                        set_tasks.set(confirmed.tasks.clone());
                        set_list.set(Some(confirmed));
                    }
                    Err(err) => toasts.api_error(&err, "Failed to toggle task completion"),
                }
            });
        }
    });

    let on_update_text = Callback::new({
        let api = api.clone();
        move |(task_id, text): (u32, String)| {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() {
                toasts.error("Task text cannot be empty");
                return;
            }
            let current = tasks.get_untracked();
            if current.iter().any(|t| t.id == task_id && t.text == trimmed) {
                // Unchanged, nothing to persist
                return;
            }
            set_updating.update(|v| v.push(task_id));
            let api = api.clone();
            spawn_local(async move {
                let id = list_id.get_value();
                let result = api.update_task_text(&id, task_id, &trimmed).await;
                if !ctx.is_viewing_list(&id) {
                    return;
                }
                set_updating.update(|v| v.retain(|t| *t != task_id));
                match result {
                    Ok(confirmed) => {
                        toasts.success("Task updated successfully");
                        set_tasks.set(confirmed.tasks.clone());
                        set_list.set(Some(confirmed));
                    }
                    Err(err) => toasts.api_error(&err, "Failed to update task"),
                }
            });
        }
    });

    let on_delete = Callback::new({
        let api = api.clone();
        move |task_id: u32| {
            // Deleting the selected task clears the selection
            if selected_task.get_untracked() == Some(task_id) {
                set_selected_task.set(None);
            }
            set_deleting.update(|v| v.push(task_id));
            let api = api.clone();
            spawn_local(async move {
                let id = list_id.get_value();
                let result = api.delete_task(&id, task_id).await;
                if !ctx.is_viewing_list(&id) {
                    return;
                }
                set_deleting.update(|v| v.retain(|t| *t != task_id));
                match result {
                    Ok(()) => {
                        toasts.success("Task deleted successfully");
                        set_tasks.update(|list| list.retain(|t| t.id != task_id));
                        // Refresh for the recomputed completion percentage
                        if let Ok(confirmed) = api.get_list(&id).await {
                            if ctx.is_viewing_list(&id) {
                                set_tasks.set(confirmed.tasks.clone());
                                set_list.set(Some(confirmed));
                            }
                        }
                    }
                    Err(err) => toasts.api_error(&err, "Failed to delete task"),
                }
            });
        }
    });

    let on_created = Callback::new(move |confirmed: TaskList| {
        set_tasks.set(confirmed.tasks.clone());
        set_list.set(Some(confirmed));
    });

    // Keyboard shortcuts: selection, toggle, edit, delete, Shift+arrows to
    // move the selected task through the same reorder flow as dragging.
    // The listener is dropped with this view's reactive owner.
    {
        let start_reorder = start_reorder.clone();
        window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
            if !ctx.is_viewing_list(&list_id.get_value()) {
                return;
            }
            // Don't handle shortcuts while editing or typing in an input
            if editing_task.get_untracked().is_some() {
                return;
            }
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
            }
            let Some(selected) = selected_task.get_untracked() else {
                return;
            };
            let current = tasks.get_untracked();
            let Some(index) = current.iter().position(|t| t.id == selected) else {
                return;
            };

            match ev.key().to_lowercase().as_str() {
                "arrowup" if ev.shift_key() => {
                    ev.prevent_default();
                    if index > 0 {
                        if let Some(next) = reorder::move_task(&current, selected, index - 1) {
                            start_reorder(next, current);
                        }
                    }
                }
                "arrowdown" if ev.shift_key() => {
                    ev.prevent_default();
                    if index + 1 < current.len() {
                        if let Some(next) = reorder::move_task(&current, selected, index + 1) {
                            start_reorder(next, current);
                        }
                    }
                }
                "arrowup" => {
                    ev.prevent_default();
                    if index > 0 {
                        set_selected_task.set(Some(current[index - 1].id));
                    }
                }
                "arrowdown" => {
                    ev.prevent_default();
                    if index + 1 < current.len() {
                        set_selected_task.set(Some(current[index + 1].id));
                    }
                }
                " " => {
                    ev.prevent_default();
                    on_toggle.run(selected);
                }
                "e" | "enter" => {
                    ev.prevent_default();
                    set_editing_task.set(Some(selected));
                }
                "delete" => {
                    ev.prevent_default();
                    on_delete.run(selected);
                }
                _ => {}
            }
        });
    }

    view! {
        <div class="list-page">
            {move || list.get().map(|data| view! {
                <h1 class="list-title">{data.title.clone()}</h1>
                <ProgressBar percentage=data.completion_percentage />
            })}

            <div class="shortcuts-card">
                <h2>"Keyboard Shortcuts"</h2>
                <div class="shortcuts-grid">
                    <div class="shortcut"><span>"Navigate Tasks"</span><span>"↑/↓"</span></div>
                    <div class="shortcut"><span>"Mark as Complete"</span><span>"Space"</span></div>
                    <div class="shortcut"><span>"Edit Task"</span><span>"E or Enter"</span></div>
                    <div class="shortcut"><span>"Delete Task"</span><span>"Delete"</span></div>
                    <div class="shortcut"><span>"Move Task"</span><span>"Shift+↑/↓"</span></div>
                </div>
            </div>

            <NewTaskForm list_id=list_id on_created=on_created />

            {move || if loading.get() {
                view! { <div class="loading-screen">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div class="task-rows">
                        // Slot before the first row
                        <DropSlot sort=sort slot=0 />
                        <For
                            each={move || tasks.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(index, task)| (task.id, *index, task.text.clone(), task.completed)
                            children=move |(index, task)| {
                                let id = task.id;
                                let on_mousedown = make_on_mousedown(sort, id);
                                let is_selected = move || selected_task.get() == Some(id);
                                let is_dragging = move || sort.dragging_id_read.get() == Some(id);
                                let wrapper_class = move || {
                                    let mut c = String::from("task-row-wrapper");
                                    if is_selected() { c.push_str(" selected"); }
                                    if is_dragging() { c.push_str(" dragging"); }
                                    c
                                };

                                view! {
                                    <div
                                        class=wrapper_class
                                        on:mousedown=on_mousedown
                                        on:click=move |_| {
                                            if sort.drag_just_ended_read.get_untracked() { return; }
                                            set_selected_task.set(Some(id));
                                        }
                                    >
                                        <TaskRow
                                            task=task.clone()
                                            editing_task=editing_task
                                            set_editing_task=set_editing_task
                                            updating=updating
                                            deleting=deleting
                                            on_toggle=on_toggle
                                            on_update_text=on_update_text
                                            on_delete=on_delete
                                        />
                                    </div>

                                    // Slot after this row
                                    <DropSlot sort=sort slot=index + 1 />
                                }
                            }
                        />
                        {move || tasks.get().is_empty().then(|| view! {
                            <div class="empty-message">"No tasks yet"</div>
                        })}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// Drop slot component - a horizontal separator between rows
#[component]
pub fn DropSlot(sort: SortSignals, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(sort, slot);
    let on_mouseleave = make_on_mouseleave(sort);

    // Is this slot the current drop target?
    let is_active = move || sort.drop_slot_read.get() == Some(slot);

    // Only show while dragging
    let is_dragging = move || sort.dragging_id_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
