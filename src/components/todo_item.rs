//! Todo Item Component
//!
//! A single todo row. Holds no state of its own.

use leptos::prelude::*;

use crate::models::Todo;

/// Renders one todo and reports toggle/delete intents by id
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=move || if completed { "todo-item completed" } else { "todo-item" }>
            // Checkbox follows the server: the click is only a request
            <input
                type="checkbox"
                prop:checked=completed
                on:click=move |ev| {
                    ev.prevent_default();
                    on_toggle.run(id);
                }
            />
            <span class="todo-title">{todo.title}</span>
            <button class="delete-btn" on:click=move |_| on_delete.run(id)>"×"</button>
        </li>
    }
}
