//! New Todo Form Component
//!
//! Text input plus an Add button; Enter submits.

use leptos::prelude::*;

use crate::store::{dispatch, use_todo_store, ListEvent, TodoListStateStoreFields};

#[component]
pub fn NewTodoForm(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let store = use_todo_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(store.pending_input().get_untracked());
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || store.pending_input().get()
                on:input=move |ev| dispatch(store, ListEvent::InputChanged(event_target_value(&ev)))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
