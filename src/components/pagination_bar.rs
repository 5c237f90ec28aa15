//! Pagination Bar Component
//!
//! Previous / "Page x of y" / Next.

use leptos::prelude::*;

use crate::controller::{go_to_next_page, go_to_previous_page};
use crate::store::{dispatch, use_todo_store, TodoListStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_todo_store();

    let on_previous = move |_: web_sys::MouseEvent| {
        if let Some(event) = store.with_untracked(go_to_previous_page) {
            dispatch(store, event);
        }
    };
    let on_next = move |_: web_sys::MouseEvent| {
        if let Some(event) = store.with_untracked(go_to_next_page) {
            dispatch(store, event);
        }
    };

    view! {
        <div class="pagination-bar">
            <button
                class="page-btn"
                disabled=move || store.page().get() == 0
                on:click=on_previous
            >
                "Previous"
            </button>
            <span class="page-label">
                {move || format!("Page {} of {}", store.page().get() + 1, store.total_pages().get())}
            </span>
            <button
                class="page-btn"
                disabled=move || store.page().get() + 1 >= store.total_pages().get()
                on:click=on_next
            >
                "Next"
            </button>
        </div>
    }
}
