//! Todo List Component
//!
//! Wires the controller to the store: loads the current page whenever the
//! page cursor changes and runs add/toggle/delete in spawned tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewTodoForm, PaginationBar, TodoItem};
use crate::config::ListMode;
use crate::context::use_app_context;
use crate::ordering::visible_items;
use crate::store::{dispatch, use_todo_store, TodoListStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    // Only a real cursor change may refetch; other writes to the store must not
    let page = Memo::new(move |_| store.page().get());

    Effect::new(move |_| {
        let page = page.get();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.load_page(page, move |event| dispatch(store, event)).await;
        });
    });

    let on_add = Callback::new(move |title: String| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.add_task(&title, move |event| dispatch(store, event)).await;
        });
    });

    let on_toggle = Callback::new(move |id: u64| {
        let controller = ctx.controller();
        let items = store.items().get_untracked();
        spawn_local(async move {
            controller.toggle_task(&items, id, move |event| dispatch(store, event)).await;
        });
    });

    let on_delete = Callback::new(move |id: u64| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.delete_task(id, move |event| dispatch(store, event)).await;
        });
    });

    let todos = move || visible_items(&store.items().get(), ctx.mode);

    view! {
        <div class="todo-container">
            <h1>"Todo List"</h1>

            {move || store.error().get().map(|failure| view! {
                <div class="error-banner">{failure.to_string()}</div>
            })}

            <NewTodoForm on_add=on_add />

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="todo-list">
                    <For
                        each=todos
                        key=|todo| (todo.id, todo.completed, todo.title.clone())
                        children=move |todo| view! {
                            <TodoItem todo=todo on_toggle=on_toggle on_delete=on_delete />
                        }
                    />
                </ul>
            </Show>

            {(ctx.mode == ListMode::Paged).then(|| view! { <PaginationBar /> })}
        </div>
    }
}
