//! Todo App
//!
//! Root component: provides context and hosts the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoList;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::TodoListState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(&config));
    provide_context(Store::new(TodoListState::new(config.mode)));

    view! {
        <div class="app-layout">
            <TodoList />
        </div>
    }
}
