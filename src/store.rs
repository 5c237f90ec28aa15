//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every change goes through `TodoListState::apply`, a single
//! `(state, event) -> state` transition.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::ListMode;
use crate::error::Failure;
use crate::models::{Page, Todo};

/// Client-side list state for the current page
#[derive(Clone, Debug, PartialEq, Store)]
pub struct TodoListState {
    /// Todos of the current page (or the whole collection in flat mode)
    pub items: Vec<Todo>,
    /// Text in the new-todo input
    pub pending_input: String,
    /// Zero-based page cursor
    pub page: u32,
    /// Page count, never below one
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<Failure>,
    pub mode: ListMode,
}

impl TodoListState {
    pub fn new(mode: ListMode) -> Self {
        Self {
            items: Vec::new(),
            pending_input: String::new(),
            page: 0,
            total_pages: 1,
            loading: true,
            error: None,
            mode,
        }
    }

    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1) - 1
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.last_page()
    }

    /// Apply one event.
    ///
    /// Fetch results are tagged with the page they were requested for; a
    /// result for a page that is no longer current is dropped.
    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::InputChanged(text) => {
                self.pending_input = text;
            }
            ListEvent::PageRequested(page) => {
                self.page = page.min(self.last_page());
            }
            ListEvent::FetchStarted { page } => {
                if page == self.page {
                    self.loading = true;
                }
            }
            ListEvent::PageLoaded { page, result } => {
                if page != self.page {
                    log::debug!("[LIST] dropping stale page {} (current {})", page, self.page);
                    return;
                }
                self.items = result.content;
                self.total_pages = result.total_pages.max(1);
                self.error = None;
                self.loading = false;
                if self.page > self.last_page() {
                    // Collection shrank under us; the cursor change reloads
                    self.page = self.last_page();
                }
            }
            ListEvent::ListLoaded(items) => {
                self.items = items;
                self.total_pages = 1;
                self.error = None;
                self.loading = false;
            }
            ListEvent::FetchFailed { page } => {
                if page != self.page {
                    log::debug!("[LIST] dropping stale failure for page {}", page);
                    return;
                }
                self.error = Some(Failure::Fetch);
                self.loading = false;
            }
            ListEvent::TaskAdded(todo) => {
                // Counters are left as-is until the next load
                match self.mode {
                    ListMode::Paged => self.items.insert(0, todo),
                    ListMode::Flat => self.items.push(todo),
                }
                self.pending_input.clear();
                self.error = None;
            }
            ListEvent::TaskToggled(updated) => {
                if let Some(item) = self.items.iter_mut().find(|t| t.id == updated.id) {
                    *item = updated;
                }
                self.error = None;
            }
            ListEvent::TaskDeleted(id) => {
                self.items.retain(|t| t.id != id);
                self.error = None;
            }
            ListEvent::ErrorOccurred(failure) => {
                self.error = Some(failure);
            }
        }
    }
}

/// Pure form of `TodoListState::apply`
pub fn reduce(mut state: TodoListState, event: ListEvent) -> TodoListState {
    state.apply(event);
    state
}

/// Everything that can change the list state
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    InputChanged(String),
    PageRequested(u32),
    FetchStarted { page: u32 },
    PageLoaded { page: u32, result: Page<Todo> },
    ListLoaded(Vec<Todo>),
    FetchFailed { page: u32 },
    TaskAdded(Todo),
    TaskToggled(Todo),
    TaskDeleted(u64),
    ErrorOccurred(Failure),
}

/// Type alias for the store
pub type TodoStore = Store<TodoListState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Apply an event to the store.
///
/// Typing only writes the input field so readers of `items` stay quiet.
pub fn dispatch(store: TodoStore, event: ListEvent) {
    match event {
        ListEvent::InputChanged(text) => store.pending_input().set(text),
        event => store.update(|state| state.apply(event)),
    }
}
