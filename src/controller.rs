//! List Synchronization Controller
//!
//! Issues CRUD calls against a `TodoApi` and turns the outcome into
//! `ListEvent`s. Nothing here mutates state directly: every result goes
//! through the `dispatch` callback, and every API error is logged and
//! mapped to a `Failure` before it gets there.

use crate::api::TodoApi;
use crate::config::ListMode;
use crate::error::Failure;
use crate::models::{Todo, TodoPatch};
use crate::store::{ListEvent, TodoListState};

#[derive(Debug, Clone)]
pub struct TodoListController<A> {
    api: A,
    page_size: u32,
    mode: ListMode,
}

impl<A: TodoApi> TodoListController<A> {
    pub fn new(api: A, page_size: u32, mode: ListMode) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
            mode,
        }
    }

    /// Fetch `page` and report the result.
    ///
    /// Emits `FetchStarted` first and always ends with exactly one of
    /// `PageLoaded`/`ListLoaded`/`FetchFailed`, which clears `loading`.
    pub async fn load_page(&self, page: u32, dispatch: impl Fn(ListEvent)) {
        match self.mode {
            ListMode::Paged => {
                dispatch(ListEvent::FetchStarted { page });
                match self.api.list_page(page, self.page_size).await {
                    Ok(result) => {
                        if !result.is_consistent() {
                            log::warn!(
                                "[LIST] page {} envelope out of bounds ({} items, size {}, {} pages)",
                                result.page_number,
                                result.content.len(),
                                result.page_size,
                                result.total_pages
                            );
                        }
                        log::debug!("[LIST] loaded page {} ({} items)", page, result.content.len());
                        dispatch(ListEvent::PageLoaded { page, result });
                    }
                    Err(e) => {
                        log::error!("[LIST] fetching page {} failed: {}", page, e);
                        dispatch(ListEvent::FetchFailed { page });
                    }
                }
            }
            ListMode::Flat => {
                dispatch(ListEvent::FetchStarted { page: 0 });
                match self.api.list_all().await {
                    Ok(items) => {
                        log::debug!("[LIST] loaded {} items", items.len());
                        dispatch(ListEvent::ListLoaded(items));
                    }
                    Err(e) => {
                        log::error!("[LIST] fetching todos failed: {}", e);
                        dispatch(ListEvent::FetchFailed { page: 0 });
                    }
                }
            }
        }
    }

    /// Create a todo. Blank titles are ignored without a request.
    pub async fn add_task(&self, title: &str, dispatch: impl Fn(ListEvent)) {
        if title.trim().is_empty() {
            return;
        }
        match self.api.create(title).await {
            Ok(todo) => dispatch(ListEvent::TaskAdded(todo)),
            Err(e) => {
                log::error!("[LIST] creating todo failed: {}", e);
                dispatch(ListEvent::ErrorOccurred(Failure::Create));
            }
        }
    }

    /// Flip `completed` for the todo with `id` in `items`; unknown ids are ignored
    pub async fn toggle_task(&self, items: &[Todo], id: u64, dispatch: impl Fn(ListEvent)) {
        let Some(current) = items.iter().find(|t| t.id == id) else {
            return;
        };
        let patch = TodoPatch::completed(!current.completed);
        match self.api.update(id, &patch).await {
            Ok(updated) => dispatch(ListEvent::TaskToggled(updated)),
            Err(e) => {
                log::error!("[LIST] updating todo {} failed: {}", id, e);
                dispatch(ListEvent::ErrorOccurred(Failure::Update));
            }
        }
    }

    pub async fn delete_task(&self, id: u64, dispatch: impl Fn(ListEvent)) {
        match self.api.delete(id).await {
            Ok(()) => dispatch(ListEvent::TaskDeleted(id)),
            Err(e) => {
                log::error!("[LIST] deleting todo {} failed: {}", id, e);
                dispatch(ListEvent::ErrorOccurred(Failure::Delete));
            }
        }
    }
}

/// Step back one page; `None` when already on the first page
pub fn go_to_previous_page(state: &TodoListState) -> Option<ListEvent> {
    state
        .has_previous_page()
        .then(|| ListEvent::PageRequested(state.page - 1))
}

/// Step forward one page; `None` when already on the last page
pub fn go_to_next_page(state: &TodoListState) -> Option<ListEvent> {
    state
        .has_next_page()
        .then(|| ListEvent::PageRequested(state.page + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ApiResult};
    use crate::models::Page;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory stand-in for the remote collection
    #[derive(Default)]
    struct FakeServer {
        todos: Vec<Todo>,
        next_id: u64,
        failing: bool,
        calls: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct FakeApi(Rc<RefCell<FakeServer>>);

    impl FakeApi {
        fn with_todos(count: u64) -> Self {
            let api = Self::default();
            {
                let mut server = api.0.borrow_mut();
                server.todos = (1..=count).map(|id| make_todo(id, false)).collect();
                server.next_id = count + 1;
            }
            api
        }

        fn fail(&self) {
            self.0.borrow_mut().failing = true;
        }

        fn calls(&self) -> Vec<String> {
            self.0.borrow().calls.clone()
        }

        fn record(&self, call: String) -> ApiResult<()> {
            let mut server = self.0.borrow_mut();
            server.calls.push(call);
            if server.failing {
                Err(ApiError::Rejected("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        async fn list_page(&self, page: u32, size: u32) -> ApiResult<Page<Todo>> {
            self.record(format!("GET page={} size={}", page, size))?;
            let server = self.0.borrow();
            let total = server.todos.len() as u64;
            let total_pages = total.div_ceil(size as u64) as u32;
            let content = server
                .todos
                .iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .cloned()
                .collect();
            Ok(Page {
                content,
                page_number: page,
                page_size: size,
                total_pages,
                total_elements: total,
                is_first: page == 0,
                is_last: page + 1 >= total_pages,
            })
        }

        async fn list_all(&self) -> ApiResult<Vec<Todo>> {
            self.record("GET all".into())?;
            Ok(self.0.borrow().todos.clone())
        }

        async fn create(&self, title: &str) -> ApiResult<Todo> {
            self.record(format!("POST {}", title))?;
            let mut server = self.0.borrow_mut();
            let todo = Todo {
                id: server.next_id,
                title: title.to_string(),
                completed: false,
                created_at: None,
            };
            server.next_id += 1;
            server.todos.insert(0, todo.clone());
            Ok(todo)
        }

        async fn update(&self, id: u64, patch: &TodoPatch) -> ApiResult<Todo> {
            self.record(format!("PUT {}", id))?;
            let mut server = self.0.borrow_mut();
            let todo = server
                .todos
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| ApiError::Rejected(format!("todo {} not found", id)))?;
            if let Some(title) = &patch.title {
                todo.title = title.clone();
            }
            if let Some(completed) = patch.completed {
                todo.completed = completed;
            }
            Ok(todo.clone())
        }

        async fn delete(&self, id: u64) -> ApiResult<()> {
            self.record(format!("DELETE {}", id))?;
            self.0.borrow_mut().todos.retain(|t| t.id != id);
            Ok(())
        }
    }

    fn make_todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            completed,
            created_at: None,
        }
    }

    /// Controller plus the state its events are applied to
    struct Harness {
        api: FakeApi,
        controller: TodoListController<FakeApi>,
        state: RefCell<TodoListState>,
    }

    impl Harness {
        fn new(api: FakeApi, mode: ListMode) -> Self {
            Self {
                controller: TodoListController::new(api.clone(), 10, mode),
                api,
                state: RefCell::new(TodoListState::new(mode)),
            }
        }

        fn dispatch(&self) -> impl Fn(ListEvent) + '_ {
            move |event| self.state.borrow_mut().apply(event)
        }

        fn state(&self) -> TodoListState {
            self.state.borrow().clone()
        }

        fn ids(&self) -> Vec<u64> {
            self.state.borrow().items.iter().map(|t| t.id).collect()
        }

        async fn load(&self) {
            let page = self.state.borrow().page;
            self.controller.load_page(page, self.dispatch()).await;
        }

        async fn toggle(&self, id: u64) {
            let items = self.state.borrow().items.clone();
            self.controller.toggle_task(&items, id, self.dispatch()).await;
        }
    }

    #[tokio::test]
    async fn test_load_page_fills_state() {
        let h = Harness::new(FakeApi::with_todos(25), ListMode::Paged);
        h.load().await;

        let state = h.state();
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.total_pages, 3);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(h.api.calls(), vec!["GET page=0 size=10"]);
    }

    #[tokio::test]
    async fn test_page_envelopes_stay_in_bounds() {
        let api = FakeApi::with_todos(23);
        for page in 0..3 {
            let result = api.list_page(page, 10).await.unwrap();
            assert!(result.content.len() <= result.page_size as usize);
            assert!(result.page_number < result.total_pages.max(1));
            assert!(result.is_consistent());
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_fixed_message() {
        let api = FakeApi::default();
        api.fail();
        let h = Harness::new(api, ListMode::Paged);
        h.load().await;

        let state = h.state();
        assert_eq!(state.error.map(|f| f.to_string()), Some("Failed to fetch todos".to_string()));
        assert!(state.items.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_blank_titles_make_no_request() {
        let h = Harness::new(FakeApi::with_todos(2), ListMode::Paged);
        h.load().await;
        let before = h.state();

        h.controller.add_task("", h.dispatch()).await;
        h.controller.add_task("   ", h.dispatch()).await;

        assert_eq!(h.state(), before);
        assert_eq!(h.api.calls(), vec!["GET page=0 size=10"]);
    }

    #[tokio::test]
    async fn test_add_task_prepends_once_and_clears_input() {
        let h = Harness::new(FakeApi::with_todos(2), ListMode::Paged);
        h.load().await;
        h.state.borrow_mut().apply(ListEvent::InputChanged("Buy milk".into()));

        h.controller.add_task("Buy milk", h.dispatch()).await;

        let state = h.state();
        let matching: Vec<_> = state.items.iter().filter(|t| t.title == "Buy milk").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(state.items[0].title, "Buy milk");
        assert!(state.pending_input.is_empty());
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_add_task_appends_in_flat_mode() {
        let h = Harness::new(FakeApi::with_todos(2), ListMode::Flat);
        h.load().await;
        assert_eq!(h.api.calls(), vec!["GET all"]);

        h.controller.add_task("Walk dog", h.dispatch()).await;
        assert_eq!(h.ids(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_add_task_failure_keeps_items() {
        let h = Harness::new(FakeApi::with_todos(2), ListMode::Paged);
        h.load().await;
        h.state.borrow_mut().apply(ListEvent::InputChanged("Buy milk".into()));
        h.api.fail();

        h.controller.add_task("Buy milk", h.dispatch()).await;

        let state = h.state();
        assert_eq!(h.ids(), vec![1, 2]);
        assert_eq!(state.error, Some(Failure::Create));
        assert_eq!(state.pending_input, "Buy milk");
    }

    #[tokio::test]
    async fn test_toggle_flips_only_target() {
        let h = Harness::new(FakeApi::with_todos(3), ListMode::Paged);
        h.load().await;
        let before = h.state().items;

        h.toggle(2).await;

        let after = h.state().items;
        assert!(after[1].completed);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(h.api.calls().last().map(String::as_str), Some("PUT 2"));
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_silent() {
        let h = Harness::new(FakeApi::with_todos(1), ListMode::Paged);
        h.load().await;
        let before = h.state();

        h.toggle(99).await;

        assert_eq!(h.state(), before);
        assert_eq!(h.api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_failure_sets_update_error() {
        let h = Harness::new(FakeApi::with_todos(1), ListMode::Paged);
        h.load().await;
        h.api.fail();

        h.toggle(1).await;

        let state = h.state();
        assert!(!state.items[0].completed);
        assert_eq!(state.error, Some(Failure::Update));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let h = Harness::new(FakeApi::with_todos(3), ListMode::Paged);
        h.load().await;

        h.controller.delete_task(2, h.dispatch()).await;

        assert_eq!(h.ids(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_delete_failure_then_success_clears_banner() {
        let h = Harness::new(FakeApi::with_todos(3), ListMode::Paged);
        h.load().await;
        h.api.fail();
        h.controller.delete_task(2, h.dispatch()).await;
        assert_eq!(h.state().error, Some(Failure::Delete));
        assert_eq!(h.ids(), vec![1, 2, 3]);

        h.api.0.borrow_mut().failing = false;
        h.controller.delete_task(2, h.dispatch()).await;
        assert_eq!(h.state().error, None);
        assert_eq!(h.ids(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_navigation_bounds() {
        let h = Harness::new(FakeApi::with_todos(15), ListMode::Paged);
        h.load().await;

        assert_eq!(go_to_previous_page(&h.state()), None);

        let next = go_to_next_page(&h.state()).unwrap();
        h.state.borrow_mut().apply(next);
        h.load().await;
        assert_eq!(h.state().page, 1);
        assert_eq!(h.ids(), (11..=15).collect::<Vec<_>>());

        // Last page: nothing to do, nothing fetched
        let calls = h.api.calls().len();
        assert_eq!(go_to_next_page(&h.state()), None);
        assert_eq!(h.api.calls().len(), calls);

        assert_eq!(go_to_previous_page(&h.state()), Some(ListEvent::PageRequested(0)));
    }
}
