//! Todo Resource API
//!
//! Abstract interface over the remote `/todos` collection.
//! `HttpTodoApi` talks to the real server via `fetch`.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Page, Todo, TodoPatch};

pub use http::HttpTodoApi;

/// CRUD operations on the remote todo collection
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos?page={page}&size={size}`
    async fn list_page(&self, page: u32, size: u32) -> ApiResult<Page<Todo>>;

    /// `GET /todos` (unpaginated)
    async fn list_all(&self) -> ApiResult<Vec<Todo>>;

    /// `POST /todos`
    async fn create(&self, title: &str) -> ApiResult<Todo>;

    /// `PUT /todos/{id}`; the server merges the patch and returns the full record
    async fn update(&self, id: u64, patch: &TodoPatch) -> ApiResult<Todo>;

    /// `DELETE /todos/{id}`
    async fn delete(&self, id: u64) -> ApiResult<()>;
}

// ========================
// URL Helpers
// ========================

pub(crate) fn collection_url(base: &str) -> String {
    format!("{}/todos", base.trim_end_matches('/'))
}

pub(crate) fn page_url(base: &str, page: u32, size: u32) -> String {
    format!("{}?page={}&size={}", collection_url(base), page, size)
}

pub(crate) fn item_url(base: &str, id: u64) -> String {
    format!("{}/{}", collection_url(base), id)
}
