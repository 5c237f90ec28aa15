//! HTTP Client
//!
//! `TodoApi` over `reqwest` (fetch backend in the browser) with JSON bodies.

use async_trait::async_trait;

use super::{collection_url, item_url, page_url, TodoApi};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{NewTodo, Page, Todo, TodoPatch};

/// Todo API backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone())
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_page(&self, page: u32, size: u32) -> ApiResult<Page<Todo>> {
        let url = page_url(&self.base_url, page, size);
        let page = self.client.get(&url).send().await?.error_for_status()?.json().await?;
        log::debug!("[API] GET {}", url);
        Ok(page)
    }

    async fn list_all(&self) -> ApiResult<Vec<Todo>> {
        let url = collection_url(&self.base_url);
        let todos = self.client.get(&url).send().await?.error_for_status()?.json().await?;
        log::debug!("[API] GET {}", url);
        Ok(todos)
    }

    async fn create(&self, title: &str) -> ApiResult<Todo> {
        let url = collection_url(&self.base_url);
        let todo = self
            .client
            .post(&url)
            .json(&NewTodo { title })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        log::debug!("[API] POST {}", url);
        Ok(todo)
    }

    async fn update(&self, id: u64, patch: &TodoPatch) -> ApiResult<Todo> {
        let url = item_url(&self.base_url, id);
        let todo = self
            .client
            .put(&url)
            .json(patch)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        log::debug!("[API] PUT {}", url);
        Ok(todo)
    }

    async fn delete(&self, id: u64) -> ApiResult<()> {
        // No content expected; the body is ignored
        let url = item_url(&self.base_url, id);
        self.client.delete(&url).send().await?.error_for_status()?;
        log::debug!("[API] DELETE {}", url);
        Ok(())
    }
}
